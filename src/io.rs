use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;

use crate::events::AppEvent;
use crate::events::CursorEvent;
use crate::events::EngineEvent;
use crate::events::Event;

/// Converts a crossterm event into a lifeboard event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    let CrossTermEvent::Key(KeyEvent {
        code, modifiers, ..
    }) = event
    else {
        return None;
    };

    match code {
        KeyCode::Char('c') if modifiers == KeyModifiers::CONTROL => {
            Some(Event::AppEvent(AppEvent::Exit))
        }

        KeyCode::Char('q') | KeyCode::Esc => Some(Event::AppEvent(AppEvent::Exit)),

        KeyCode::Up => Some(Event::AppEvent(AppEvent::CursorEvent(CursorEvent::Up))),
        KeyCode::Down => Some(Event::AppEvent(AppEvent::CursorEvent(CursorEvent::Down))),
        KeyCode::Left => Some(Event::AppEvent(AppEvent::CursorEvent(CursorEvent::Left))),
        KeyCode::Right => Some(Event::AppEvent(AppEvent::CursorEvent(CursorEvent::Right))),

        KeyCode::Char(' ') => Some(Event::EngineEvent(EngineEvent::Toggle)),
        KeyCode::Enter => Some(Event::EngineEvent(EngineEvent::Step)),

        KeyCode::Char('p') => Some(Event::AppEvent(AppEvent::TogglePlay)),
        KeyCode::Char(']') => Some(Event::AppEvent(AppEvent::Speed(1))),
        KeyCode::Char('[') => Some(Event::AppEvent(AppEvent::Speed(-1))),

        KeyCode::Char('a') => Some(Event::EngineEvent(EngineEvent::Stamp)),
        KeyCode::Char('x') => Some(Event::EngineEvent(EngineEvent::RotateRight)),
        KeyCode::Char('X') => Some(Event::EngineEvent(EngineEvent::RotateLeft)),

        KeyCode::Char('z') => Some(Event::EngineEvent(EngineEvent::Randomize)),
        KeyCode::Char('c') => Some(Event::EngineEvent(EngineEvent::Clear)),
        KeyCode::Char('s') => Some(Event::AppEvent(AppEvent::Save)),

        _ => None,
    }
}
