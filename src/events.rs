pub enum Event {
    EngineEvent(EngineEvent),
    AppEvent(AppEvent),
}

/// Events that mutate the board or the loaded pattern
pub enum EngineEvent {
    /// Advance the board by one generation
    Step,

    /// Flip the cell under the cursor
    Toggle,

    /// Stamp the loaded pattern at the cursor
    Stamp,

    /// Rotate the loaded pattern 90° clockwise
    RotateRight,

    /// Rotate the loaded pattern 90° counterclockwise
    RotateLeft,

    /// Re-roll every cell
    Randomize,

    /// Kill every cell
    Clear,
}

pub enum AppEvent {
    CursorEvent(CursorEvent),

    /// Toggle between running and paused
    TogglePlay,

    /// Nudge the speed up (+1) or down (-1)
    Speed(i32),

    /// Write the board to disk
    Save,

    /// Exit the application
    Exit,
}

pub enum CursorEvent {
    Up,
    Down,
    Left,
    Right,
}
