use std::fs;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use anyhow::bail;

use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;

use tracing::error;
use tracing::info;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use lifeboard::board::Board;
use lifeboard::camera::Camera;
use lifeboard::events::AppEvent;
use lifeboard::events::CursorEvent;
use lifeboard::events::EngineEvent;
use lifeboard::events::Event;
use lifeboard::io::convert_event;
use lifeboard::pattern::Pattern;

const USAGE: &str = "\
Usage: lifeboard [OPTIONS] [BOARD.brd]

Options:
  --wrap           toroidal edges (default: bounded)
  --size HxW       fresh board dimensions (default: 40x80)
  --ratio R        live ratio for randomize, in [0, 1] (default: 0.3)
  --pattern FILE   pattern to stamp with 'a'
  --save NAME      save name for 's' (default: board, under saved/)

Keys:
  arrows move the cursor, space toggles, enter steps, p plays/pauses,
  ]/[ change speed, a stamps the pattern, x/X rotate it, z randomizes,
  c clears, s saves, q quits.
";

struct Args {
    wrap_around: bool,
    height: usize,
    width: usize,
    ratio: f64,
    board: Option<PathBuf>,
    pattern: Option<PathBuf>,
    save_name: String,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        wrap_around: false,
        height: 40,
        width: 80,
        ratio: 0.3,
        board: None,
        pattern: None,
        save_name: "board".to_string(),
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print!("{USAGE}");
                std::process::exit(0);
            }

            "--wrap" => args.wrap_around = true,

            "--size" => {
                let value = iter.next().context("--size takes HxW")?;
                let Some((height, width)) = value.split_once('x') else {
                    bail!("Invalid --size \"{value}\", expected HxW");
                };

                args.height = height.parse().context("Invalid --size height")?;
                args.width = width.parse().context("Invalid --size width")?;
                if args.height == 0 || args.width == 0 {
                    bail!("--size dimensions must be positive");
                }
            }

            "--ratio" => {
                let value = iter.next().context("--ratio takes a number")?;
                args.ratio = value.parse().context("Invalid --ratio")?;
                if !(0.0..=1.0).contains(&args.ratio) {
                    bail!("--ratio must be within [0, 1]");
                }
            }

            "--pattern" => {
                let value = iter.next().context("--pattern takes a file")?;
                args.pattern = Some(PathBuf::from(value));
            }

            "--save" => {
                args.save_name = iter.next().context("--save takes a name")?;
            }

            flag if flag.starts_with('-') => bail!("Unknown option \"{flag}\"\n\n{USAGE}"),

            board => args.board = Some(PathBuf::from(board)),
        }
    }

    Ok(args)
}

/// Restores the terminal on drop, so errors don't leave raw mode behind.
struct TermGuard;

impl TermGuard {
    fn enter() -> anyhow::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self)
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = parse_args()?;

    let mut board = match &args.board {
        Some(path) => Board::load(args.wrap_around, path)
            .with_context(|| format!("Failed to load board {}", path.display()))?,
        None => Board::new(args.wrap_around, args.height, args.width),
    };

    let mut pattern = match &args.pattern {
        Some(path) => {
            let pattern = Pattern::load(path)
                .with_context(|| format!("Failed to load pattern {}", path.display()))?;

            if pattern.height() > board.height() || pattern.width() > board.width() {
                warn!("Pattern is too big for the board, ignoring it");
                None
            } else {
                info!("Loaded pattern:\n{pattern}");
                Some(pattern)
            }
        }
        None => None,
    };

    let _guard = TermGuard::enter()?;

    run(&mut board, &mut pattern, &args)
}

fn run(board: &mut Board, pattern: &mut Option<Pattern>, args: &Args) -> anyhow::Result<()> {
    let (cols, rows) = terminal::size()?;

    // two character rows reserved for the status line
    let view_rows = rows.saturating_sub(2).max(1);
    let mut camera = Camera::new(cols as usize * 2, view_rows as usize * 4);

    let mut cursor_pos = (0usize, 0usize);
    let mut playing = false;
    let mut speed: u32 = 25;
    let mut last_tick = Instant::now();

    loop {
        draw(board, &mut camera, cursor_pos, playing, speed, pattern)?;

        let tick = Duration::from_millis(1_000 / speed.min(1_000) as u64);
        let timeout = if playing {
            tick.saturating_sub(last_tick.elapsed())
        } else {
            Duration::from_millis(250)
        };

        if event::poll(timeout)? {
            let Some(event) = convert_event(event::read()?) else {
                continue;
            };

            match event {
                Event::AppEvent(app_event) => match app_event {
                    AppEvent::Exit => break,
                    AppEvent::TogglePlay => playing = !playing,
                    AppEvent::Speed(delta) => speed = adjust_speed(speed, delta),
                    AppEvent::Save => save(board, &args.save_name),
                    AppEvent::CursorEvent(cursor_event) => {
                        move_cursor(&mut cursor_pos, cursor_event, board);
                        follow_cursor(&mut camera, cursor_pos);
                    }
                },

                Event::EngineEvent(engine_event) => match engine_event {
                    EngineEvent::Step => board.run_iteration(),
                    EngineEvent::Toggle => board.toggle(cursor_pos.0, cursor_pos.1),
                    EngineEvent::Randomize => board.randomize(args.ratio),
                    EngineEvent::Clear => board.clear(),

                    EngineEvent::Stamp => {
                        if let Some(pattern) = pattern {
                            board.add_pattern(pattern, cursor_pos.0, cursor_pos.1);
                        }
                    }

                    EngineEvent::RotateRight => {
                        if let Some(pattern) = pattern {
                            pattern.rotate();
                        }
                    }

                    EngineEvent::RotateLeft => {
                        // three clockwise turns
                        if let Some(pattern) = pattern {
                            for _ in 0..3 {
                                pattern.rotate();
                            }
                        }
                    }
                },
            }
        }

        if playing && last_tick.elapsed() >= tick {
            // past 1000 generations per second the frame delay can't shrink
            // further, so batch iterations instead
            for _ in 0..(speed / 1_000).max(1) {
                board.run_iteration();
            }

            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn draw(
    board: &Board,
    camera: &mut Camera,
    cursor_pos: (usize, usize),
    playing: bool,
    speed: u32,
    pattern: &Option<Pattern>,
) -> anyhow::Result<()> {
    let mut stdout = io::stdout();

    camera.reset();
    camera.draw_grid(board.grid());

    queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

    {
        let frame = camera.render();
        for (i, line) in frame.lines().enumerate() {
            queue!(stdout, cursor::MoveTo(0, i as u16), style::Print(line))?;
        }
    }

    let mut status = format!(
        "{}x{}  iter {}  births {}  deaths {}  pop {}  speed {}  [{}]",
        board.height(),
        board.width(),
        board.iterations(),
        board.births(),
        board.deaths(),
        board.grid().population(),
        speed,
        if playing { "running" } else { "paused" },
    );
    if let Some(pattern) = pattern {
        status.push_str(&format!("  pattern {}x{}", pattern.height(), pattern.width()));
    }

    let status_row = (camera.height() / 4) as u16;
    queue!(stdout, cursor::MoveTo(0, status_row), style::Print(&status))?;

    if let Some((x, y)) = camera.screen_position(cursor_pos.0, cursor_pos.1) {
        queue!(stdout, cursor::MoveTo(x, y), style::Print('▒'))?;
    }

    stdout.flush()?;

    Ok(())
}

fn move_cursor(pos: &mut (usize, usize), event: CursorEvent, board: &Board) {
    // the cursor clamps at the edges; the board itself never clamps
    match event {
        CursorEvent::Up => pos.0 = pos.0.saturating_sub(1),
        CursorEvent::Down => pos.0 = (pos.0 + 1).min(board.height() - 1),
        CursorEvent::Left => pos.1 = pos.1.saturating_sub(1),
        CursorEvent::Right => pos.1 = (pos.1 + 1).min(board.width() - 1),
    }
}

/// Pan the camera just enough to keep the cursor in view.
fn follow_cursor(camera: &mut Camera, (row, col): (usize, usize)) {
    let x = col as i32 + camera.x();
    if x < 0 {
        camera.offset_x(-x);
    } else if x >= camera.width() as i32 {
        camera.offset_x(camera.width() as i32 - 1 - x);
    }

    let y = row as i32 + camera.y();
    if y < 0 {
        camera.offset_y(-y);
    } else if y >= camera.height() as i32 {
        camera.offset_y(camera.height() as i32 - 1 - y);
    }
}

/// Clamp to 1..=100_000, scaling the increment with the current magnitude so
/// bracket taps stay useful at high speeds.
fn adjust_speed(speed: u32, delta: i32) -> u32 {
    let step: i64 = match speed {
        10_000.. => 1_000,
        1_000.. => 100,
        100.. => 10,
        _ => 1,
    };

    (speed as i64 + delta as i64 * step).clamp(1, 100_000) as u32
}

/// Plain names land under `saved/` and get `.brd` appended when missing.
fn save_path(name: &str) -> PathBuf {
    let mut name = name.to_string();
    if !name.ends_with(".brd") {
        name.push_str(".brd");
    }

    let path = PathBuf::from(&name);
    if path.parent().is_none_or(|p| p.as_os_str().is_empty()) {
        return Path::new("saved").join(path);
    }

    path
}

fn save(board: &Board, name: &str) {
    let path = save_path(name);

    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            error!("Failed to create {}: {e}", dir.display());
            return;
        }
    }

    match board.save(&path) {
        Ok(()) => info!(path = %path.display(), "Board saved"),
        Err(e) => error!("Failed to save board: {e}"),
    }
}
