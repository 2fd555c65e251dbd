use std::io;
use std::panic;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use serpent::config::{
    ConfigError, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_MOVE_INTERVAL_MS, GameConfig,
};
use serpent::game::{GameState, GameStatus};
use serpent::input::poll_frame_input;
use serpent::renderer;
use thiserror::Error;

/// Delay between frames; input polling and rendering run at this cadence,
/// movement is gated separately by the game's move timer.
const FRAME_SLEEP: Duration = Duration::from_millis(16);

type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

#[derive(Debug, Parser)]
#[command(version, about = "Classic grid Snake game for the terminal")]
struct Cli {
    /// Board width in cells.
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: u16,

    /// Board height in cells.
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: u16,

    /// Milliseconds the snake takes to advance one cell.
    #[arg(long = "interval-ms", default_value_t = DEFAULT_MOVE_INTERVAL_MS)]
    interval_ms: u64,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("serpent: {error}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = GameConfig::new(cli.width, cli.height, cli.interval_ms)?;

    install_panic_hook();

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, config);
    cleanup_terminal()?;

    result.map_err(AppError::from)
}

fn run(terminal: &mut AppTerminal, config: GameConfig) -> io::Result<()> {
    let mut state = GameState::new(config.grid, config.move_interval_secs);
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| renderer::render(frame, &state))?;

        let input = poll_frame_input()?;
        if input.quit {
            return Ok(());
        }

        let elapsed = last_frame.elapsed().as_secs_f32();
        last_frame = Instant::now();

        if matches!(state.status, GameStatus::Won | GameStatus::Lost) {
            // Finished sessions restart on any key; the fresh session
            // starts steering from the next frame's input.
            if input.any_key {
                state.reset();
            }
        } else {
            state.tick(elapsed, input.steer);
        }

        thread::sleep(FRAME_SLEEP);
    }
}

fn setup_terminal() -> io::Result<AppTerminal> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
        let _ = disable_raw_mode();
        return Err(error);
    }

    Terminal::new(CrosstermBackend::new(stdout))
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
