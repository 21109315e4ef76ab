use std::io::{self, Write};
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use grid_snake::config::{GameConfig, THEME_MEADOW};
use grid_snake::error::GameError;
use grid_snake::game::{GameSession, GameStatus};
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::terminal_runtime::{restore_terminal, TerminalSession};
use log::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "grid-snake", version, about = "Grid-based Snake in the terminal")]
struct Cli {
    /// JSON file overriding the default game parameters.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of the square board.
    #[arg(long = "field-size")]
    field_size: Option<i32>,

    /// Milliseconds between simulation ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for consumable placement, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Run without a terminal UI and print one JSON snapshot per tick.
    #[arg(long)]
    headless: bool,

    /// Maximum number of ticks in headless mode.
    #[arg(long, default_value_t = 100)]
    ticks: u64,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = resolve_config(&cli)?;
    let session = match cli.seed {
        Some(seed) => GameSession::new_with_seed(config, seed)?,
        None => GameSession::new(config)?,
    };
    info!(
        "starting {}x{} game, tick every {} ms",
        config.field_size, config.field_size, config.tick_interval_ms
    );

    if cli.headless {
        run_headless(session, cli.ticks)
    } else {
        install_panic_hook();
        run_interactive(session)
    }
}

fn resolve_config(cli: &Cli) -> Result<GameConfig, GameError> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(field_size) = cli.field_size {
        config.field_size = field_size;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_interval_ms = tick_ms;
    }

    Ok(config)
}

fn run_headless(mut session: GameSession, ticks: u64) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    session.start();

    for _ in 0..ticks {
        let outcome = session.tick();
        serde_json::to_writer(&mut out, &session.snapshot())?;
        writeln!(out)?;

        match outcome {
            Ok(()) => {}
            Err(GameError::NoAvailableSpace { .. }) => break,
            Err(error) => return Err(error.into()),
        }
        if session.status() == GameStatus::GameOver {
            break;
        }
    }

    Ok(())
}

fn run_interactive(mut session: GameSession) -> Result<(), AppError> {
    let mut terminal = TerminalSession::enter()?;
    let mut input = InputHandler::default();
    let tick_interval = session.config().tick_interval();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(&session.snapshot(), &THEME_MEADOW)?;

        if let Some(game_input) = input.poll_input()? {
            if matches!(game_input, GameInput::Quit) {
                break;
            }

            handle_input(&mut session, game_input);
        }

        if last_tick.elapsed() >= tick_interval {
            match session.tick() {
                Ok(()) => {}
                Err(GameError::NoAvailableSpace { .. }) => debug!("board full, waiting for reset"),
                Err(error) => return Err(error.into()),
            }
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn handle_input(session: &mut GameSession, input: GameInput) {
    match input {
        GameInput::Direction(direction) => session.handle_input(direction),
        GameInput::Confirm => match session.status() {
            GameStatus::Idle => session.start(),
            GameStatus::GameOver => session.reset(),
            GameStatus::Playing => {}
        },
        GameInput::Quit => {}
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
