use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use log::{LevelFilter, error, info};
use wrap_snake::board::BoardGeometry;
use wrap_snake::clock::TickClock;
use wrap_snake::game::GameEngine;
use wrap_snake::input::{GameInput, poll_input};
use wrap_snake::renderer;
use wrap_snake::settings::Settings;
use wrap_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use wrap_snake::ui::hud::HudInfo;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board width in cells.
    #[arg(long)]
    width: Option<u16>,
    /// Board height in cells.
    #[arg(long)]
    height: Option<u16>,
    /// Simulation ticks per second.
    #[arg(long = "tick-rate")]
    tick_rate: Option<u32>,
    /// Seed for a reproducible food sequence.
    #[arg(long)]
    seed: Option<u64>,
    /// Color theme: classic, ocean or neon.
    #[arg(long)]
    theme: Option<String>,
    /// Settings file to read instead of the platform default.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write logs to this file (filter with RUST_LOG).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }

    let settings = resolve_settings(&cli)?;
    install_panic_hook();

    let result = run(&settings);
    if let Err(error) = &result {
        error!("session ended with an error: {error}");
    }
    result
}

fn resolve_settings(cli: &Cli) -> io::Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from_path(path),
        None => Settings::load(),
    }
    .map_err(io::Error::other)?;

    if let Some(width) = cli.width {
        settings.grid_width = width;
    }
    if let Some(height) = cli.height {
        settings.grid_height = height;
    }
    if let Some(rate) = cli.tick_rate {
        settings.tick_rate_hz = rate;
    }
    if let Some(theme) = &cli.theme {
        settings.theme.clone_from(theme);
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }

    settings.validate().map_err(io::Error::other)?;
    Ok(settings)
}

fn run(settings: &Settings) -> io::Result<()> {
    let board = BoardGeometry::new(settings.grid_size()).map_err(io::Error::other)?;
    let theme = settings.theme().map_err(io::Error::other)?;
    let mut engine = match settings.seed {
        Some(seed) => GameEngine::new_with_seed(board, seed),
        None => GameEngine::new(board),
    }
    .map_err(io::Error::other)?;

    info!(
        "starting {}x{} board at {} Hz, seed {:?}",
        settings.grid_width, settings.grid_height, settings.tick_rate_hz, settings.seed
    );

    let mut session = TerminalSession::enter()?;
    let mut clock = TickClock::new(settings.tick_rate_hz, Instant::now());
    let mut best_score = 0;
    let mut dirty = true;

    loop {
        if dirty {
            session.draw(|frame| {
                renderer::render(frame, &engine, HudInfo { best_score, theme });
            })?;
            dirty = false;
        }

        // Block on input until the next tick is due.
        match poll_input(clock.until_next(Instant::now()))? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Direction(direction)) => engine.turn(direction),
            None => {}
        }

        let now = Instant::now();
        if clock.is_due(now) {
            let result = engine.tick().map_err(io::Error::other)?;
            clock.mark(now);

            best_score = best_score.max(result.score);
            if result.needs_full_redraw() {
                session.force_full_redraw()?;
            }
            dirty = true;
        }
    }

    info!(
        "quit after {} ticks, {} resets, score {}, best {}",
        engine.tick_count, engine.resets, engine.score, best_score
    );
    Ok(())
}

fn init_file_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(io::Error::other)
}
