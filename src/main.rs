//! Terminal front-end entry point.

use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use hexguess::input;
use hexguess::logic::GameLoop;
use hexguess::models::settings::{Difficulty, GameMode, Settings};
use hexguess::state::GameController;
use hexguess::storage::{FileStore, KeyValueStore, MemoryStore};
use hexguess::system::bus::SystemBus;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Guess the hex code of a colour, or the colour of a hex code",
    long_about = None
)]
struct Args {
    /// Settings file, created with defaults when missing.
    #[arg(long, default_value = "settings.toml")]
    config: PathBuf,
    /// Overrides `stats_file` from the settings.
    #[arg(long)]
    stats_file: Option<PathBuf>,
    /// easy | medium | hard | expert
    #[arg(long)]
    difficulty: Option<Difficulty>,
    /// hex | color
    #[arg(long)]
    mode: Option<GameMode>,
    /// Log the target colour of every round.
    #[arg(long)]
    reveal: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    log::info!("MAIN: Booting hexguess...");

    let mut settings = Settings::load(&args.config);
    if let Some(difficulty) = args.difficulty {
        settings.difficulty = difficulty;
    }
    if let Some(mode) = args.mode {
        settings.mode = mode;
    }
    settings.reveal_target |= args.reveal;

    let stats_path = args
        .stats_file
        .unwrap_or_else(|| PathBuf::from(&settings.stats_file));
    let store: Box<dyn KeyValueStore> = match FileStore::open(&stats_path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!(
                "MAIN: Storage at {} unreadable ({}), statistics will not be kept",
                stats_path.display(),
                e
            );
            Box::new(MemoryStore::new())
        }
    };

    let bus = SystemBus::new();
    let input_handle = input::start_thread(bus.clone(), BufReader::new(io::stdin()));

    let controller = GameController::new(store, &settings);
    let mut game = GameLoop::new(controller, io::stdout());
    game.run(&bus);
    game.into_output().flush().context("failed to flush the terminal output")?;

    // The input thread may still be blocked on stdin after `quit`; only join
    // it when it has already finished.
    if input_handle.is_finished() {
        input_handle
            .join()
            .map_err(|_| anyhow::anyhow!("input thread panicked"))?;
    }

    log::info!("MAIN: Bye");
    Ok(())
}
