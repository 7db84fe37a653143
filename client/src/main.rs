mod config;
mod console_ui;
mod game_runner;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tictactoe_common::tictactoe::{Board, TicTacToeGameState};
use tictactoe_common::{log, logger};

use config::{Config, config_manager_for, get_config_manager};
use game_runner::GameRunner;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a computer that never loses")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path to the YAML config file; defaults to a file next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Let the engine play both sides and print the game
    #[arg(long)]
    self_play: bool,

    /// Start from a position instead of an empty board, e.g. "XX.|OO.|..."
    #[arg(long, conflicts_with = "self_play")]
    board: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = match args.config {
        Some(path) => config_manager_for(path),
        None => get_config_manager(),
    };
    log!("Loading config from {}", config_manager.path().display());

    let config: Config = config_manager.get_config().unwrap_or_else(|e| {
        log!("{}, falling back to defaults", e);
        Config::default()
    });

    let state = match args.board {
        Some(board) => {
            log!("Resuming from position {}", board);
            TicTacToeGameState::from_board(board.parse::<Board>()?)?
        }
        None => TicTacToeGameState::new(),
    };

    let mut runner = GameRunner::with_state(config, state, io::stdin().lock(), io::stdout());
    if args.self_play {
        let outcome = runner.run_self_play()?;
        log!("Self-play finished: {:?}", outcome);
    } else {
        runner.run()?;
    }

    log!("Client shut down");
    Ok(())
}
