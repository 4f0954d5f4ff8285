use std::io::{stdin, stdout};

use anyhow::{Context, Result};
use apple_nim::game::{play_with, Game, Player};
use apple_nim::StrategyKind;
use clap::Parser;

/// Play Apple Nim against the computer. Whoever picks the last apple loses.
#[derive(Parser)]
#[command(name = "play_apple_nim", version, about, long_about = None)]
struct Args {
    /// Number of apples in the basket
    #[arg(long, default_value_t = 26)]
    apples: usize,

    /// Who moves first
    #[arg(long, value_enum, default_value_t = Player::Human)]
    first: Player,

    /// How the computer chooses its picks
    #[arg(long, value_enum, default_value_t = StrategyKind::Minimax)]
    strategy: StrategyKind,

    /// Search the top-level minimax candidates in parallel
    #[arg(long)]
    parallel: bool,

    /// Print the search statistics of every computer move as JSON
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    anyhow::ensure!(args.apples > 0, "the basket needs at least one apple");

    let mut game =
        Game::new(args.apples, args.first, args.strategy).with_parallel_search(args.parallel);
    let show_stats = args.stats && args.strategy == StrategyKind::Minimax;

    play_with(&mut game, stdin().lock(), stdout(), |_, stats| {
        if show_stats {
            match serde_json::to_string(stats) {
                Ok(json) => eprintln!("{json}"),
                Err(err) => log::warn!("could not serialize search stats: {err}"),
            }
        }
    })
    .context("game aborted")?;
    Ok(())
}
