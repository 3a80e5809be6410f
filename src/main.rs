use std::io;

use clap::Parser;
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::cli::{ConsoleSession, SessionOptions};
use sea_battle::init_logging;

/// Two-player hot-seat naval combat on a 10x10 grid.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the first player.
    #[arg(long, default_value = "Player 1")]
    player1: String,
    /// Name of the second player.
    #[arg(long, default_value = "Player 2")]
    player2: String,
    #[arg(long, help = "Fix RNG seed for reproducible random fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Deploy both fleets at random instead of prompting.
    #[arg(long)]
    auto_place: bool,
    /// Print a JSON status line when a game ends.
    #[arg(long)]
    json: bool,
    /// Skip the "Press Enter" pause and screen clear between players.
    #[arg(long)]
    no_handover: bool,
    /// Log level (error, warn, info, debug, trace); overrides SEA_BATTLE_LOG.
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let rng = match cli.seed {
        Some(s) => {
            log::info!("using fixed seed {}", s);
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let options = SessionOptions {
        player1: cli.player1,
        player2: cli.player2,
        auto_place: cli.auto_place,
        json: cli.json,
        handover: !cli.no_handover,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = ConsoleSession::new(stdin.lock(), stdout.lock(), rng, options);
    session.run()?;
    Ok(())
}
