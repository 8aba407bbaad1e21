//! Jewel Raid entry point
//!
//! Runs a headless game to completion and reports the final score.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use jewel_raid::host::{self, Host};
use jewel_raid::{Tuning, TuningError};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run seed (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Tuning JSON file overriding the default balance
    #[arg(short, long)]
    tuning: Option<PathBuf>,

    /// Stop after this many seconds of game time even if the run is still going
    #[arg(long, default_value_t = 600)]
    max_seconds: u64,

    /// Sweep the ship left and right instead of leaving it parked
    #[arg(long)]
    sweep: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning, TuningError> {
    match path {
        Some(path) => Tuning::load(path),
        None => Ok(Tuning::default()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Jewel Raid (headless) starting, seed {}", seed);

    let mut game = match load_tuning(args.tuning.as_ref()).and_then(|t| Host::new(seed, t)) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let max_time = Duration::from_secs(args.max_seconds);
    let summary = if args.sweep {
        game.run_until_paused(max_time, host::sweep)
    } else {
        game.run_until_paused(max_time, host::idle)
    };

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        match summary.cause {
            Some(cause) => println!("Game Over ({cause:?})"),
            None => println!("Run stopped before game over"),
        }
        println!("Final Score: {}", summary.score);
        println!(
            "waves {}, kills {}, treasures {}, speed {}, {}s left",
            summary.waves,
            summary.kills,
            summary.treasures,
            if summary.boosted { "MID" } else { "LOW" },
            summary.seconds_remaining
        );
    }
    ExitCode::SUCCESS
}
