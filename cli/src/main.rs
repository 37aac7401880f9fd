//! Thin command-line driver for the ball clock engine.
//!
//! Ball counts come either from positional arguments or, when none are
//! given, from stdin one per line with `0` ending the batch (the original
//! problem's input format). Each clock is simulated independently;
//! failures go to stderr without aborting the rest of the batch.

use std::io::{self, BufRead};
use std::process::ExitCode;

use ball_clock_core_rs::{
    CycleReport, Simulation, SimulationConfig, SimulationError, DEFAULT_MAX_STEPS,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "ball-clock")]
#[command(
    about = "Computes how many days a ball clock runs before its ball ordering repeats",
    long_about = None
)]
struct Cli {
    /// Ball counts to simulate (27-127). When empty, counts are read
    /// from stdin, one per line; 0 ends the batch.
    balls: Vec<u32>,

    /// Emit reports as a JSON array instead of text lines
    #[arg(long)]
    json: bool,

    /// Maximum simulated minutes before giving up on a clock
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let sizes = if cli.balls.is_empty() {
        match read_sizes(io::stdin().lock()) {
            Ok(sizes) => sizes,
            Err(err) => {
                eprintln!("ball-clock: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        cli.balls
    };

    let config = SimulationConfig {
        max_steps: cli.max_steps,
        record_events: false,
    };

    let mut reports = Vec::new();
    let mut failed = false;
    for balls in sizes {
        match run_one(balls, config.clone()) {
            Ok(report) => reports.push(report),
            Err(err) => {
                eprintln!("ball-clock: {err}");
                failed = true;
            }
        }
    }

    if cli.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("ball-clock: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for report in &reports {
            println!("{} balls cycle after {} days.", report.balls, report.days);
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_one(balls: u32, config: SimulationConfig) -> Result<CycleReport, SimulationError> {
    let mut sim = Simulation::with_config(balls, config)?;
    sim.run()
}

/// Parse ball counts from a reader, one per line; `0` ends the batch.
fn read_sizes(input: impl BufRead) -> io::Result<Vec<u32>> {
    let mut sizes = Vec::new();
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let count: u32 = trimmed.parse().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("not a ball count: {trimmed:?}"),
            )
        })?;
        if count == 0 {
            break;
        }
        sizes.push(count);
    }
    Ok(sizes)
}
