#![warn(clippy::pedantic)]

mod log;
mod settings;
mod snapshot;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};

use periodize_domain::{Cursor, Plan, RngSource};

use settings::Settings;
use snapshot::Snapshot;

#[derive(Parser)]
#[command(name = "periodize", about = "Daily undulating periodization planner")]
struct Cli {
    /// Input snapshot (JSON) with exercises, max lifts, weekly sets and readiness
    #[arg(long, global = true)]
    input: Option<PathBuf>,
    /// Settings file (JSON)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Seed for the accessory picker
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the upcoming workouts
    Today {
        /// Number of workouts to show
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Show all workouts of the program
    Program,
    /// Show the weekly sets after the adjustment to the readiness
    Volume,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    log::init(cli.verbose).context("failed to initialize logger")?;

    let settings = Settings::load(cli.settings.as_deref())?;
    let input = cli.input.context("no input snapshot given (--input)")?;
    let request = Snapshot::load(&input)?
        .into_request(&settings)
        .with_context(|| format!("invalid input in {}", input.display()))?;
    let plan = Plan::generate(request)?;

    let mut random = RngSource(match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    });

    match cli.command {
        Commands::Today { count } => {
            let mut cursor = Cursor::new();
            for _ in 0..count {
                let (next, view) = plan.today(cursor, &mut random)?;
                println!("{view}");
                cursor = next;
            }
        }
        Commands::Program => {
            print!("{}", plan.full(&mut random));
        }
        Commands::Volume => {
            for reduction in plan.reductions() {
                println!("{}: -{} sets", reduction.exercise, reduction.removed);
            }
            for (exercise, sets) in plan.weekly_sets().iter() {
                println!("{exercise}: {sets} sets per week");
            }
        }
    }

    Ok(())
}
