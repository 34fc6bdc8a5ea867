//! sakata CLI binary.
//!
//! Runs the daily fair-value screening as a single batch job: calendar
//! gate, universe resolution, concurrent evaluation, ranking, report
//! rendering and remote sync. Exit codes: 0 for a normal run (including
//! calendar skips and zero-result runs), 2 for configuration errors,
//! 1 for universe or publish failures.

mod calendar;
mod cmd;
mod config;
mod telemetry;

use clap::{Parser, Subcommand};
use std::process;

#[derive(Parser)]
#[command(name = "sakata")]
#[command(about = "Daily fair-value screening for a fixed equity universe", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the screening and publish the report
    Run {
        /// Worker pool width (practical range 4-20)
        #[arg(short, long, default_value_t = 20)]
        workers: usize,

        /// Valuation model (growth_yield or graham)
        #[arg(short, long, default_value = "growth_yield")]
        model: String,

        /// Run even when the exchange is closed today
        #[arg(long)]
        force: bool,

        /// Render the report to stdout instead of publishing
        #[arg(long)]
        dry_run: bool,
    },

    /// Show whether the exchange is open today
    Calendar,
}

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment.
    let _ = dotenvy::dotenv();

    if let Err(err) = telemetry::init() {
        eprintln!("{err}");
        process::exit(2);
    }

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Run {
            workers,
            model,
            force,
            dry_run,
        } => {
            cmd::run::execute(cmd::run::RunOptions {
                workers,
                model,
                force,
                dry_run,
            })
            .await
        }
        Commands::Calendar => {
            cmd::calendar_status();
            Ok(())
        }
    };

    if let Err(err) = outcome {
        tracing::error!(error = %err, "run aborted");
        process::exit(err.exit_code());
    }
}
