//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, CheckOutcome, LaunchOptions, LaunchOutcome};
use crate::domain::AppError;

/// Exit code for a selection that has nothing to launch.
const EXIT_NOTHING_LAUNCHABLE: i32 = 2;

#[derive(Parser)]
#[command(name = "asset-launch")]
#[command(version)]
#[command(about = "Validate asset selections and launch refresh runs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show whether a selection launches as a single run
    #[clap(visible_alias = "c")]
    Check {
        /// Selection manifest (YAML)
        selection: PathBuf,
        /// Name the job in the control title
        #[arg(short = 'j', long)]
        display_job_name: bool,
    },
    /// Print the launch variables for a selection as JSON
    #[clap(visible_alias = "v")]
    Variables {
        /// Selection manifest (YAML)
        selection: PathBuf,
    },
    /// Launch a run for a selection
    #[clap(visible_alias = "l")]
    Launch {
        /// Selection manifest (YAML)
        selection: PathBuf,
        /// Print the request instead of sending it
        #[arg(long)]
        dry_run: bool,
        /// Configuration file (defaults to ./asset-launch.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Name the job in the control title
        #[arg(short = 'j', long)]
        display_job_name: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Check { selection, display_job_name } => run_check(selection, display_job_name),
        Commands::Variables { selection } => run_variables(selection),
        Commands::Launch { selection, dry_run, config, display_job_name } => {
            let options = LaunchOptions { dry_run, config_path: config, display_job_name };
            run_launch(selection, &options)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn nothing_launchable() -> i32 {
    println!("Nothing launchable for this selection");
    EXIT_NOTHING_LAUNCHABLE
}

fn run_check(selection: PathBuf, display_job_name: bool) -> Result<i32, AppError> {
    match api::check(&selection, display_job_name)? {
        CheckOutcome::NothingLaunchable => Ok(nothing_launchable()),
        CheckOutcome::Launchable { job_name, title } => {
            println!("✅ Launchable: {} (job {})", title, job_name);
            Ok(0)
        }
    }
}

fn run_variables(selection: PathBuf) -> Result<i32, AppError> {
    match api::variables(&selection)? {
        None => Ok(nothing_launchable()),
        Some(variables) => {
            println!("{}", serde_json::to_string_pretty(&variables)?);
            Ok(0)
        }
    }
}

fn run_launch(selection: PathBuf, options: &LaunchOptions) -> Result<i32, AppError> {
    match api::launch(&selection, options)? {
        LaunchOutcome::NothingLaunchable => Ok(nothing_launchable()),
        LaunchOutcome::Launched(run) => {
            println!("✅ Launched run {} for job {}", run.run_id, run.pipeline_name);
            Ok(0)
        }
    }
}
