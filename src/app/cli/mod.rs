//! CLI Adapter.

mod apply;
mod check;
mod plan;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::configuration::DEFAULT_CONFIG_FILE;
use crate::app::logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "mcfleet")]
#[command(version)]
#[command(about = "Provision a fleet of Minecraft servers from one declaration", long_about = None)]
struct Cli {
    /// Fleet declaration to read
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Raise log verbosity (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the fleet declaration
    #[clap(visible_alias = "c")]
    Check {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Show what apply would write, without touching disk
    #[clap(visible_alias = "p")]
    Plan {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write every artifact for the fleet
    #[clap(visible_alias = "a")]
    Apply {
        /// Override the declared data root
        #[arg(long)]
        data_root: Option<PathBuf>,
        /// Override the declared unit directory
        #[arg(long)]
        unit_dir: Option<PathBuf>,
    },
    /// Print the server.properties of one declared server
    #[clap(visible_alias = "r")]
    Render {
        /// Server name
        name: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config;
    let result: Result<i32, AppError> = match cli.command {
        Commands::Check { strict } => check::run_check(&config, strict),
        Commands::Plan { json } => plan::run_plan(&config, json).map(|_| 0),
        Commands::Apply { data_root, unit_dir } => {
            apply::run_apply(&config, data_root, unit_dir).map(|_| 0)
        }
        Commands::Render { name } => render::run_render(&config, &name).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            if let AppError::FleetInvalid { violations } = &e {
                for violation in violations {
                    eprintln!("[ERROR] {}: {}", config.display(), violation);
                }
            }
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
