// ABOUTME: ProFit CLI - builds the food index and serves fitness and nutrition advice
// ABOUTME: Handles the build, recommend, and serve subcommands with sysexits-style exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Fit the scaler and neighbour index from the dataset
//! profit-cli build --dataset data/diet_data.csv
//!
//! # One recommendation, printed to the terminal
//! profit-cli recommend --weight 70 --height 175 --diet Veg --budget 60 --protein 25
//!
//! # Same, and save the plan
//! profit-cli recommend --diet Non-Veg --location gym --export
//!
//! # JSON-lines session on stdin/stdout
//! profit-cli serve
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use profit_advisor::config::AdvisorConfig;
use profit_advisor::constants::defaults;
use profit_advisor::errors::AppResult;
use profit_advisor::logging::LoggingConfig;
use profit_advisor::models::{AdvisorRequest, DietType, WorkoutLocation};
use profit_advisor::report::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "profit-cli",
    about = "ProFit AI fitness and nutrition advisor",
    long_about = "Builds the nearest-neighbour food index and serves BMI-based workout and meal recommendations."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the fitted artifacts (overrides `PROFIT_MODELS_DIR`)
    #[arg(long, global = true)]
    models_dir: Option<PathBuf>,

    /// Food dataset CSV (overrides `PROFIT_DATASET_PATH`)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Fit the scaler and neighbour index from the dataset and persist both
    Build,

    /// Produce one recommendation
    Recommend(RecommendArgs),

    /// Answer JSON requests line by line on stdin
    Serve,
}

#[derive(Args)]
struct RecommendArgs {
    /// Body weight in kg (40-150)
    #[arg(long, default_value_t = defaults::WEIGHT_KG)]
    weight: u32,

    /// Height in cm (120-220)
    #[arg(long, default_value_t = defaults::HEIGHT_CM)]
    height: u32,

    /// Dietary choice (Veg or Non-Veg)
    #[arg(long, default_value = "Veg")]
    diet: DietType,

    /// Budget per meal in rupees (10-150)
    #[arg(long, default_value_t = defaults::BUDGET_PER_MEAL)]
    budget: u32,

    /// Goal protein per meal in grams (5-60)
    #[arg(long, default_value_t = defaults::GOAL_PROTEIN_G)]
    protein: u32,

    /// Workout context (home or gym)
    #[arg(long, default_value = "home")]
    location: WorkoutLocation,

    /// Save the plan as plain text when foods matched
    #[arg(long, num_args = 0..=1, default_missing_value = defaults::EXPORT_FILE_NAME)]
    export: Option<PathBuf>,

    /// Print the recommendation as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            helpers::display::display_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = AdvisorConfig::from_env()?.with_overrides(cli.dataset, cli.models_dir);

    match cli.command {
        Command::Build => commands::build::run(&config),
        Command::Recommend(args) => commands::recommend::run(&config, &args.into()),
        Command::Serve => commands::serve::run(&config),
    }
}

impl From<RecommendArgs> for commands::recommend::RecommendOptions {
    fn from(args: RecommendArgs) -> Self {
        Self {
            request: AdvisorRequest {
                weight_kg: args.weight,
                height_cm: args.height,
                diet: args.diet,
                budget_per_meal: args.budget,
                goal_protein_g: args.protein,
                location: args.location,
            },
            export: args.export,
            format: OutputFormat::from_json_flag(args.json),
        }
    }
}
