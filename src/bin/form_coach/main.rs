// ABOUTME: Form coach CLI - catalog inspection, catalog validation, frame replay, and live streaming
// ABOUTME: Reads JSON-lines pose frames and prints JSON snapshots on stdout; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List built-in exercises
//! form-coach exercises list
//!
//! # Show one definition
//! form-coach exercises show plank
//!
//! # Validate a custom catalog
//! form-coach catalog validate ./my-exercises.yaml
//!
//! # Replay a recording and print the summary
//! form-coach replay --exercise pushup --frames session.jsonl
//!
//! # Evaluate live frames piped from a pose estimator
//! pose-estimator --jsonl | form-coach stream --exercise plank
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use form_coach::catalog::ExerciseCatalog;
use form_coach::config::CoachConfig;
use form_coach::logging::LoggingConfig;
use form_core::errors::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "form-coach",
    version,
    about = "Pose-landmark exercise evaluation",
    long_about = "Counts repetitions, times holds, and checks form from JSON-lines pose landmark frames."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog file merged over the built-in exercises (overrides `FORM_COACH_CATALOG_PATH`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect the exercise catalog
    Exercises {
        #[command(subcommand)]
        action: ExercisesCommand,
    },

    /// Work with catalog files
    Catalog {
        #[command(subcommand)]
        action: CatalogCommand,
    },

    /// Evaluate a recorded JSON-lines frame file; ticks follow frame timestamps
    Replay {
        /// Exercise key (defaults to `FORM_COACH_DEFAULT_EXERCISE`)
        #[arg(long, short = 'e')]
        exercise: Option<String>,

        /// Recording with one frame per line
        #[arg(long, short = 'f')]
        frames: PathBuf,

        /// Print a snapshot after every frame
        #[arg(long)]
        verbose_frames: bool,
    },

    /// Evaluate JSON-lines frames from stdin with wall-clock ticks
    Stream {
        /// Exercise key (defaults to `FORM_COACH_DEFAULT_EXERCISE`)
        #[arg(long, short = 'e')]
        exercise: Option<String>,
    },
}

#[derive(Subcommand)]
enum ExercisesCommand {
    /// List every exercise key, name, and type
    List,

    /// Print one exercise definition as JSON
    Show {
        /// Exercise key
        key: String,
    },
}

#[derive(Subcommand)]
enum CatalogCommand {
    /// Parse and validate a YAML or JSON catalog file
    Validate {
        /// Catalog file (.yaml, .yml, or .json)
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;
    let config = CoachConfig::from_env().map_err(AppError::from)?;
    let catalog_path = cli.catalog.or_else(|| config.catalog_path.clone());

    match cli.command {
        Command::Catalog {
            action: CatalogCommand::Validate { path },
        } => commands::catalog::validate(&path)?,
        Command::Exercises { action } => {
            let catalog = ExerciseCatalog::with_overlay(catalog_path.as_deref())?;
            match action {
                ExercisesCommand::List => commands::exercises::list(&catalog),
                ExercisesCommand::Show { key } => commands::exercises::show(&catalog, &key)?,
            }
        }
        Command::Replay {
            exercise,
            frames,
            verbose_frames,
        } => {
            let catalog = Arc::new(ExerciseCatalog::with_overlay(catalog_path.as_deref())?);
            let exercise = exercise.unwrap_or_else(|| config.default_exercise.clone());
            commands::replay::run(catalog, &config, &exercise, &frames, verbose_frames)?;
        }
        Command::Stream { exercise } => {
            let catalog = Arc::new(ExerciseCatalog::with_overlay(catalog_path.as_deref())?);
            let exercise = exercise.unwrap_or_else(|| config.default_exercise.clone());
            commands::stream::run(catalog, &config, &exercise).await?;
        }
    }

    Ok(())
}
