// ABOUTME: Pierre training CLI - log sets and manage an in-progress training from the terminal
// ABOUTME: Drives the auto-save coordinator against the REST training backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show a training
//! pierre-training-cli show 42
//!
//! # Log a set of bench press (exercise 7)
//! pierre-training-cli log-set 42 --exercise 7 --weight 80 --reps 8 --rpe 8
//!
//! # Correct the second set of the first exercise
//! pierre-training-cli update-set 42 --position 1 --set 2 --weight 82.5 --reps 6
//!
//! # Remove the third exercise, or a single set
//! pierre-training-cli remove-exercise 42 --position 3
//! pierre-training-cli remove-set 42 --position 1 --set 2
//!
//! # Finish the training (duration defaults to time since start)
//! pierre-training-cli finish 42 --duration-secs 3600
//!
//! # Estimate a one-rep max
//! pierre-training-cli one-rep-max --weight 100 --reps 5 --formula epley
//! ```
//!
//! Positions are 1-based, as shown by `show`.

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pierre_training_sync::{
    analytics::OneRepMaxFormula, config::SyncConfig, context::AuthContext, logging::LoggingConfig,
};
use tracing::debug;

use commands::session::{SessionClient, SetValues};

#[derive(Parser)]
#[command(
    name = "pierre-training-cli",
    about = "Pierre training logging CLI",
    long_about = "Log sets and manage in-progress trainings against the Pierre training backend."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL override (defaults to `PIERRE_API_BASE_URL`)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Bearer token override (defaults to `PIERRE_ACCESS_TOKEN`)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show a training with its exercises and sets
    Show {
        /// Training ID
        training_id: i64,

        /// Print the raw JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Log a set for an exercise, adding the exercise if it is not in the training yet
    LogSet {
        /// Training ID
        training_id: i64,

        /// Exercise definition ID
        #[arg(long)]
        exercise: i64,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Repetitions
        #[arg(long)]
        reps: u32,

        /// Rate of perceived exertion (1-10)
        #[arg(long)]
        rpe: Option<u8>,

        /// Rest after the set, in seconds
        #[arg(long)]
        rest_secs: Option<u32>,
    },

    /// Overwrite the values of a logged set
    UpdateSet {
        /// Training ID
        training_id: i64,

        /// Exercise position (1-based)
        #[arg(long)]
        position: usize,

        /// Set position within the exercise (1-based)
        #[arg(long)]
        set: usize,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Repetitions
        #[arg(long)]
        reps: u32,

        /// Rate of perceived exertion (1-10)
        #[arg(long)]
        rpe: Option<u8>,
    },

    /// Remove an exercise and all of its sets (saved immediately)
    RemoveExercise {
        /// Training ID
        training_id: i64,

        /// Exercise position (1-based)
        #[arg(long)]
        position: usize,
    },

    /// Remove a single set
    RemoveSet {
        /// Training ID
        training_id: i64,

        /// Exercise position (1-based)
        #[arg(long)]
        position: usize,

        /// Set position within the exercise (1-based)
        #[arg(long)]
        set: usize,
    },

    /// Mark a training as completed
    Finish {
        /// Training ID
        training_id: i64,

        /// Duration in seconds (defaults to time since the training started)
        #[arg(long)]
        duration_secs: Option<u32>,
    },

    /// Estimate a one-rep max from a submaximal set
    OneRepMax {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Repetitions
        #[arg(long)]
        reps: u32,

        /// Formula: brzycki, epley or lombardi
        #[arg(long, default_value = "brzycki")]
        formula: OneRepMaxFormula,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    LoggingConfig::for_cli(cli.verbose).init()?;

    match cli.command {
        Command::OneRepMax {
            weight,
            reps,
            formula,
        } => commands::analytics::one_rep_max(weight, reps, formula),
        command => {
            let config = load_config(cli.base_url.as_deref())?;
            let auth = cli
                .token
                .or_else(|| config.access_token.clone())
                .map_or_else(AuthContext::anonymous, AuthContext::with_token);
            debug!(
                api_root = %config.api_root(),
                authenticated = auth.is_authenticated(),
                "Training CLI configured"
            );
            let client = SessionClient::new(&config, auth);
            run_session_command(&client, command).await
        }
    }
}

async fn run_session_command(client: &SessionClient, command: Command) -> Result<()> {
    match command {
        Command::Show { training_id, json } => client.show(training_id, json).await,
        Command::LogSet {
            training_id,
            exercise,
            weight,
            reps,
            rpe,
            rest_secs,
        } => {
            client
                .log_set(training_id, exercise, SetValues { weight, reps, rpe, rest_secs })
                .await
        }
        Command::UpdateSet {
            training_id,
            position,
            set,
            weight,
            reps,
            rpe,
        } => {
            client
                .update_set(
                    training_id,
                    position,
                    set,
                    SetValues {
                        weight,
                        reps,
                        rpe,
                        rest_secs: None,
                    },
                )
                .await
        }
        Command::RemoveExercise {
            training_id,
            position,
        } => client.remove_exercise(training_id, position).await,
        Command::RemoveSet {
            training_id,
            position,
            set,
        } => client.remove_set(training_id, position, set).await,
        Command::Finish {
            training_id,
            duration_secs,
        } => client.finish(training_id, duration_secs).await,
        // Answered locally before any backend setup
        Command::OneRepMax { .. } => Ok(()),
    }
}

fn load_config(base_url: Option<&str>) -> Result<SyncConfig> {
    let mut config = SyncConfig::from_env()?;
    if let Some(base_url) = base_url {
        let overridden = SyncConfig::for_base_url(base_url)?;
        config.api_base_url = overridden.api_base_url;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_overrides_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pierre-training-cli",
            "show",
            "42",
            "--base-url",
            "http://localhost:8000",
            "--token",
            "abc",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(cli.token.as_deref(), Some("abc"));
        assert!(matches!(cli.command, Command::Show { training_id: 42, .. }));
    }

    #[test]
    fn test_cli_exposes_no_debounce_override() {
        // Commands save explicitly, so a debounce window would never apply
        let parsed = Cli::try_parse_from(["pierre-training-cli", "--debounce-ms", "10", "show", "42"]);
        assert!(parsed.is_err());
    }
}
