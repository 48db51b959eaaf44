//! Command-line interface.

pub mod completions;
pub mod inspect;
pub mod output;
pub mod resolve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::Settings;
use crate::error::Result;

/// Paramsync - project parameter store values onto annotated cluster objects.
#[derive(Parser)]
#[command(
    name = "paramsync",
    about = "Project parameter store values onto annotated cluster objects",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Settings file (default: ./paramsync.toml)
    #[arg(long, global = true, env = "PARAMSYNC_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve an annotated object manifest and write the updated object
    Resolve {
        /// Object manifest (JSON)
        manifest: PathBuf,
        /// Parameter fixture (TOML) to resolve against
        #[arg(short, long, conflicts_with = "aws")]
        params: Option<PathBuf>,
        /// Resolve against AWS SSM Parameter Store
        #[arg(long)]
        aws: bool,
        /// Write the updated object here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the parameter annotations recognised on a manifest
    Inspect {
        /// Object manifest (JSON)
        manifest: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a CLI command.
pub fn execute(command: Command, config: Option<PathBuf>) -> Result<()> {
    let settings = Settings::load(&config.unwrap_or_else(Settings::default_path))?;

    match command {
        Command::Resolve {
            manifest,
            params,
            aws,
            output,
        } => resolve::execute(&settings, &manifest, params.as_deref(), aws, output),
        Command::Inspect { manifest } => inspect::execute(&settings, &manifest),
        Command::Completions { shell } => completions::execute(shell, &mut std::io::stdout()),
    }
}
