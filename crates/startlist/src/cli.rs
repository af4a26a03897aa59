//! Command-line definition

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "startlist")]
#[command(about = "Build, schedule and finalize orienteering startlists")]
#[command(version)]
pub struct Cli {
    /// Explicit config file, layered over the global one
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Execute a JSON array of startlist commands and print the results
    Run {
        /// Path to the command script
        script: PathBuf,
    },
    /// Schedule and finalize a sample startlist
    Demo,
}
