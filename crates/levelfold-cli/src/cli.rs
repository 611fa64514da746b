//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use levelfold_core::constants::VERSION;

/// Factor per-level data into static and per-level sections.
#[derive(Debug, Parser)]
#[command(name = "levelfold")]
#[command(about = "Factor shared structure out of per-level data", long_about = None)]
#[command(version = VERSION)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output directory (overrides [export].output_dir)
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Write compact JSON instead of indented
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Factor groups of levels: { group: { level: value } }
    Factor {
        /// Input JSON file
        #[arg(long)]
        input: PathBuf,

        /// Output document name
        #[arg(long, default_value = "factored")]
        name: String,
    },

    /// Convert and factor gem records (a JSON array)
    Gems {
        /// Input JSON file
        #[arg(long)]
        input: PathBuf,

        /// Output document name; the minimal export gets a `_minimal` suffix
        #[arg(long, default_value = "gems")]
        name: String,
    },
}
