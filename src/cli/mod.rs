//! CLI module for bacon.
//!
//! Commands:
//! - shell (default): prompt for names until `quit`
//! - query <name>: one-shot distance
//! - neighbors <label>: cast of a movie or films of an actor
//! - stats: graph statistics

pub mod shell;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use shell::{render_outcome, run_shell};

#[derive(Parser)]
#[command(name = "bacon")]
#[command(about = "Movie distance to Kevin Bacon")]
pub struct Cli {
    /// Config file (TOML)
    #[arg(short, long, default_value = "bacon.toml")]
    pub config: PathBuf,

    /// Dataset file, overrides the config
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Target label, overrides the config
    #[arg(short, long)]
    pub target: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive prompt (default)
    Shell,

    /// Distance from one name to the target
    Query {
        /// Actor (or movie) name, matched exactly
        name: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the direct neighbors of a label
    Neighbors {
        label: String,

        #[arg(long)]
        json: bool,
    },

    /// Show graph statistics
    Stats,
}
