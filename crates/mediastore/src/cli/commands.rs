//! CLI command definitions.

use clap::{Parser, Subcommand};
use mediastore::report::OutputFormat;
use std::path::PathBuf;

/// mediastore - media files, storage backends and a fuel/cargo simulation
#[derive(Parser, Debug)]
#[command(name = "mediastore")]
#[command(about = "Media files, storage backends and a fuel/cargo simulation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Storage configuration file (defaults to bundled + user mediastore.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through every media, storage and vehicle operation
    Demo,

    /// Build a media file from a path and show it
    Inspect {
        /// Path whose extension selects the media type
        path: String,

        /// File size in bytes
        #[arg(long)]
        size: u64,

        /// Owner of the file
        #[arg(long)]
        owner: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Load a media file through a storage backend
    Load {
        /// Path in the backend
        path: String,

        /// File size in bytes
        #[arg(long)]
        size: u64,

        /// Configured backend name (uses the default backend if omitted)
        #[arg(long)]
        backend: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// List files in a backend directory
    List {
        /// Directory to list
        directory: String,

        /// Configured backend name (uses the default backend if omitted)
        #[arg(long)]
        backend: Option<String>,
    },

    /// Show the configured storage backends
    Backends,
}
