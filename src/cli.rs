use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reelscan")]
#[command(author, version, about = "Media library filename scanner")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan one file or directory name and display the extracted metadata
    Parse {
        /// The file or directory name to scan
        #[arg(required = true)]
        name: String,

        /// Name of the containing directory
        #[arg(long, default_value = "")]
        parent: String,

        /// Treat the name as a directory
        #[arg(long)]
        directory: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Walk a directory tree and scan every recognized media file
    Scan {
        /// Root directory to scan
        #[arg(required = true)]
        path: PathBuf,

        /// Output one JSON object per file
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
