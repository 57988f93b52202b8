//! CLI structure and argument parsing.
//!
//! The interface is deliberately small: look up one resource, refresh the
//! cache, or list what the index knows about. Output is human-readable by
//! default; `--output json` switches to machine-readable JSON for
//! scripting.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Main CLI structure for the `cfndoc` command.
#[derive(Parser, Debug)]
#[command(name = "cfndoc")]
#[command(version)]
#[command(about = "Find documentation for AWS CloudFormation resources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Path to the cache file (overrides the default location). Also via
    /// `CFNDOC_CACHE`.
    #[arg(long, global = true, value_name = "FILE")]
    pub cache: Option<PathBuf>,
}

/// Available subcommands for the `cfndoc` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display documentation for a CloudFormation resource type
    Find {
        /// Resource type to look up, e.g. AWS::EC2::SecurityGroup
        key: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Download the documentation index and update the cache
    Reload,

    /// List all indexed resource types
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
}
