//! CLI command definitions using clap.
//!
//! - cat: echo every line of a file to stdout
//! - list: show the record codes in a file
//! - add: append record codes to a file
//! - copy: read records from one file and write them to another

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// linestore - line-oriented record files
#[derive(Parser, Debug)]
#[command(name = "linestore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every line of a file
    Cat {
        /// File to read
        path: PathBuf,
    },

    /// List record codes stored in a file
    List {
        /// Record file
        path: PathBuf,

        /// Emit records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Append record codes to a file, creating it if needed
    Add {
        /// Record file
        path: PathBuf,

        /// Codes to append
        #[arg(required = true, allow_negative_numbers = true)]
        codes: Vec<i32>,
    },

    /// Copy records from one file to another
    Copy {
        /// Source record file
        from: PathBuf,

        /// Destination record file (overwritten)
        to: PathBuf,
    },
}
