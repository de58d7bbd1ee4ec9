//! CLI Module
//!
//! Command-line interface for decoding pattern files.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Splice - drum machine pattern decoder
#[derive(Parser, Debug)]
#[command(name = "splice")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Decoder config file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Decode tracks until end of file, ignoring the declared payload length
    #[arg(long, global = true)]
    pub ignore_payload_length: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print patterns in their text form
    #[command(name = "show")]
    Show {
        /// Pattern files to decode
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Print a pattern as JSON
    #[command(name = "json")]
    Json {
        /// Pattern file to decode
        path: PathBuf,
    },

    /// Decode every .splice file in a directory and summarise it
    #[command(name = "scan")]
    Scan {
        /// Directory to search
        dir: PathBuf,
    },
}
