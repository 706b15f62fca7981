//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// lispconf: LISP mobility client configuration inspector
///
/// Extracts EID prefixes and DNS overrides from the client configuration
/// file and enumerates host network interfaces.
#[derive(Debug, Parser)]
#[command(name = "lispconf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for lispconf
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print EID prefixes declared in database-mapping blocks
    Eids {
        /// Path to the configuration file
        #[arg(long, short)]
        config: PathBuf,
    },
    /// Print the active DNS override, if any
    Dns {
        /// Path to the configuration file
        #[arg(long, short)]
        config: PathBuf,
    },
    /// Print the merged host interface list
    Ifaces,
    /// Check an address against the IP grammar
    Check {
        /// Candidate address string
        address: String,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
