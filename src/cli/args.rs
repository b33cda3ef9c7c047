//! CLI argument definitions using clap
//!
//! Commands:
//! - userdesk serve [--config <path>] [--port <port>] [--log-format <pretty|json>] [--seed]
//! - userdesk print-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::LogFormat;

/// userdesk - in-memory user and customer REST service
#[derive(Parser, Debug)]
#[command(name = "userdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,

        /// Log line format (pretty or json), overriding the configuration file
        #[arg(long)]
        log_format: Option<LogFormat>,

        /// Install the demo users before serving
        #[arg(long)]
        seed: bool,
    },

    /// Print the effective configuration as JSON and exit
    PrintConfig {
        /// Path to a JSON configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
