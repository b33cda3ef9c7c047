//! CLI module for userdesk
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - print-config: Print the effective configuration and exit

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{load_config, print_config, run, run_command, serve, ServeOverrides};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_json;
