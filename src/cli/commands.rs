//! CLI command implementations

use std::fs;
use std::path::Path;

use tracing::info;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_json;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{init_tracing, LogFormat};

/// Command-line values that take precedence over the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServeOverrides {
    pub port: Option<u16>,
    pub log_format: Option<LogFormat>,
    pub seed: bool,
}

impl ServeOverrides {
    fn apply(&self, config: &mut HttpServerConfig) {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(log_format) = self.log_format {
            config.log_format = log_format;
        }
        if self.seed {
            config.seed_demo_users = true;
        }
    }
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            port,
            log_format,
            seed,
        } => serve(
            config.as_deref(),
            ServeOverrides {
                port,
                log_format,
                seed,
            },
        ),
        Command::PrintConfig { config } => print_config(config.as_deref()),
    }
}

/// Load and validate the configuration
///
/// Without a path the defaults are used.
pub fn load_config(path: Option<&Path>) -> CliResult<HttpServerConfig> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| {
                CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&content)
                .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?
        }
        None => HttpServerConfig::default(),
    };

    config
        .validate()
        .map_err(|e| CliError::config_error(e.to_string()))?;

    Ok(config)
}

/// Print the effective configuration
pub fn print_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    write_json(&config)
}

/// Start the HTTP server
///
/// 1. Load configuration and apply command-line overrides
/// 2. Install the tracing subscriber
/// 3. Serve on a multi-threaded tokio runtime until Ctrl-C
pub fn serve(config_path: Option<&Path>, overrides: ServeOverrides) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    overrides.apply(&mut config);
    config
        .validate()
        .map_err(|e| CliError::config_error(e.to_string()))?;

    init_tracing(&config.log_level, config.log_format)
        .map_err(|e| CliError::boot_failed(e.to_string()))?;

    info!(
        addr = %config.socket_addr(),
        seed_demo_users = config.seed_demo_users,
        "starting userdesk"
    );

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}
