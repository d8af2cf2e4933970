//! vgwd - Vehicle Gateway Daemon
//!
//! REST API in front of the vehicle telemetry provider.
//!
//! Usage:
//!   vgwd [OPTIONS] [config.toml]
//!
//! Options:
//!   -p, --port <port>  Listen port, overrides `[server] port`
//!
//! Without a config file every setting takes its default.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vgw_api::{create_router, AppState};
use vgw_provider::ProviderBackend;

use crate::config::{GatewayConfig, LoggingConfig};

/// Parsed command-line arguments
#[derive(Debug, Default, PartialEq)]
struct Args {
    /// Gateway config file (TOML)
    config_path: Option<String>,
    /// Port override
    port: Option<u16>,
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let mut result = Args::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                let value = args.get(i + 1).context("Missing argument for --port")?;
                let port = value
                    .parse()
                    .with_context(|| format!("Invalid port: {}", value))?;
                result.port = Some(port);
                i += 2;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                // Positional argument = config file
                result.config_path = Some(arg.to_string());
                i += 1;
            }
            other => anyhow::bail!("Unknown argument: {}", other),
        }
    }

    Ok(result)
}

fn print_help() {
    eprintln!(
        r#"vgwd - Vehicle Gateway Daemon

Usage: vgwd [OPTIONS] [config.toml]

Options:
  -p, --port <port>  Listen port (default 5000)
  -h, --help         Print this help message

Examples:
  # Run with defaults on 0.0.0.0:5000
  vgwd

  # Run with config file on a different port
  vgwd -p 8080 config.toml
"#
    );
}

fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutting down...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&argv)?;

    let mut config = match args.config_path {
        Some(ref path) => GatewayConfig::load(path)?,
        None => GatewayConfig::default(),
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_logging(&config.logging);

    tracing::info!("Starting vgwd (Vehicle Gateway Daemon)");
    match args.config_path {
        Some(ref path) => tracing::info!("Loaded config from: {}", path),
        None => tracing::info!("No config file provided, using defaults"),
    }

    let backend = ProviderBackend::from_config(&config.provider).with_context(|| {
        format!("Failed to set up provider at '{}'", config.provider.base_url)
    })?;

    let state = AppState::new(Arc::new(backend));
    let app = create_router(state);

    let addr = config.socket_addr();
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments() {
        assert_eq!(parse_args(&[]).unwrap(), Args::default());
    }

    #[test]
    fn config_path_and_port() {
        let args = parse_args(&argv(&["-p", "8080", "gateway.toml"])).unwrap();
        assert_eq!(args.config_path.as_deref(), Some("gateway.toml"));
        assert_eq!(args.port, Some(8080));

        let args = parse_args(&argv(&["gateway.toml", "--port", "9000"])).unwrap();
        assert_eq!(args.port, Some(9000));
    }

    #[test]
    fn bad_port_arguments() {
        assert!(parse_args(&argv(&["--port"])).is_err());
        assert!(parse_args(&argv(&["--port", "http"])).is_err());
        assert!(parse_args(&argv(&["--port", "70000"])).is_err());
        assert!(parse_args(&argv(&["--verbose"])).is_err());
    }

    #[test]
    fn invalid_base_url_fails_backend_construction() {
        let mut config = GatewayConfig::default();
        config.provider.base_url = "not a url".to_string();
        assert!(ProviderBackend::from_config(&config.provider).is_err());
    }
}
