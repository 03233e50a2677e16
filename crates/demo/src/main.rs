//! envbind demo - load a configuration schema with environment overrides

use anyhow::{Context, Result};
use clap::Parser;
use envbind_config::{ConfigFormat, ConfigLoader};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use config::{Config, DEFAULT_CONFIG};

/// Print a configuration document with environment variable overrides applied
#[derive(Debug, Parser)]
#[command(name = "envbind-demo", version, about)]
struct Cli {
    /// JSON or YAML configuration file; a built-in document is used when omitted
    #[arg(short, long, env = "CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Prefix for every bound environment variable
    #[arg(long, env = "ENV_PREFIX", default_value = "")]
    env_prefix: String,

    /// Print the environment variable bindings instead of the configuration
    #[arg(long)]
    list_bindings: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let dotenv = dotenv::dotenv();

    // Initialize logging
    init_logging()?;

    match dotenv {
        Ok(path) => info!("Loaded environment variables from {}", path.display()),
        // Only warn if the error is not "file not found"
        Err(e) if !e.not_found() => warn!("Could not load .env file: {}", e),
        Err(_) => {}
    }

    let cli = Cli::parse();
    run(&cli, &mut io::stdout().lock())
}

/// Bind the schema, resolve it and write the result to `out`
fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let mut store = ConfigLoader::new()
        .env_prefix(cli.env_prefix.as_str())
        .store::<Config>();

    if cli.list_bindings {
        for binding in store.bindings() {
            writeln!(out, "{} -> {}", binding.key, binding.env_var)?;
        }
        return Ok(());
    }

    match &cli.config {
        Some(path) => store
            .merge_file(path)
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?,
        None => store.merge_str(ConfigFormat::Json, DEFAULT_CONFIG),
    }

    let config: Config = store
        .extract()
        .context("Failed to load configuration")?;

    info!(port = config.server.http.port, "Configuration loaded");

    let output = serde_json::to_string_pretty(&config).context("Failed to encode configuration")?;
    writeln!(out, "{}", output)?;

    Ok(())
}

/// Initialize logging based on environment variables
fn init_logging() -> Result<()> {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    // Logs go to stderr so stdout carries only the configuration.
    match log_format.as_str() {
        "pretty" => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize pretty logging")?;
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize JSON logging")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::Builder;

    fn cli(config: Option<PathBuf>, list_bindings: bool) -> Cli {
        Cli {
            config,
            env_prefix: "envbind_demo_run".to_string(),
            list_bindings,
        }
    }

    fn run_to_string(cli: &Cli) -> String {
        let mut out = Vec::new();
        run(cli, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_bindings() {
        let output = run_to_string(&cli(None, true));
        assert_eq!(
            output,
            "server.http.port -> ENVBIND_DEMO_RUN_SERVER_HTTP_PORT\n\
             auth.token -> ENVBIND_DEMO_RUN_AUTH_TOKEN\n"
        );
    }

    #[test]
    fn test_built_in_document() {
        let output = run_to_string(&cli(None, false));
        let config: Config = serde_json::from_str(&output).unwrap();
        assert_eq!(config.server.http.port, 80);
        assert_eq!(config.auth.token, "");
    }

    #[test]
    fn test_config_file() {
        let file = Builder::new().suffix(".yaml").tempfile().unwrap();
        std::fs::write(file.path(), "auth:\n  token: from_file\n").unwrap();

        let output = run_to_string(&cli(Some(file.path().to_path_buf()), false));
        let config: Config = serde_json::from_str(&output).unwrap();
        assert_eq!(config.server.http.port, 0);
        assert_eq!(config.auth.token, "from_file");
    }

    #[test]
    fn test_missing_config_file() {
        let mut out = Vec::new();
        let result = run(&cli(Some(PathBuf::from("/nonexistent/config.json")), false), &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
