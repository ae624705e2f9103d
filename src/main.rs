//! a2a-code-helper server
//!
//! Serves a single-turn coding assistant over A2A JSON-RPC. Configuration comes
//! from the environment; `--host` and `--port` override `HOST` and `PORT`.

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use a2a_code_helper::{
    config::AgentConfig,
    protocol::AgentCard,
    server::{self, AppState},
    service::A2AAgentService,
};

#[derive(Parser, Debug)]
#[command(name = "a2a-code-helper")]
#[command(about = "A2A JSON-RPC agent answering coding questions")]
struct Args {
    /// Interface to bind, overriding HOST
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding PORT
    #[arg(long)]
    port: Option<u16>,

    /// Backend call timeout in seconds, overriding A2A_BACKEND_TIMEOUT_SECS
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    backend_timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let mut config = AgentConfig::from_env().context("Failed to load configuration")?;
    if let Some(host) = args.host {
        config = config.with_host(host);
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if let Some(secs) = args.backend_timeout_secs {
        config = config.with_backend_timeout(Duration::from_secs(secs));
    }

    info!(
        base_url = %config.base_url,
        model = %config.gemini.model,
        timeout_ms = config.backend_timeout.as_millis() as u64,
        "Loaded configuration"
    );
    if !config.has_api_key() {
        warn!("GEMINI_API_KEY is not set; requests will fail until it is configured");
    }

    let service = A2AAgentService::new(Arc::new(config.gemini.clone()))
        .with_timeout(config.backend_timeout);
    let card = AgentCard::code_helper(&config.base_url);

    server::serve(&config.bind_address(), AppState::new(service, card)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_only_override() {
        let args = Args::try_parse_from(["a2a-code-helper"]).unwrap();
        assert!(args.host.is_none());
        assert!(args.port.is_none());
        assert!(args.backend_timeout_secs.is_none());

        let args = Args::try_parse_from(["a2a-code-helper", "--port", "9000"]).unwrap();
        assert_eq!(args.port, Some(9000));
    }

    #[test]
    fn test_zero_backend_timeout_is_rejected() {
        assert!(Args::try_parse_from(["a2a-code-helper", "--backend-timeout-secs", "0"]).is_err());
        let args = Args::try_parse_from(["a2a-code-helper", "--backend-timeout-secs", "5"]).unwrap();
        assert_eq!(args.backend_timeout_secs, Some(5));
    }
}
