//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration (file optional) and apply command-line overrides
//! - Bind the listener
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Overrides are validated together with the file contents

use std::path::PathBuf;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{load_config, validate_config, ConfigError, GeneratorConfig};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

/// Produce the effective configuration: file (or defaults), then overrides.
pub fn resolve_config(overrides: &Overrides) -> Result<GeneratorConfig, StartupError> {
    let mut config = match &overrides.config_path {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(port) = overrides.port {
        config.listener.override_port(port);
    }
    if let Some(level) = &overrides.log_level {
        config.observability.log_level = level.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Bind the configured address.
pub async fn bind_listener(config: &GeneratorConfig) -> Result<TcpListener, StartupError> {
    let address = config.listener.bind_address.clone();
    TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })
}
