//! Configuration schema definitions.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock fixture: port 4000, 30% random errors, 10 second hangs.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Probability that `/random-error` injects a failure.
pub const DEFAULT_ERROR_PROBABILITY: f64 = 0.30;

/// How long `/timeout` holds the request before answering.
pub const DEFAULT_HANG_SECS: u64 = 10;

/// Default port the service listens on.
pub const DEFAULT_PORT: u16 = 4000;

/// Root configuration for the error generator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Name reported in the `service` field of every response.
    pub service_name: String,

    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Fault injection knobs.
    pub faults: FaultConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            service_name: "error-generator".to_string(),
            listener: ListenerConfig::default(),
            faults: FaultConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:4000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{DEFAULT_PORT}"),
        }
    }
}

impl ListenerConfig {
    /// Replace the port of the bind address, keeping the host part.
    pub fn override_port(&mut self, port: u16) {
        let host = match self.bind_address.rsplit_once(':') {
            Some((host, _)) => host.to_string(),
            None => self.bind_address.clone(),
        };
        self.bind_address = format!("{host}:{port}");
    }
}

/// Fault injection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FaultConfig {
    /// Chance in `[0, 1]` that `/random-error` fails.
    pub error_probability: f64,

    /// Delay applied by `/timeout`, in seconds.
    pub hang_secs: u64,

    /// Optional RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for FaultConfig {
    fn default() -> Self {
        Self {
            error_probability: DEFAULT_ERROR_PROBABILITY,
            hang_secs: DEFAULT_HANG_SECS,
            seed: None,
        }
    }
}

impl FaultConfig {
    pub fn hang_duration(&self) -> Duration {
        Duration::from_secs(self.hang_secs)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: GeneratorConfig = toml::from_str("").unwrap();
        assert_eq!(config.service_name, "error-generator");
        assert_eq!(config.listener.bind_address, "0.0.0.0:4000");
        assert_eq!(config.faults.error_probability, 0.30);
        assert_eq!(config.faults.hang_duration(), Duration::from_secs(10));
        assert!(config.faults.seed.is_none());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: GeneratorConfig = toml::from_str(
            r#"
            [faults]
            error_probability = 0.5
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.faults.error_probability, 0.5);
        assert_eq!(config.faults.seed, Some(7));
        assert_eq!(config.faults.hang_secs, DEFAULT_HANG_SECS);
        assert_eq!(config.listener.bind_address, "0.0.0.0:4000");
    }

    #[test]
    fn override_port_keeps_host() {
        let mut listener = ListenerConfig {
            bind_address: "127.0.0.1:4000".into(),
        };
        listener.override_port(5001);
        assert_eq!(listener.bind_address, "127.0.0.1:5001");
    }
}
