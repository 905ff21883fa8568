//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CLI overrides applied in main.rs
//!     → GeneratorConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; no file means the stock fixture
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{FaultConfig, GeneratorConfig, ListenerConfig, ObservabilityConfig};
pub use schema::{DEFAULT_ERROR_PROBABILITY, DEFAULT_HANG_SECS, DEFAULT_PORT};
pub use validation::{validate_config, ValidationError};
