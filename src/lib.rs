//! Fault-injecting HTTP fixture for exercising retries, circuit breakers and
//! timeout handling in other services.

pub mod config;
pub mod faults;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::GeneratorConfig;
pub use http::HttpServer;
