//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request/error counters)
//!
//! Consumers:
//!     → stdout log stream
//!     → GET /metrics (JSON snapshot)
//! ```
//!
//! # Design Decisions
//! - Counters live in process memory only; nothing is exported or persisted
//! - Counter updates are single atomic increments

pub mod logging;
pub mod metrics;

pub use metrics::{Counters, MetricsSnapshot};
