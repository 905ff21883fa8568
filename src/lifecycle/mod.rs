//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Apply CLI overrides → Validate → Bind listener
//!
//! Shutdown:
//!     Process termination. No drain, in-flight hangs are dropped.
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

pub mod startup;

pub use startup::{bind_listener, resolve_config, Overrides, StartupError};
