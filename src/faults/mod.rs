//! Fault injection subsystem.
//!
//! # Data Flow
//! ```text
//! /random-error → injector.roll() → inject? → 500 : 200
//! /timeout      → injector.hang() → blocking delay → 200
//! ```
//!
//! # Design Decisions
//! - One injector per server, shared via Arc
//! - Seeded RNG makes fault sequences reproducible in tests
//! - Hangs run on the blocking pool so a dropped request cannot cut them short

pub mod injector;

pub use injector::FaultInjector;
