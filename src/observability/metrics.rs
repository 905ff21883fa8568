//! Request and error counters.
//!
//! # Metrics
//! - `requestCount`: requests seen by the counting handlers
//!   (`/generate-error`, `/random-error`, `/timeout`)
//! - `errorCount`: requests that produced a simulated error
//!
//! `/health` and `/metrics` never touch either counter, so health probes do
//! not dilute the error rate.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-lifetime counters, zero at startup and never reset.
#[derive(Debug, Default)]
pub struct Counters {
    requests: AtomicU64,
    errors: AtomicU64,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total_requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn error_count(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }

    /// Take a snapshot suitable for the `/metrics` body.
    pub fn snapshot(&self, service: &str) -> MetricsSnapshot {
        let total_requests = self.total_requests();
        let error_count = self.error_count();
        MetricsSnapshot {
            service: service.to_string(),
            total_requests,
            error_count,
            error_rate: error_rate(error_count, total_requests),
            timestamp: Utc::now(),
        }
    }
}

/// Error percentage, or `None` when no counted request has been seen.
///
/// 0/0 has no JSON number encoding, so it is reported as `null`.
pub fn error_rate(errors: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(errors as f64 / total as f64 * 100.0)
}

/// Body of `GET /metrics`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub service: String,
    pub total_requests: u64,
    pub error_count: u64,
    pub error_rate: Option<f64>,
    pub timestamp: DateTime<Utc>,
}
