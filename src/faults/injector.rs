//! Random fault decisions and artificial hangs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::FaultConfig;

/// Decides when to fail and how long to hang.
pub struct FaultInjector {
    error_probability: f64,
    hang_duration: Duration,
    rng: Mutex<StdRng>,
    completed_hangs: Arc<AtomicU64>,
}

impl FaultInjector {
    pub fn new(config: &FaultConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            error_probability: config.error_probability,
            hang_duration: config.hang_duration(),
            rng: Mutex::new(rng),
            completed_hangs: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Draw from `[0, 1)` and report whether a fault should be injected.
    pub fn roll(&self) -> bool {
        let draw: f64 = {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            rng.gen()
        };
        draw < self.error_probability
    }

    /// Wait out the configured hang duration.
    ///
    /// The timer runs on its own detached task. Dropping the returned
    /// future (for example because the client went away) does not stop it;
    /// the caller only stops waiting.
    pub async fn hang(&self) {
        let duration = self.hang_duration;
        let completed = self.completed_hangs.clone();
        let sleeper = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            completed.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(delay = ?duration, "Hang completed");
        });
        if let Err(e) = sleeper.await {
            tracing::warn!(error = %e, "Hang task failed");
        }
    }

    /// Hangs that ran their full duration, including abandoned ones.
    pub fn completed_hangs(&self) -> u64 {
        self.completed_hangs.load(Ordering::Relaxed)
    }

    pub fn error_probability(&self) -> f64 {
        self.error_probability
    }

    pub fn hang_duration(&self) -> Duration {
        self.hang_duration
    }
}
