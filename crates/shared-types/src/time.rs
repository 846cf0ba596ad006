//! # Time Sources
//!
//! Wall-clock abstraction so domain logic can be driven with a manual
//! clock in tests.

use crate::entities::Timestamp;
use std::sync::atomic::{AtomicU64, Ordering};

/// Time source trait for testability.
pub trait TimeSource: Send + Sync {
    /// Current time as Unix seconds.
    fn now(&self) -> Timestamp;

    /// Current time as Unix milliseconds.
    fn now_millis(&self) -> u64 {
        self.now() * 1000
    }
}

/// System time implementation.
#[derive(Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    fn now_millis(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Manually advanced time source for tests.
pub struct ManualTimeSource {
    now_secs: AtomicU64,
}

impl ManualTimeSource {
    /// Start the clock at the given Unix-seconds instant.
    pub fn starting_at(now_secs: Timestamp) -> Self {
        Self {
            now_secs: AtomicU64::new(now_secs),
        }
    }

    /// Advance the clock by `secs`.
    pub fn advance(&self, secs: u64) {
        self.now_secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Timestamp {
        self.now_secs.load(Ordering::SeqCst)
    }
}
