//! # Time Port
//!
//! Wall-clock access goes through [`TimeSource`] so expiry logic can be
//! driven deterministically in tests instead of sleeping.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Time source port.
pub trait TimeSource: Send + Sync {
    /// Current time as a duration since the Unix epoch.
    fn now(&self) -> Duration;
}

/// Production time source backed by the system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
    }
}

/// A time source that returns a controlled timestamp.
///
/// Clones share the underlying clock, so a test can hold one handle while the
/// component under test holds another and advance time between assertions.
#[derive(Clone, Debug)]
pub struct FixedTimeSource {
    millis: Arc<AtomicU64>,
}

impl FixedTimeSource {
    /// Create a fixed time source starting at `start_secs` seconds.
    pub fn new(start_secs: u64) -> Self {
        Self { millis: Arc::new(AtomicU64::new(start_secs * 1_000)) }
    }

    /// Advance the clock.
    pub fn advance(&self, by: Duration) {
        self.millis.fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }

    /// Set the clock to an absolute number of seconds.
    pub fn set_secs(&self, secs: u64) {
        self.millis.store(secs * 1_000, Ordering::SeqCst);
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Duration {
        Duration::from_millis(self.millis.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_time_source_returns_configured_value() {
        let source = FixedTimeSource::new(1000);
        assert_eq!(source.now().as_secs(), 1000);
    }

    #[test]
    fn test_fixed_time_source_advances() {
        let source = FixedTimeSource::new(1000);
        let handle = source.clone();
        handle.advance(Duration::from_secs(11));
        assert_eq!(source.now().as_secs(), 1011);
    }

    #[test]
    fn test_system_time_source_is_nonzero() {
        assert!(SystemTimeSource.now() > Duration::ZERO);
    }
}
