//! Quiet-period debouncing for a rapidly changing input value.

use std::time::{Duration, Instant};

/// Default quiet period matching the search box behavior.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(350);

/// Delays propagation of a changing value until it has been stable for the
/// full quiet period. Every update restarts the timer and discards the
/// pending value from the previous update.
///
/// Time is passed in explicitly, so tests can drive it with a virtual clock.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a new source value at `now`, restarting the quiet period.
    pub fn update(&mut self, now: Instant, value: T) {
        self.pending = Some((now + self.quiet, value));
    }

    /// Emit the pending value if its quiet period has elapsed by `now`.
    /// Emits each settled value at most once.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if now >= *deadline => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}
