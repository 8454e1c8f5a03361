//! Wall-clock access and elapsed time formatting.
//!
//! The engine never reads the system time directly. It asks a `Clock`,
//! which lets hosts and tests drive time by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Source of monotonic milliseconds.
pub trait Clock {
    /// Milliseconds since some fixed origin. Never decreases.
    fn now_ms(&self) -> u64;
}

/// Clock backed by `std::time::Instant`.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Hand-driven clock. Clones share the same time.
///
/// ```
/// use memory_match::core::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let engine_side = clock.clone();
/// clock.advance(1500);
/// assert_eq!(engine_side.now_ms(), 1500);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Create a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward.
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    /// Jump to an absolute time. Going backwards is ignored.
    pub fn set(&self, ms: u64) {
        if ms > self.now.get() {
            self.now.set(ms);
        }
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Format elapsed milliseconds as `M:SS`.
///
/// Minutes are unpadded, seconds are zero-padded, partial seconds are
/// truncated.
///
/// ```
/// use memory_match::core::format_time;
///
/// assert_eq!(format_time(0), "0:00");
/// assert_eq!(format_time(125_000), "2:05");
/// ```
#[must_use]
pub fn format_time(ms: u64) -> String {
    let total_secs = ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}
