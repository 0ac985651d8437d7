//! Wall-clock implementations.

use chrono::{DateTime, Utc};

use crate::convert::UtcClock;

/// System wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl UtcClock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant (useful for testing).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl UtcClock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}
