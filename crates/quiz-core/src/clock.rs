//! Clock abstraction.
//!
//! Quiz timestamps and session expiry both read time through this trait so
//! tests can pin it.

use chrono::{DateTime, Utc};

/// Abstraction over system time.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
