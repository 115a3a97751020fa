//! Clock capability for window computation.
//!
//! "Now" is never read ambiently: the SDK owns a [`Clock`] and every query
//! captures a single timestamp from it per call, so window math is
//! deterministic under a [`FixedClock`].

use chrono::{Local, NaiveDateTime};

/// Source of the current local timestamp.
pub trait Clock: Send + Sync {
    /// The current timestamp, naive local time.
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the system's local timezone. The default for
/// [`AffiliateSdk::builder()`](crate::AffiliateSdk::builder).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a fixed instant.
///
/// Used by tests and by callers that need reproducible windows (e.g.
/// re-rendering a report for a past point in time).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
