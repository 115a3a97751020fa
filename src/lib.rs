//! Affiliate performance SDK for Rust.
//!
//! Provides the data shapes behind an affiliate dashboard (KPI summary,
//! deposits-by-day, referred users), a date-range filter that restricts a
//! dataset to a last-7-days / last-30-days / custom window, and a generator
//! for randomized but internally consistent fixture datasets.
//!
//! # Quick start
//!
//! ```
//! use affiliate_sdk::{AffiliateSdk, DateRange, ReportParams};
//!
//! let sdk = AffiliateSdk::builder().build();
//!
//! // Generate a synthetic dataset anchored at today
//! let data = sdk.mock().generate(&Default::default()).unwrap();
//!
//! // Restrict it to the last 30 days
//! let report = sdk
//!     .reports()
//!     .filtered(&data, &ReportParams::range(DateRange::Month));
//! assert!(report.daily_deposits.len() <= data.daily_deposits.len());
//! ```
//!
//! Time is an injected capability: the builder accepts any [`Clock`], and
//! [`FixedClock`](clock::FixedClock) makes window computation fully
//! deterministic for tests.

pub mod clock;
pub mod config;
pub mod error;
pub mod mock;
pub mod models;
pub mod queries;
pub mod range;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AffiliateError, Result};
pub use models::{AffiliateDataset, DailyDeposit, KpiSummary, ReferredUser, UserStatus};
pub use queries::{ReportParams, ReportQuery};
pub use range::{DateRange, Window};

use chrono::NaiveDateTime;
use std::fmt;

// ---------------------------------------------------------------------------
// AffiliateSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AffiliateSdk`] instance.
///
/// Use [`AffiliateSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](AffiliateSdkBuilder::build) to create the
/// SDK.
pub struct AffiliateSdkBuilder {
    clock: Box<dyn Clock>,
}

impl Default for AffiliateSdkBuilder {
    fn default() -> Self {
        Self {
            clock: Box::new(SystemClock),
        }
    }
}

impl AffiliateSdkBuilder {
    /// Use a custom clock.
    ///
    /// Defaults to [`SystemClock`], the local wall clock.
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Freeze the SDK at a fixed instant.
    ///
    /// Shorthand for `clock(FixedClock(now))`; every query and generation
    /// call will see this timestamp as "now".
    pub fn fixed_now(self, now: NaiveDateTime) -> Self {
        self.clock(clock::FixedClock(now))
    }

    /// Build the SDK.
    pub fn build(self) -> AffiliateSdk {
        AffiliateSdk { clock: self.clock }
    }
}

// ---------------------------------------------------------------------------
// AffiliateSdk
// ---------------------------------------------------------------------------

/// The main entry point for the affiliate SDK.
///
/// Owns the [`Clock`] capability and exposes domain-specific interfaces as
/// lightweight borrowing wrappers.
///
/// Created via [`AffiliateSdk::builder()`].
pub struct AffiliateSdk {
    clock: Box<dyn Clock>,
}

impl AffiliateSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> AffiliateSdkBuilder {
        AffiliateSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the report query interface.
    ///
    /// Returns a lightweight wrapper that borrows the SDK clock and provides
    /// date-range filtering over caller-owned datasets.
    pub fn reports(&self) -> ReportQuery<'_> {
        ReportQuery::new(self.clock.as_ref())
    }

    /// Access the mock dataset generator.
    ///
    /// Generated history ends at the clock's current day.
    pub fn mock(&self) -> mock::MockSimulator<'_> {
        mock::MockSimulator::new(self.clock.as_ref())
    }

    // -- Utility methods ---------------------------------------------------

    /// The SDK clock's current timestamp.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for AffiliateSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AffiliateSdk(now={})", self.clock.now())
    }
}
