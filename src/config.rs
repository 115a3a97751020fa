use std::ops::Range;

use crate::models::UserStatus;

/// Day-granularity date format used by every record date field.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Window length for [`DateRange::Week`](crate::range::DateRange::Week), in days.
pub const WEEK_DAYS: i64 = 7;

/// Window length for [`DateRange::Month`](crate::range::DateRange::Month), in days.
pub const MONTH_DAYS: i64 = 30;

// -- Mock generation defaults ------------------------------------------------

pub const DEFAULT_MOCK_DAYS: usize = 30;
pub const DEFAULT_MOCK_USERS: usize = 25;

/// Per-day probability that a deposit day records a first-time deposit.
pub const FTD_PROBABILITY: f64 = 0.2;

/// Per-day probability that a deposit day records a CPA conversion.
pub const CPA_PROBABILITY: f64 = 0.1;

/// Per-day probability that a deposit day carries a revenue-share flag.
pub const REV_PROBABILITY: f64 = 0.15;

/// Revenue-share rate applied when the flag fires.
pub const REV_RATE: f64 = 0.2;

/// Flat commission credited per CPA conversion when estimating earnings.
pub const CPA_FEE: f64 = 50.0;

pub fn default_amount_range() -> Range<f64> {
    400.0..5500.0
}

/// Relative weights for randomly assigned referred-user statuses.
pub fn status_weights() -> Vec<(UserStatus, i64)> {
    vec![
        (UserStatus::Active, 5),
        (UserStatus::Ftd, 3),
        (UserStatus::Cpa, 2),
        (UserStatus::Inactive, 2),
    ]
}
