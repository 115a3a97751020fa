//! Date-range selection and window math.
//!
//! A [`Window`] is the inclusive `[start, end]` interval that record dates
//! are tested against. It is computed from a [`DateRange`] mode plus optional
//! explicit bounds and a caller-supplied "now" (see [`crate::clock`]).

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::{DAY_FORMAT, MONTH_DAYS, WEEK_DAYS};
use crate::error::{AffiliateError, Result};

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

/// Report window mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    /// Last seven days.
    #[default]
    Week,
    /// Last thirty days.
    Month,
    /// Caller-supplied bounds; missing bounds fall back to the `Week` window.
    Custom,
}

impl DateRange {
    /// Parse a mode string. `"week"`, `"month"` and `"custom"` map to their
    /// variants; anything else maps to [`Week`](Self::Week), the documented
    /// defensive default.
    pub fn parse(mode: &str) -> Self {
        match mode {
            "month" => Self::Month,
            "custom" => Self::Custom,
            _ => Self::Week,
        }
    }
}

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// Inclusive `[start, end]` interval used to filter records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Window {
    /// Compute the window for `range`, resolving bounds against `now`.
    ///
    /// `custom_start` is only meaningful for [`DateRange::Custom`] (other
    /// modes derive their start from `now`), but `custom_end` overrides `now`
    /// for every mode: an explicit end bound always wins.
    pub fn compute(
        range: DateRange,
        custom_start: Option<NaiveDate>,
        custom_end: Option<NaiveDate>,
        now: NaiveDateTime,
    ) -> Self {
        let week_start = now - Duration::days(WEEK_DAYS);

        let start = match range {
            DateRange::Week => week_start,
            DateRange::Month => now - Duration::days(MONTH_DAYS),
            DateRange::Custom => custom_start.map(day_start).unwrap_or(week_start),
        };

        let end = custom_end.map(day_start).unwrap_or(now);

        Self { start, end }
    }

    /// True when `t` lies inside the window, inclusive on both ends.
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t <= self.end
    }

    /// True when the window admits nothing (start after end).
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

// ---------------------------------------------------------------------------
// Date parsing
// ---------------------------------------------------------------------------

/// Parse a record date string into a timestamp.
///
/// Accepts the day format (`"%Y-%m-%d"`, resolved to midnight) or a full
/// RFC 3339 timestamp. The filter maps a parse failure to silent exclusion
/// of the record; this helper surfaces it as [`AffiliateError::InvalidDate`]
/// for callers that want the reason.
pub fn parse_day(s: &str) -> Result<NaiveDateTime> {
    if let Ok(d) = NaiveDate::parse_from_str(s, DAY_FORMAT) {
        return Ok(day_start(d));
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.naive_local())
        .map_err(|_| AffiliateError::InvalidDate(s.to_string()))
}

fn day_start(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::MIN)
}
