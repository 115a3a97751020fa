//! Date-range report filtering over in-memory affiliate datasets.

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::models::AffiliateDataset;
use crate::range::{parse_day, DateRange, Window};

// ---------------------------------------------------------------------------
// ReportParams
// ---------------------------------------------------------------------------

/// Parameters for a filtered report.
///
/// The defaults select the last-seven-days window with no explicit bounds.
/// `custom_start` only takes effect under [`DateRange::Custom`];
/// `custom_end`, when set, overrides the clock's "now" as the window end for
/// every mode (see [`Window::compute`]).
#[derive(Debug, Clone, Default)]
pub struct ReportParams {
    pub range: DateRange,
    pub custom_start: Option<NaiveDate>,
    pub custom_end: Option<NaiveDate>,
}

impl ReportParams {
    pub fn range(range: DateRange) -> Self {
        Self {
            range,
            ..Default::default()
        }
    }

    pub fn custom(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            range: DateRange::Custom,
            custom_start: start,
            custom_end: end,
        }
    }
}

// ---------------------------------------------------------------------------
// ReportQuery
// ---------------------------------------------------------------------------

/// Query interface for dashboard report views over an [`AffiliateDataset`].
pub struct ReportQuery<'a> {
    clock: &'a dyn Clock,
}

impl<'a> ReportQuery<'a> {
    /// Create a new `ReportQuery` bound to the given clock.
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    /// The window a [`filtered`](Self::filtered) call with these parameters
    /// would use, resolved against the clock right now. Dashboards use this
    /// to label the selected period.
    pub fn window_for(&self, params: &ReportParams) -> Window {
        Window::compute(
            params.range,
            params.custom_start,
            params.custom_end,
            self.clock.now(),
        )
    }

    /// Return a new dataset restricted to the window selected by `params`.
    ///
    /// "Now" is captured once at the start of the call, so every containment
    /// check in the pass sees the same window. Deposits are filtered by their
    /// `date`, referred users independently by their `join_date`; both
    /// filters are stable and inclusive on both window ends. Records whose
    /// date string does not parse are dropped silently — one bad record never
    /// aborts the report. The KPI summary is copied through as-is, present or
    /// absent; it is a whole-period snapshot, not a per-window aggregate.
    ///
    /// An inverted window (explicit start after explicit end) is not an
    /// error: nothing satisfies it, so both sequences come back empty.
    pub fn filtered(&self, data: &AffiliateDataset, params: &ReportParams) -> AffiliateDataset {
        let window = self.window_for(params);

        let daily_deposits: Vec<_> = data
            .daily_deposits
            .iter()
            .filter(|d| in_window(&window, &d.date))
            .cloned()
            .collect();

        let referred_users: Vec<_> = data
            .referred_users
            .iter()
            .filter(|u| in_window(&window, &u.join_date))
            .cloned()
            .collect();

        tracing::debug!(
            start = %window.start,
            end = %window.end,
            deposits = daily_deposits.len(),
            users = referred_users.len(),
            "filtered report window"
        );

        AffiliateDataset {
            kpis: data.kpis.clone(),
            daily_deposits,
            referred_users,
        }
    }
}

/// Containment check for one record date string. Unparseable dates are
/// excluded, never an error.
fn in_window(window: &Window, date: &str) -> bool {
    parse_day(date).map(|t| window.contains(t)).unwrap_or(false)
}
