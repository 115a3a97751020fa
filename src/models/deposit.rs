use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DailyDeposit — One calendar day of deposit activity
// ---------------------------------------------------------------------------

/// Deposit activity for a single calendar day.
///
/// `date` is a day-granularity string (`"%Y-%m-%d"`); it is the field the
/// date-range filter compares against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDeposit {
    pub date: String,
    pub amount: f64,
    /// First-time deposits recorded that day.
    pub ftd: Option<i64>,
    /// CPA conversions recorded that day.
    pub cpa: Option<i64>,
    /// Revenue-share rate applied that day, if any.
    pub rev: Option<f64>,
}

impl DailyDeposit {
    pub fn new<S: Into<String>>(date: S, amount: f64) -> Self {
        Self {
            date: date.into(),
            amount,
            ftd: None,
            cpa: None,
            rev: None,
        }
    }
}
