use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// KpiSummary — Aggregate dashboard counters
// ---------------------------------------------------------------------------

/// Aggregate performance counters for the whole reporting period.
///
/// This is an immutable snapshot: date-range filtering copies it through
/// unchanged, it is never recomputed from the filtered records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_deposits: f64,
    /// Cost-per-acquisition conversions.
    pub cpas: i64,
    /// First-time deposits.
    pub ftds: i64,
    pub rev_share: f64,
    pub estimated_commission: f64,
    /// Period-over-period change in deposit volume, percent.
    pub deposit_change: f64,
    pub registrations: Option<i64>,
    pub clicks: Option<i64>,
}
