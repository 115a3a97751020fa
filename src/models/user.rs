use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// UserStatus — Referred-user lifecycle status
// ---------------------------------------------------------------------------

/// Lifecycle status of a referred user, in the dashboard's wire spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    /// Converted under the flat-fee cost-per-acquisition model.
    #[serde(rename = "CPA")]
    Cpa,
    /// Made a first-time deposit.
    #[serde(rename = "FTD")]
    Ftd,
    Active,
    Inactive,
}

// ---------------------------------------------------------------------------
// ReferredUser — One referred individual
// ---------------------------------------------------------------------------

/// A referred individual.
///
/// `join_date` is a day-granularity string (`"%Y-%m-%d"`); it is the field
/// the date-range filter compares against. `last_activity` is informational
/// and never filtered on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferredUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub join_date: String,
    pub deposit_amount: f64,
    pub status: UserStatus,
    pub last_activity: String,
}
