use serde::{Deserialize, Serialize};

use crate::error::{AffiliateError, Result};
use crate::models::{DailyDeposit, KpiSummary, ReferredUser};

// ---------------------------------------------------------------------------
// AffiliateDataset — The dashboard payload
// ---------------------------------------------------------------------------

/// Everything a dashboard view renders: an optional KPI summary plus the two
/// ordered record sequences.
///
/// The summary may legitimately be absent (e.g. a provider that only serves
/// raw records). Filtering propagates the `Option` untouched; use
/// [`kpis()`](Self::kpis) where a summary is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateDataset {
    pub kpis: Option<KpiSummary>,
    #[serde(default)]
    pub daily_deposits: Vec<DailyDeposit>,
    #[serde(default)]
    pub referred_users: Vec<ReferredUser>,
}

impl AffiliateDataset {
    /// The KPI summary, or [`AffiliateError::MissingKpis`] if the dataset
    /// carries none.
    pub fn kpis(&self) -> Result<&KpiSummary> {
        self.kpis.as_ref().ok_or(AffiliateError::MissingKpis)
    }

    /// True when both record sequences are empty.
    pub fn is_empty(&self) -> bool {
        self.daily_deposits.is_empty() && self.referred_users.is_empty()
    }
}
