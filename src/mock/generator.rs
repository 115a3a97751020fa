//! Synthetic dataset generator.
//!
//! Produces randomized [`AffiliateDataset`] fixtures for dashboard
//! development and demos. The KPI summary is computed from the generated
//! records, so a fixture is always internally consistent — totals match the
//! deposit rows they summarize.

use chrono::{Duration, NaiveDate};
use rand::prelude::*;

use crate::clock::Clock;
use crate::config::{
    self, CPA_FEE, CPA_PROBABILITY, DAY_FORMAT, DEFAULT_MOCK_DAYS, DEFAULT_MOCK_USERS,
    FTD_PROBABILITY, REV_PROBABILITY, REV_RATE,
};
use crate::error::{AffiliateError, Result};
use crate::models::{AffiliateDataset, DailyDeposit, KpiSummary, ReferredUser, UserStatus};

/// Username pool for generated referred users; ids cycle through it.
const USERNAMES: &[&str] = &[
    "lucas", "marina", "pedro", "sofia", "rafael", "camila", "bruno", "laura", "diego", "bianca",
];

// ---------------------------------------------------------------------------
// MockConfig
// ---------------------------------------------------------------------------

/// Sizing knobs for a generated dataset.
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Calendar days of deposit history, ending at the clock's current day.
    pub days: usize,
    /// Referred users to generate; join dates fall inside the deposit span.
    pub users: usize,
    /// Uniform draw range for per-day deposit amounts.
    pub amount_range: std::ops::Range<f64>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_MOCK_DAYS,
            users: DEFAULT_MOCK_USERS,
            amount_range: config::default_amount_range(),
        }
    }
}

// ---------------------------------------------------------------------------
// MockSimulator
// ---------------------------------------------------------------------------

/// Generates randomized affiliate datasets anchored at the SDK clock's
/// current day.
pub struct MockSimulator<'a> {
    clock: &'a dyn Clock,
}

impl<'a> MockSimulator<'a> {
    /// Create a new `MockSimulator` bound to the given clock.
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    /// Generate a dataset with the process RNG.
    pub fn generate(&self, cfg: &MockConfig) -> Result<AffiliateDataset> {
        self.generate_with_rng(cfg, &mut thread_rng())
    }

    /// Generate a dataset from the supplied RNG. A seeded RNG makes the
    /// output reproducible for a fixed clock.
    pub fn generate_with_rng<R: Rng>(
        &self,
        cfg: &MockConfig,
        rng: &mut R,
    ) -> Result<AffiliateDataset> {
        if cfg.days == 0 {
            return Err(AffiliateError::InvalidArgument(
                "mock dataset needs at least one day of history".to_string(),
            ));
        }
        if cfg.amount_range.is_empty() {
            return Err(AffiliateError::InvalidArgument(format!(
                "empty deposit amount range: {:?}",
                cfg.amount_range
            )));
        }

        let today = self.clock.now().date();

        let daily_deposits = self.generate_deposits(cfg, today, rng);
        let referred_users = self.generate_users(cfg, today, rng);
        let kpis = summarize(&daily_deposits, rng);

        tracing::debug!(
            days = daily_deposits.len(),
            users = referred_users.len(),
            total_deposits = kpis.total_deposits,
            "generated mock dataset"
        );

        Ok(AffiliateDataset {
            kpis: Some(kpis),
            daily_deposits,
            referred_users,
        })
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// One deposit record per day, oldest first, ending at `today`.
    fn generate_deposits<R: Rng>(
        &self,
        cfg: &MockConfig,
        today: NaiveDate,
        rng: &mut R,
    ) -> Vec<DailyDeposit> {
        (0..cfg.days)
            .map(|i| {
                let date = today - Duration::days((cfg.days - 1 - i) as i64);
                let amount = round_cents(rng.gen_range(cfg.amount_range.clone()));

                DailyDeposit {
                    date: date.format(DAY_FORMAT).to_string(),
                    amount,
                    ftd: Some(i64::from(rng.gen_bool(FTD_PROBABILITY))),
                    cpa: Some(i64::from(rng.gen_bool(CPA_PROBABILITY))),
                    rev: Some(if rng.gen_bool(REV_PROBABILITY) {
                        REV_RATE
                    } else {
                        0.0
                    }),
                }
            })
            .collect()
    }

    /// Referred users with join dates uniform over the deposit span and a
    /// last activity between join and `today`.
    fn generate_users<R: Rng>(
        &self,
        cfg: &MockConfig,
        today: NaiveDate,
        rng: &mut R,
    ) -> Vec<ReferredUser> {
        let weights = config::status_weights();

        (0..cfg.users)
            .map(|i| {
                let name = USERNAMES[i % USERNAMES.len()];
                let username = format!("{}{:02}", name, i + 1);

                let join_offset = rng.gen_range(0..cfg.days as i64);
                let join_date = today - Duration::days(join_offset);
                let last_activity = today - Duration::days(rng.gen_range(0..=join_offset));

                ReferredUser {
                    id: format!("user-{:04}", i + 1),
                    email: format!("{}@example.com", username),
                    username,
                    join_date: join_date.format(DAY_FORMAT).to_string(),
                    deposit_amount: round_cents(rng.gen_range(cfg.amount_range.clone())),
                    status: weighted_status(&weights, rng),
                    last_activity: last_activity.format(DAY_FORMAT).to_string(),
                }
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Free-standing helpers
// ---------------------------------------------------------------------------

/// KPI summary computed from the generated deposit rows.
fn summarize<R: Rng>(deposits: &[DailyDeposit], rng: &mut R) -> KpiSummary {
    let total_deposits: f64 = deposits.iter().map(|d| d.amount).sum();
    let ftds: i64 = deposits.iter().filter_map(|d| d.ftd).sum();
    let cpas: i64 = deposits.iter().filter_map(|d| d.cpa).sum();
    let rev_share: f64 = round_cents(
        deposits
            .iter()
            .map(|d| d.amount * d.rev.unwrap_or(0.0))
            .sum(),
    );

    KpiSummary {
        total_deposits: round_cents(total_deposits),
        cpas,
        ftds,
        rev_share,
        estimated_commission: round_cents(rev_share + cpas as f64 * CPA_FEE),
        deposit_change: round_cents(period_change(deposits)),
        registrations: Some(rng.gen_range(100..1500)),
        clicks: Some(rng.gen_range(1000..8000)),
    }
}

/// Percent change of the later half of the span against the earlier half.
/// Zero when the earlier half has no volume.
fn period_change(deposits: &[DailyDeposit]) -> f64 {
    let mid = deposits.len() / 2;
    let earlier: f64 = deposits[..mid].iter().map(|d| d.amount).sum();
    let later: f64 = deposits[mid..].iter().map(|d| d.amount).sum();

    if earlier == 0.0 {
        return 0.0;
    }
    (later - earlier) / earlier * 100.0
}

/// Weighted random status pick.
fn weighted_status<R: Rng>(weights: &[(UserStatus, i64)], rng: &mut R) -> UserStatus {
    let total: i64 = weights.iter().map(|(_, w)| w).sum();
    if total <= 0 {
        return UserStatus::Active;
    }

    let mut roll = rng.gen_range(0..total);
    for (status, w) in weights {
        roll -= w;
        if roll < 0 {
            return *status;
        }
    }

    // Fallback (should not happen with valid weights)
    weights.last().map(|(s, _)| *s).unwrap_or(UserStatus::Active)
}

fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
