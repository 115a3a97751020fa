//! Shared test fixtures for the affiliate SDK integration tests.
//!
//! Provides a frozen-clock SDK plus a small sample dataset with deposit and
//! user dates spread around the frozen "now", built from JSON literals so the
//! wire shape is exercised on the way in.

use affiliate_sdk::{AffiliateDataset, AffiliateSdk};
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// The frozen instant every fixture is anchored to: 2025-07-15 12:00:00.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// An SDK whose clock is frozen at [`fixed_now`].
pub fn sdk() -> AffiliateSdk {
    AffiliateSdk::builder().fixed_now(fixed_now()).build()
}

/// Day string `n` days before the frozen now, in record format.
pub fn days_ago(n: i64) -> String {
    (fixed_now().date() - Duration::days(n))
        .format("%Y-%m-%d")
        .to_string()
}

/// Sample dataset around the frozen now:
///
/// - deposits dated today, 3 days ago, 10 days ago and 40 days ago;
/// - users joined 2, 9 and 20 days ago, plus one with an unparseable
///   join date.
pub fn sample_dataset() -> AffiliateDataset {
    serde_json::from_value(serde_json::json!({
        "kpis": {
            "totalDeposits": 60379.97,
            "cpas": 4,
            "ftds": 610,
            "revShare": 812.40,
            "estimatedCommission": 1012.40,
            "depositChange": 68.7,
            "registrations": 1096,
            "clicks": 5680
        },
        "dailyDeposits": [
            { "date": days_ago(40), "amount": 1230.0, "ftd": 0, "cpa": 0, "rev": 0.0 },
            { "date": days_ago(10), "amount": 970.0, "ftd": 1, "cpa": 0, "rev": 0.2 },
            { "date": days_ago(3), "amount": 1434.0, "ftd": 0, "cpa": 1, "rev": 0.0 },
            { "date": days_ago(0), "amount": 440.0, "ftd": 1, "cpa": 0, "rev": 0.0 }
        ],
        "referredUsers": [
            {
                "id": "user-0001",
                "username": "marina03",
                "email": "marina03@example.com",
                "joinDate": days_ago(20),
                "depositAmount": 350.0,
                "status": "Active",
                "lastActivity": days_ago(1)
            },
            {
                "id": "user-0002",
                "username": "pedro07",
                "email": "pedro07@example.com",
                "joinDate": days_ago(9),
                "depositAmount": 120.5,
                "status": "Inactive",
                "lastActivity": days_ago(8)
            },
            {
                "id": "user-0003",
                "username": "lucas11",
                "email": "lucas11@example.com",
                "joinDate": days_ago(2),
                "depositAmount": 990.0,
                "status": "FTD",
                "lastActivity": days_ago(0)
            },
            {
                "id": "user-0004",
                "username": "bianca09",
                "email": "bianca09@example.com",
                "joinDate": "not-a-date",
                "depositAmount": 75.0,
                "status": "CPA",
                "lastActivity": days_ago(5)
            }
        ]
    }))
    .unwrap()
}

/// A specific calendar day, for custom-window bounds.
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
