//! Shared fixtures for the dashboard integration tests.
//!
//! `fixture_campaigns()` returns four small campaigns with distinct metric
//! orderings so every ranking rule produces a different order:
//!
//! | id | name               | status | impressions | clicks | ctr | conversions | run                   |
//! |----|--------------------|--------|-------------|--------|-----|-------------|-----------------------|
//! | 1  | Summer Sale        | Active | 1000        | 50     | 5.0 | 10          | 2024-06-01 - 06-30    |
//! | 2  | Winter Clearance   | Paused | 3000        | 60     | 2.0 | 30          | 2024-01-01 - 01-31    |
//! | 3  | Spring Launch      | Active | 2000        | 90     | 4.5 | 20          | 2024-03-01 - 05-31    |
//! | 4  | Summer Retargeting | Paused | 500         | 40     | 8.0 | 20          | 2024-07-01 - 08-15    |

#![allow(dead_code)]

use chrono::NaiveDate;
use marketiq::{Campaign, CampaignStatus, DailyPerformance};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// A campaign with the given identity and zeroed metrics.
pub fn campaign(id: &str, name: &str) -> Campaign {
    Campaign {
        id: id.to_string(),
        name: name.to_string(),
        impressions: 0,
        clicks: 0,
        ctr: 0.0,
        conversions: 0,
        status: CampaignStatus::Active,
        budget: 1_000.0,
        spend: 0.0,
        start_date: date("2024-01-01"),
        end_date: date("2024-12-31"),
        daily_performance: Vec::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn full(
    id: &str,
    name: &str,
    status: CampaignStatus,
    impressions: u64,
    clicks: u64,
    ctr: f64,
    conversions: u64,
    start: &str,
    end: &str,
) -> Campaign {
    Campaign {
        impressions,
        clicks,
        ctr,
        conversions,
        status,
        spend: clicks as f64 * 2.0,
        start_date: date(start),
        end_date: date(end),
        daily_performance: vec![
            DailyPerformance {
                date: date(start),
                impressions: impressions / 2,
                clicks: clicks / 2,
                conversions: conversions / 2,
                spend: clicks as f64,
            },
            DailyPerformance {
                date: date(start).succ_opt().unwrap(),
                impressions: impressions / 2,
                clicks: clicks / 2,
                conversions: conversions - conversions / 2,
                spend: clicks as f64,
            },
        ],
        ..campaign(id, name)
    }
}

pub fn fixture_campaigns() -> Vec<Campaign> {
    vec![
        full("1", "Summer Sale", CampaignStatus::Active, 1000, 50, 5.0, 10, "2024-06-01", "2024-06-30"),
        full("2", "Winter Clearance", CampaignStatus::Paused, 3000, 60, 2.0, 30, "2024-01-01", "2024-01-31"),
        full("3", "Spring Launch", CampaignStatus::Active, 2000, 90, 4.5, 20, "2024-03-01", "2024-05-31"),
        full("4", "Summer Retargeting", CampaignStatus::Paused, 500, 40, 8.0, 20, "2024-07-01", "2024-08-15"),
    ]
}

/// Ids of a campaign sequence, for order assertions.
pub fn ids<'a, I>(campaigns: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Campaign>,
{
    campaigns.into_iter().map(|c| c.id.clone()).collect()
}
