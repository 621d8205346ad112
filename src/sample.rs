//! Built-in demo dataset and a seeded synthetic generator.
//!
//! Both are deterministic: the same seed always yields the same campaigns,
//! so demos and tests can rely on exact values.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{Campaign, CampaignStatus, DailyPerformance};

const SAMPLE_SEED: u64 = 0x4d49_5131;
const SAMPLE_DAYS: i64 = 7;

struct SampleSpec {
    id: &'static str,
    name: &'static str,
    impressions: u64,
    clicks: u64,
    ctr: f64,
    conversions: u64,
    status: CampaignStatus,
    budget: f64,
    spend: f64,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
}

const SAMPLE: [SampleSpec; 6] = [
    SampleSpec {
        id: "1",
        name: "Summer Sale 2024",
        impressions: 125_000,
        clicks: 3_750,
        ctr: 3.0,
        conversions: 285,
        status: CampaignStatus::Active,
        budget: 5_000.0,
        spend: 3_200.0,
        start: (2024, 6, 1),
        end: (2024, 8, 31),
    },
    SampleSpec {
        id: "2",
        name: "Holiday Promotion",
        impressions: 89_000,
        clicks: 2_225,
        ctr: 2.5,
        conversions: 178,
        status: CampaignStatus::Paused,
        budget: 8_000.0,
        spend: 7_850.0,
        start: (2023, 11, 15),
        end: (2023, 12, 31),
    },
    SampleSpec {
        id: "3",
        name: "Brand Awareness Q1",
        impressions: 250_000,
        clicks: 3_750,
        ctr: 1.5,
        conversions: 95,
        status: CampaignStatus::Active,
        budget: 10_000.0,
        spend: 6_500.0,
        start: (2024, 1, 1),
        end: (2024, 3, 31),
    },
    SampleSpec {
        id: "4",
        name: "Product Launch - Smart Watch",
        impressions: 156_000,
        clicks: 6_240,
        ctr: 4.0,
        conversions: 468,
        status: CampaignStatus::Active,
        budget: 12_000.0,
        spend: 9_800.0,
        start: (2024, 3, 15),
        end: (2024, 5, 15),
    },
    SampleSpec {
        id: "5",
        name: "Retargeting Campaign",
        impressions: 45_000,
        clicks: 2_250,
        ctr: 5.0,
        conversions: 315,
        status: CampaignStatus::Paused,
        budget: 3_000.0,
        spend: 3_100.0,
        start: (2024, 2, 1),
        end: (2024, 4, 30),
    },
    SampleSpec {
        id: "6",
        name: "Black Friday Flash Sale",
        impressions: 98_000,
        clicks: 4_410,
        ctr: 4.5,
        conversions: 520,
        status: CampaignStatus::Paused,
        budget: 6_000.0,
        spend: 5_900.0,
        start: (2023, 11, 24),
        end: (2023, 11, 27),
    },
];

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The demo dataset shipped with the dashboard.
pub fn sample_campaigns() -> Vec<Campaign> {
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED);
    SAMPLE
        .iter()
        .map(|spec| {
            let start_date = ymd(spec.start);
            let end_date = ymd(spec.end);
            let mut campaign = Campaign {
                id: spec.id.to_string(),
                name: spec.name.to_string(),
                impressions: spec.impressions,
                clicks: spec.clicks,
                ctr: spec.ctr,
                conversions: spec.conversions,
                status: spec.status,
                budget: spec.budget,
                spend: spec.spend,
                start_date,
                end_date,
                daily_performance: Vec::new(),
            };
            campaign.daily_performance = daily_series(&campaign, SAMPLE_DAYS, &mut rng);
            campaign
        })
        .collect()
}

const NAME_PREFIXES: &[&str] = &[
    "Spring", "Summer", "Autumn", "Winter", "Evergreen", "Flash", "Weekend", "Loyalty", "Regional", "Mobile",
];
const NAME_SUBJECTS: &[&str] = &[
    "Sale", "Launch", "Awareness", "Retargeting", "Promotion", "Giveaway", "Newsletter", "Webinar", "Clearance",
];

/// Generate `count` plausible campaigns from `seed`.
///
/// Unlike hand-entered data, the generated `ctr` always agrees with
/// clicks and impressions.
pub fn synthetic_campaigns(count: usize, seed: u64) -> Vec<Campaign> {
    let mut rng = StdRng::seed_from_u64(seed);
    let base = ymd((2024, 1, 1));

    (1..=count)
        .map(|n| {
            let prefix = NAME_PREFIXES.choose(&mut rng).copied().unwrap_or("Campaign");
            let subject = NAME_SUBJECTS.choose(&mut rng).copied().unwrap_or("Push");
            let impressions: u64 = rng.gen_range(5_000..500_000);
            let clicks = (impressions as f64 * rng.gen_range(0.005..0.08)) as u64;
            let conversions = (clicks as f64 * rng.gen_range(0.01..0.2)) as u64;
            let budget = (rng.gen_range(1_000..20_000) / 100 * 100) as f64;
            let spend = (budget * rng.gen_range(0.2..1.15)).round();
            let start_date = base + Duration::days(rng.gen_range(0..300));
            let end_date = start_date + Duration::days(rng.gen_range(14..90));
            let status = if rng.gen_bool(0.6) {
                CampaignStatus::Active
            } else {
                CampaignStatus::Paused
            };

            let mut campaign = Campaign {
                id: format!("syn-{:04}", n),
                name: format!("{} {} #{}", prefix, subject, n),
                impressions,
                clicks,
                ctr: round2(clicks as f64 / impressions as f64 * 100.0),
                conversions,
                status,
                budget,
                spend,
                start_date,
                end_date,
                daily_performance: Vec::new(),
            };
            campaign.daily_performance = daily_series(&campaign, 14, &mut rng);
            campaign
        })
        .collect()
}

/// Up to `days` daily points from the campaign's start, each a jittered
/// share of the campaign totals.
fn daily_series(campaign: &Campaign, days: i64, rng: &mut StdRng) -> Vec<DailyPerformance> {
    let run_length = (campaign.end_date - campaign.start_date).num_days() + 1;
    let span = run_length.max(1);
    let days = days.min(span);

    (0..days)
        .map(|offset| {
            let jitter: f64 = rng.gen_range(0.75..1.25);
            let share = |total: u64| ((total as f64 / span as f64) * jitter).round() as u64;
            DailyPerformance {
                date: campaign.start_date + Duration::days(offset),
                impressions: share(campaign.impressions),
                clicks: share(campaign.clicks),
                conversions: share(campaign.conversions),
                spend: ((campaign.spend / span as f64) * jitter).round(),
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
