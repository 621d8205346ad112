use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CampaignStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignStatus {
    Active,
    Paused,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DailyPerformance — One point of a campaign's daily series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPerformance {
    pub date: NaiveDate,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
}

// ---------------------------------------------------------------------------
// Campaign
// ---------------------------------------------------------------------------

/// An advertising campaign with its headline metrics and daily series.
///
/// `ctr` is supplied by the data source as a percentage and is not derived
/// from `clicks / impressions`; the two may disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub impressions: u64,
    pub clicks: u64,
    pub ctr: f64,
    pub conversions: u64,
    pub status: CampaignStatus,
    pub budget: f64,
    pub spend: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub daily_performance: Vec<DailyPerformance>,
}

impl Campaign {
    pub fn is_active(&self) -> bool {
        self.status == CampaignStatus::Active
    }

    /// Spend as a percentage of budget (0 when there is no budget).
    pub fn budget_utilization(&self) -> f64 {
        if self.budget > 0.0 {
            self.spend / self.budget * 100.0
        } else {
            0.0
        }
    }
}

// ---------------------------------------------------------------------------
// Metric — Sortable campaign metrics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Ctr,
    Conversions,
    Clicks,
    Impressions,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Ctr => "CTR",
            Metric::Conversions => "conversions",
            Metric::Clicks => "clicks",
            Metric::Impressions => "impressions",
        }
    }

    /// Ascending comparison of two campaigns on this metric.
    ///
    /// Incomparable CTR values (NaN) compare as equal.
    pub fn compare(&self, a: &Campaign, b: &Campaign) -> Ordering {
        match self {
            Metric::Ctr => a.ctr.partial_cmp(&b.ctr).unwrap_or(Ordering::Equal),
            Metric::Conversions => a.conversions.cmp(&b.conversions),
            Metric::Clicks => a.clicks.cmp(&b.clicks),
            Metric::Impressions => a.impressions.cmp(&b.impressions),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
