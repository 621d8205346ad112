//! Daily performance series for the selected-campaign trend view.

use chrono::NaiveDate;

use crate::format::short_date;
use crate::models::{Campaign, DailyPerformance};

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    /// Axis label, e.g. `"Jan 5"`.
    pub label: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
}

/// One point per daily record, in the order the campaign stores them.
pub fn chart_points(campaign: &Campaign) -> Vec<ChartPoint> {
    campaign
        .daily_performance
        .iter()
        .map(|day| ChartPoint {
            date: day.date,
            label: short_date(day.date),
            impressions: day.impressions,
            clicks: day.clicks,
            conversions: day.conversions,
            spend: day.spend,
        })
        .collect()
}

/// The day with the most conversions; earliest wins ties.
pub fn peak_day(campaign: &Campaign) -> Option<&DailyPerformance> {
    campaign
        .daily_performance
        .iter()
        .fold(None, |best: Option<&DailyPerformance>, day| match best {
            Some(b) if b.conversions >= day.conversions => Some(b),
            _ => Some(day),
        })
}
