//! Summary tiles computed over the currently visible campaigns.

use serde::Serialize;

use crate::models::Campaign;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    pub campaign_count: usize,
    pub total_impressions: u64,
    pub total_clicks: u64,
    pub total_conversions: u64,
    pub total_spend: f64,
    /// Clicks over impressions, as a percentage.
    pub average_ctr: f64,
    /// Conversions over clicks, as a percentage.
    pub conversion_rate: f64,
}

/// Aggregate the given campaigns.
///
/// The average CTR is recomputed from the totals rather than averaging each
/// campaign's supplied `ctr`. Both rates are 0 when there are no clicks.
pub fn summarize<'a, I>(campaigns: I) -> CampaignSummary
where
    I: IntoIterator<Item = &'a Campaign>,
{
    let mut summary = CampaignSummary::default();
    for c in campaigns {
        summary.campaign_count += 1;
        summary.total_impressions += c.impressions;
        summary.total_clicks += c.clicks;
        summary.total_conversions += c.conversions;
        summary.total_spend += c.spend;
    }

    if summary.total_clicks > 0 && summary.total_impressions > 0 {
        summary.average_ctr = summary.total_clicks as f64 / summary.total_impressions as f64 * 100.0;
    }
    if summary.total_clicks > 0 {
        summary.conversion_rate = summary.total_conversions as f64 / summary.total_clicks as f64 * 100.0;
    }
    summary
}
