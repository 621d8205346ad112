//! In-memory campaign queries: the filter evaluator plus lookups and rankings
//! used by the prompt interpreter and the dashboard.

use crate::models::{Campaign, FilterCriteria, Metric};

// ---------------------------------------------------------------------------
// Filter evaluator
// ---------------------------------------------------------------------------

/// Apply `criteria` to `campaigns`, preserving dataset order.
///
/// Status, search and date predicates are independent and combined with AND.
/// The date range only applies when both of its bounds are set, and keeps
/// campaigns whose whole run falls inside it.
pub fn apply_filters<'a>(campaigns: &'a [Campaign], criteria: &FilterCriteria) -> Vec<&'a Campaign> {
    let query = criteria.search_query.to_lowercase();

    campaigns
        .iter()
        .filter(|c| criteria.status.matches(c.status))
        .filter(|c| query.is_empty() || c.name.to_lowercase().contains(&query))
        .filter(|c| criteria.date_range.contains(c.start_date, c.end_date))
        .collect()
}

// ---------------------------------------------------------------------------
// CampaignQuery
// ---------------------------------------------------------------------------

/// Query interface over a borrowed campaign slice.
pub struct CampaignQuery<'a> {
    campaigns: &'a [Campaign],
}

impl<'a> CampaignQuery<'a> {
    /// Create a new `CampaignQuery` over the given campaigns.
    pub fn new(campaigns: &'a [Campaign]) -> Self {
        Self { campaigns }
    }

    pub fn all(&self) -> Vec<&'a Campaign> {
        self.campaigns.iter().collect()
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&'a Campaign> {
        apply_filters(self.campaigns, criteria)
    }

    /// Retrieve a campaign by its id.
    pub fn get_by_id(&self, id: &str) -> Option<&'a Campaign> {
        self.campaigns.iter().find(|c| c.id == id)
    }

    /// First campaign (in dataset order) whose name contains `needle`,
    /// compared case-insensitively.
    pub fn find_by_name(&self, needle: &str) -> Option<&'a Campaign> {
        let needle = needle.to_lowercase();
        self.campaigns
            .iter()
            .find(|c| c.name.to_lowercase().contains(&needle))
    }

    /// Every campaign sorted by `metric`, highest first.
    ///
    /// The sort is stable, so ties keep their dataset order.
    pub fn ranked_by(&self, metric: Metric) -> Vec<&'a Campaign> {
        let mut ranked = self.all();
        ranked.sort_by(|a, b| metric.compare(b, a));
        ranked
    }

    pub fn count(&self, criteria: &FilterCriteria) -> usize {
        self.filter(criteria).len()
    }
}
