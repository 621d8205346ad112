//! The dashboard state container.
//!
//! [`Dashboard`] owns the campaign dataset and every piece of view state
//! derived from it. The filtered sequence is only ever rebuilt by the filter
//! evaluator or the prompt interpreter, never edited in place.

use std::fmt;

use tracing::debug;

use crate::models::{Campaign, FilterCriteria, FilterPatch};
use crate::queries::campaigns::{apply_filters, CampaignQuery};
use crate::queries::prompt::{interpret_prompt, PromptIntent, PromptOutcome};
use crate::queries::stats::{summarize, CampaignSummary};

/// What the presentation layer should show instead of, or as, the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus<'a> {
    Error(&'a str),
    Loading,
    Ready,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    campaigns: Vec<Campaign>,
    filtered: Vec<Campaign>,
    filters: FilterCriteria,
    highlighted: Option<String>,
    selected: Option<String>,
    is_loading: bool,
    error: Option<String>,
}

impl Dashboard {
    /// A dashboard over `campaigns` with default criteria.
    pub fn new(campaigns: Vec<Campaign>) -> Self {
        let filtered = campaigns.clone();
        Self {
            campaigns,
            filtered,
            filters: FilterCriteria::default(),
            highlighted: None,
            selected: None,
            is_loading: false,
            error: None,
        }
    }

    // -- Accessors ---------------------------------------------------------

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn filtered_campaigns(&self) -> &[Campaign] {
        &self.filtered
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn highlighted_campaign(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    pub fn selected_campaign_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected campaign, looked up in the full dataset.
    pub fn selected_campaign(&self) -> Option<&Campaign> {
        self.selected.as_deref().and_then(|id| self.query().get_by_id(id))
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlighted.as_deref() == Some(id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Error takes precedence over loading.
    pub fn view_status(&self) -> ViewStatus<'_> {
        match (&self.error, self.is_loading) {
            (Some(msg), _) => ViewStatus::Error(msg),
            (None, true) => ViewStatus::Loading,
            (None, false) => ViewStatus::Ready,
        }
    }

    /// Summary tiles for the visible campaigns.
    pub fn summary(&self) -> CampaignSummary {
        summarize(&self.filtered)
    }

    pub fn query(&self) -> CampaignQuery<'_> {
        CampaignQuery::new(&self.campaigns)
    }

    // -- Filter actions ----------------------------------------------------

    /// Merge `patch` into the current criteria and recompute the view.
    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.filters = self.filters.merge(&patch);
        debug!(filters = ?self.filters, "filters updated");
        self.apply_filters();
    }

    /// Recompute the visible campaigns from the stored criteria.
    pub fn apply_filters(&mut self) {
        self.filtered = apply_filters(&self.campaigns, &self.filters)
            .into_iter()
            .cloned()
            .collect();
    }

    pub fn reset_filters(&mut self) {
        self.filters = FilterCriteria::default();
        self.filtered = self.campaigns.clone();
        self.highlighted = None;
    }

    // -- Highlight and selection -------------------------------------------

    pub fn highlight_campaign(&mut self, id: Option<&str>) {
        self.highlighted = id.map(str::to_string);
    }

    /// Set the sticky selection. Unknown ids are accepted.
    pub fn select_campaign(&mut self, id: Option<&str>) {
        self.selected = id.map(str::to_string);
    }

    /// Select `id`, or clear the selection if `id` is already selected.
    pub fn toggle_selection(&mut self, id: &str) {
        if self.is_selected(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
    }

    // -- Prompt ------------------------------------------------------------

    /// Interpret a prompt and publish the view it produces.
    ///
    /// The previous highlight never survives a prompt; it is replaced by
    /// whatever the matched rule highlights, if anything.
    pub fn process_prompt(&mut self, prompt: &str) -> PromptIntent {
        let PromptOutcome {
            intent,
            campaigns,
            highlighted,
            criteria,
        } = interpret_prompt(prompt, &self.campaigns, &self.filters);
        let filtered: Vec<Campaign> = campaigns.into_iter().cloned().collect();

        if let Some(criteria) = criteria {
            self.filters = criteria;
        }
        self.filtered = filtered;
        self.highlighted = highlighted;
        intent
    }

    // -- Presentation flags ------------------------------------------------

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dashboard(campaigns={}, visible={}, status={}, search={:?}, highlighted={:?}, selected={:?})",
            self.campaigns.len(),
            self.filtered.len(),
            self.filters.status,
            self.filters.search_query,
            self.highlighted,
            self.selected
        )
    }
}
