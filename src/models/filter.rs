use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::models::CampaignStatus;

// ---------------------------------------------------------------------------
// StatusFilter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Paused,
}

impl StatusFilter {
    pub fn matches(&self, status: CampaignStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == CampaignStatus::Active,
            StatusFilter::Paused => status == CampaignStatus::Paused,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Paused => "Paused",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "paused" => Ok(StatusFilter::Paused),
            other => Err(DashboardError::InvalidArgument(format!(
                "unknown status '{}' (expected all, active or paused)",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

/// Optional start/end bounds on campaign dates.
///
/// The range only constrains anything when both bounds are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn with_start(self, start: Option<NaiveDate>) -> Self {
        Self { start, ..self }
    }

    pub fn with_end(self, end: Option<NaiveDate>) -> Self {
        Self { end, ..self }
    }

    /// Both bounds, or `None` when either is missing.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// True when `[start, end]` lies entirely inside the range.
    pub fn contains(&self, start: NaiveDate, end: NaiveDate) -> bool {
        match self.bounds() {
            Some((from, to)) => start >= from && end <= to,
            None => true,
        }
    }
}

/// Parse a `YYYY-MM-DD` date input; blank input means "no bound".
pub fn parse_date_input(input: &str) -> Result<Option<NaiveDate>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| DashboardError::InvalidDate(format!("{}: {}", trimmed, e)))
}

// ---------------------------------------------------------------------------
// FilterCriteria
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub status: StatusFilter,
    pub date_range: DateRange,
    pub search_query: String,
}

impl FilterCriteria {
    pub fn is_default(&self) -> bool {
        *self == FilterCriteria::default()
    }

    /// Return a new criteria value with every field present in `patch`
    /// replaced.
    pub fn merge(&self, patch: &FilterPatch) -> FilterCriteria {
        FilterCriteria {
            status: patch.status.unwrap_or(self.status),
            date_range: patch.date_range.unwrap_or(self.date_range),
            search_query: patch
                .search_query
                .clone()
                .unwrap_or_else(|| self.search_query.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterPatch
// ---------------------------------------------------------------------------

/// A partial update to [`FilterCriteria`]. `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPatch {
    pub status: Option<StatusFilter>,
    pub date_range: Option<DateRange>,
    pub search_query: Option<String>,
}

impl FilterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    pub fn date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.date_range.is_none() && self.search_query.is_none()
    }
}
