//! MarketIQ campaign dashboard.
//!
//! Holds a fixed set of advertising campaigns in memory and derives the view a
//! user sees from two inputs: form-style filter criteria (status, date range,
//! name search) and free-text prompts interpreted through a fixed table of
//! keyword rules.
//!
//! # Quick start
//!
//! ```
//! use marketiq::Dashboard;
//!
//! let mut dashboard = Dashboard::builder().sample().build().unwrap();
//!
//! dashboard.process_prompt("Show top campaigns by CTR");
//! let leader = dashboard.filtered_campaigns().first().unwrap();
//! assert_eq!(dashboard.highlighted_campaign(), Some(leader.id.as_str()));
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod models;
pub mod queries;
pub mod sample;
pub mod store;

pub use error::{DashboardError, Result};
pub use models::{Campaign, CampaignStatus, DailyPerformance, DateRange, FilterCriteria, FilterPatch, Metric, StatusFilter};
pub use queries::{PromptIntent, PromptOutcome};
pub use store::{Dashboard, ViewStatus};

use std::path::{Path, PathBuf};

use tracing::info;

// ---------------------------------------------------------------------------
// DashboardBuilder
// ---------------------------------------------------------------------------

enum DatasetSource {
    Campaigns(Vec<Campaign>),
    File(PathBuf),
    Sample,
    Synthetic { count: usize, seed: u64 },
    Resolve,
}

/// Builder for configuring and constructing a [`Dashboard`].
///
/// Use [`Dashboard::builder()`] to obtain a builder. Without an explicit
/// source the builder looks for a dataset file through
/// [`config::resolve_dataset_path`] and falls back to the built-in sample.
pub struct DashboardBuilder {
    source: DatasetSource,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self {
            source: DatasetSource::Resolve,
        }
    }
}

impl DashboardBuilder {
    /// Use the given campaigns as the dataset.
    pub fn campaigns(mut self, campaigns: Vec<Campaign>) -> Self {
        self.source = DatasetSource::Campaigns(campaigns);
        self
    }

    /// Load the dataset from a JSON (or `.json.gz`) file.
    pub fn dataset_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = DatasetSource::File(path.as_ref().to_path_buf());
        self
    }

    /// Use the built-in demo dataset.
    pub fn sample(mut self) -> Self {
        self.source = DatasetSource::Sample;
        self
    }

    /// Generate `count` campaigns deterministically from `seed`.
    pub fn synthetic(mut self, count: usize, seed: u64) -> Self {
        self.source = DatasetSource::Synthetic { count, seed };
        self
    }

    /// Build the dashboard, loading the dataset if it comes from a file.
    pub fn build(self) -> Result<Dashboard> {
        let campaigns = match self.source {
            DatasetSource::Campaigns(campaigns) => campaigns,
            DatasetSource::File(path) => dataset::load_campaigns(&path)?,
            DatasetSource::Sample => sample::sample_campaigns(),
            DatasetSource::Synthetic { count, seed } => sample::synthetic_campaigns(count, seed),
            DatasetSource::Resolve => match config::resolve_dataset_path(None) {
                Some(path) => dataset::load_campaigns(&path)?,
                None => {
                    info!("no dataset file found; using built-in sample campaigns");
                    sample::sample_campaigns()
                }
            },
        };
        Ok(Dashboard::new(campaigns))
    }
}

impl Dashboard {
    /// Create a new builder for configuring the dashboard.
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::default()
    }
}
