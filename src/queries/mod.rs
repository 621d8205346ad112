//! Query modules for the campaign dashboard.
//!
//! Everything here is pure: functions take a borrowed campaign slice and
//! return borrowed views or computed values, leaving state publication to
//! [`Dashboard`](crate::store::Dashboard).

pub mod campaigns;
pub mod prompt;
pub mod stats;
pub mod trend;

pub use campaigns::{apply_filters, CampaignQuery};
pub use prompt::{classify, interpret_prompt, PromptIntent, PromptOutcome};
pub use stats::{summarize, CampaignSummary};
pub use trend::{chart_points, peak_day, ChartPoint};
