use std::path::{Path, PathBuf};

/// Environment variable that overrides the dataset location.
pub const DATASET_ENV: &str = "MARKETIQ_DATASET";

pub const DEFAULT_DATASET_FILE: &str = "campaigns.json";
pub const DEFAULT_DATASET_FILE_GZ: &str = "campaigns.json.gz";

/// Prompts offered by the playground as one-click examples.
pub const EXAMPLE_PROMPTS: [&str; 6] = [
    "Show top campaigns by CTR",
    "List paused campaigns",
    "Highlight best performing campaign",
    "Show campaigns with highest conversions",
    "Find campaigns with most clicks",
    "Display campaigns with highest impressions",
];

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("marketiq")
    } else {
        PathBuf::from(".marketiq")
    }
}

/// Locate the dataset file to load.
///
/// An explicit path always wins, then the `MARKETIQ_DATASET` environment
/// variable, then `campaigns.json` (or `campaigns.json.gz`) inside
/// [`default_data_dir`]. Explicit and environment paths are returned as-is
/// even if they do not exist, so the loader can report them; the default
/// location is only returned when a file is actually there.
pub fn resolve_dataset_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(DATASET_ENV) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    let dir = default_data_dir();
    [DEFAULT_DATASET_FILE, DEFAULT_DATASET_FILE_GZ]
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}
