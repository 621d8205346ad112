//! Campaign dataset loading.
//!
//! A dataset file is either a JSON array of campaigns or an object wrapping
//! that array under `"campaigns"` (or `"data"`). Files ending in `.gz` are
//! decompressed transparently.

use std::collections::HashSet;
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{DashboardError, Result};
use crate::models::Campaign;

/// Load and validate the campaigns stored at `path`.
pub fn load_campaigns(path: &Path) -> Result<Vec<Campaign>> {
    if !path.is_file() {
        return Err(DashboardError::NotFound(format!(
            "Dataset file {} does not exist",
            path.display()
        )));
    }

    debug!(path = %path.display(), "reading campaign dataset");
    let contents = read_text(path)?;

    let campaigns = parse_campaigns(&contents).map_err(|e| {
        warn!(path = %path.display(), error = %e, "dataset file is not a valid campaign list");
        e
    })?;

    info!(path = %path.display(), count = campaigns.len(), "loaded campaign dataset");
    Ok(campaigns)
}

/// Parse a dataset document from a string.
pub fn parse_campaigns(json: &str) -> Result<Vec<Campaign>> {
    let value: Value = serde_json::from_str(json)?;
    let campaigns = campaigns_from_value(value)?;
    ensure_unique_ids(&campaigns)?;
    Ok(campaigns)
}

fn read_text(path: &Path) -> Result<String> {
    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let file = fs::File::open(path)?;
        let decoder = GzDecoder::new(BufReader::new(file));
        let mut buf_reader = BufReader::new(decoder);
        let mut contents = String::new();
        buf_reader.read_to_string(&mut contents)?;
        Ok(contents)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn campaigns_from_value(value: Value) -> Result<Vec<Campaign>> {
    let array = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => match map.remove("campaigns").or_else(|| map.remove("data")) {
            Some(inner @ Value::Array(_)) => inner,
            _ => {
                return Err(DashboardError::InvalidArgument(
                    "dataset object has no \"campaigns\" or \"data\" array".to_string(),
                ))
            }
        },
        _ => {
            return Err(DashboardError::InvalidArgument(
                "dataset must be a JSON array or object".to_string(),
            ))
        }
    };
    Ok(serde_json::from_value(array)?)
}

fn ensure_unique_ids(campaigns: &[Campaign]) -> Result<()> {
    let mut seen = HashSet::with_capacity(campaigns.len());
    for c in campaigns {
        if !seen.insert(c.id.as_str()) {
            return Err(DashboardError::InvalidArgument(format!(
                "duplicate campaign id '{}'",
                c.id
            )));
        }
    }
    Ok(())
}
