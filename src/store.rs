//! Loading the roster JSON.
//!
//! Two shapes are accepted: a bare array of records, or the backup object
//! `{"birthdays": [...]}` used by backup exports.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use cake_roster::BirthRecord;
use serde_json::Value;
use tracing::info;

/// Reads every record from `path`, in stored order.
pub fn load_records(path: &Path) -> Result<Vec<BirthRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster: {}", path.display()))?;
    let records = parse_records(&text)
        .with_context(|| format!("failed to parse roster: {}", path.display()))?;
    info!(path = %path.display(), n_records = records.len(), "roster loaded");
    Ok(records)
}

/// Parses roster JSON text in either accepted shape.
pub fn parse_records(text: &str) -> Result<Vec<BirthRecord>> {
    let value: Value = serde_json::from_str(text).context("invalid JSON")?;
    let list = match value {
        Value::Object(mut map) => map
            .remove("birthdays")
            .ok_or_else(|| anyhow!("expected an array or an object with a \"birthdays\" array"))?,
        other => other,
    };
    serde_json::from_value(list).context("invalid birthday record")
}
