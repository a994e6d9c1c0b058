use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given. Its absence is not an error.
pub const DEFAULT_CONFIG_PATH: &str = "cake.toml";

/// Top-level Cake configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CakeConfig {
    /// Roster storage.
    #[serde(default)]
    pub store: StoreToml,

    /// Output formatting.
    #[serde(default)]
    pub display: DisplayToml,

    /// Projection policies.
    #[serde(default)]
    pub projection: ProjectionToml,

    /// Listing defaults.
    #[serde(default)]
    pub list: ListToml,

    /// Which reminder offsets are active.
    #[serde(default)]
    pub reminders: RemindersToml,
}

impl CakeConfig {
    /// Loads `path`, or [`DEFAULT_CONFIG_PATH`] when `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_PATH), false),
        };
        if !explicit && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreToml {
    #[serde(default = "default_roster")]
    pub roster: PathBuf,
}

impl Default for StoreToml {
    fn default() -> Self {
        Self {
            roster: default_roster(),
        }
    }
}

fn default_roster() -> PathBuf {
    PathBuf::from("birthdays.json")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_date_style")]
    pub date_style: String,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            date_style: default_date_style(),
        }
    }
}

fn default_date_style() -> String {
    "dmy".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectionToml {
    #[serde(default = "default_leap_day")]
    pub leap_day: String,
    #[serde(default = "default_future_birth")]
    pub future_birth: String,
}

impl Default for ProjectionToml {
    fn default() -> Self {
        Self {
            leap_day: default_leap_day(),
            future_birth: default_future_birth(),
        }
    }
}

fn default_leap_day() -> String {
    "clamp".to_string()
}
fn default_future_birth() -> String {
    "reject".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListToml {
    #[serde(default = "default_sort")]
    pub sort: String,
}

impl Default for ListToml {
    fn default() -> Self {
        Self {
            sort: default_sort(),
        }
    }
}

fn default_sort() -> String {
    "proximity".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemindersToml {
    #[serde(default = "default_true")]
    pub on_day: bool,
    #[serde(default = "default_true")]
    pub day_before: bool,
    #[serde(default = "default_true")]
    pub three_days_before: bool,
    #[serde(default = "default_true")]
    pub one_week_before: bool,
    #[serde(default)]
    pub two_weeks_before: bool,
    #[serde(default)]
    pub one_month_before: bool,
}

impl Default for RemindersToml {
    fn default() -> Self {
        Self {
            on_day: true,
            day_before: true,
            three_days_before: true,
            one_week_before: true,
            two_weeks_before: false,
            one_month_before: false,
        }
    }
}

fn default_true() -> bool {
    true
}
