use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_project_slots")]
    pub project_slots: usize,
    #[serde(default = "default_work_types")]
    pub work_types: Vec<String>,
    #[serde(default = "default_public_holidays")]
    pub public_holidays: Vec<NaiveDate>,
}

fn default_project_slots() -> usize {
    3
}

fn default_work_types() -> Vec<String> {
    ["鋼筋", "模板", "混凝土", "水電", "泥作", "裝修"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_public_holidays() -> Vec<NaiveDate> {
    [
        "2024-01-01",
        "2024-02-08",
        "2024-02-09",
        "2024-02-12",
        "2024-02-13",
        "2024-02-14",
        "2024-02-28",
        "2024-04-04",
        "2024-04-05",
        "2024-05-01",
        "2024-06-10",
        "2024-09-17",
        "2024-10-10",
        "2025-01-01",
        "2025-01-25",
        "2025-01-26",
        "2025-01-27",
        "2025-01-28",
        "2025-01-29",
    ]
    .iter()
    .filter_map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_slots: default_project_slots(),
            work_types: default_work_types(),
            public_holidays: default_public_holidays(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        match dirs::home_dir() {
            Some(home) => home.join(".crewlog"),
            None => PathBuf::from(".crewlog"),
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("crewlog.yml")
    }

    /// Load configuration from an explicit path, or the standard location
    /// when none is given. A missing file yields the built-in defaults.
    pub fn load(explicit: Option<&str>) -> AppResult<Self> {
        let path = match explicit {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Write the default configuration to `path`, creating parent
    /// directories as needed.
    pub fn write_default(path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())
            .map_err(|e| AppError::Config(format!("failed to serialize defaults: {e}")))?;
        fs::write(path, yaml)?;

        Ok(())
    }
}
