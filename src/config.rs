use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::model::risk::DEFAULT_DUE_SOON_DAYS;

/// Brasília has had no daylight saving since 2019.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -3;
pub const DEFAULT_TITLE: &str = "Roadmap";
pub const DEFAULT_TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
pub const DEFAULT_OUTPUT: &str = "roadmaps.zip";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    pub report: Option<ReportConfig>,
    pub theme: Option<ThemeConfig>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ReportConfig {
    pub utc_offset_hours: Option<i32>,
    pub due_soon_days: Option<i64>,
    pub title: Option<String>,
    pub tailwind_cdn: Option<String>,
    pub output: Option<String>,
}

/// Style overrides. `status` maps a status key (`done`, `in_progress`, ...) to a
/// Tailwind color stem such as `green-500`; `effort` maps an effort label to chip classes.
#[derive(Debug, Deserialize, Default)]
pub struct ThemeConfig {
    #[serde(default)]
    pub status: HashMap<String, String>,
    #[serde(default)]
    pub effort: HashMap<String, String>,
}

impl AppConfig {
    fn report(&self) -> Option<&ReportConfig> {
        self.report.as_ref()
    }

    pub fn utc_offset_hours(&self) -> i32 {
        self.report()
            .and_then(|r| r.utc_offset_hours)
            .unwrap_or(DEFAULT_UTC_OFFSET_HOURS)
    }

    pub fn due_soon_days(&self) -> i64 {
        self.report()
            .and_then(|r| r.due_soon_days)
            .unwrap_or(DEFAULT_DUE_SOON_DAYS)
    }

    pub fn title(&self) -> String {
        self.report()
            .and_then(|r| r.title.clone())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    pub fn tailwind_cdn(&self) -> String {
        self.report()
            .and_then(|r| r.tailwind_cdn.clone())
            .unwrap_or_else(|| DEFAULT_TAILWIND_CDN.to_string())
    }

    pub fn output(&self) -> PathBuf {
        self.report()
            .and_then(|r| r.output.as_deref())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}

pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".roadmap")
}

fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}
