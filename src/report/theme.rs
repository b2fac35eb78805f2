use std::collections::HashMap;

use crate::config::ThemeConfig;
use crate::model::work_item::Status;

const DEFAULT_STATUS_COLOR: &str = "gray-400";
const DEFAULT_EFFORT_CLASSES: &str = "bg-gray-200 text-gray-800";

fn default_status_color(key: &str) -> &'static str {
    match key {
        "backlog" => "blue-500",
        "done" => "green-500",
        "discovery" => "gray-500",
        "in_analysis" => "purple-500",
        "in_progress" => "yellow-500",
        "in_homologation" => "cyan-500",
        "pending_tasks" => "red-500",
        _ => DEFAULT_STATUS_COLOR,
    }
}

fn default_effort_classes() -> HashMap<String, String> {
    [
        ("Evolução", "bg-green-200 text-green-800"),
        ("Sustentação", "bg-indigo-200 text-indigo-800"),
        ("SETUP", "bg-orange-200 text-orange-800"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Immutable status and effort style tables, built once per run.
#[derive(Debug, Clone)]
pub struct Theme {
    status: HashMap<String, String>,
    effort: HashMap<String, String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(None)
    }
}

impl Theme {
    pub fn from_config(config: Option<&ThemeConfig>) -> Self {
        let mut status: HashMap<String, String> = Status::KNOWN
            .iter()
            .map(|s| s.key())
            .chain(std::iter::once("default"))
            .map(|key| (key.to_string(), default_status_color(key).to_string()))
            .collect();
        let mut effort = default_effort_classes();

        if let Some(config) = config {
            status.extend(config.status.iter().map(|(k, v)| (k.clone(), v.clone())));
            effort.extend(config.effort.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        Self { status, effort }
    }

    fn status_color(&self, status: &Status) -> &str {
        self.status
            .get(status.key())
            .or_else(|| self.status.get("default"))
            .map(String::as_str)
            .unwrap_or(DEFAULT_STATUS_COLOR)
    }

    pub fn status_bg(&self, status: &Status) -> String {
        format!("bg-{}", self.status_color(status))
    }

    pub fn status_border(&self, status: &Status) -> String {
        format!("border-{}", self.status_color(status))
    }

    pub fn effort_classes(&self, effort: &str) -> &str {
        self.effort
            .get(effort)
            .map(String::as_str)
            .unwrap_or(DEFAULT_EFFORT_CLASSES)
    }
}
