use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Settings {
    /// Currency label shown before amounts, e.g. "PKR 1,234.56".
    #[serde(default = "default_currency")]
    pub(crate) currency: String,
    /// Overrides the platform data directory when set.
    #[serde(default)]
    pub(crate) data_dir: Option<String>,
}

fn default_currency() -> String {
    "PKR".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            data_dir: None,
        }
    }
}

fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "fintrack", "FinTrack")
        .map(|d| d.config_dir().to_path_buf())
}

fn settings_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("settings.json"))
}

/// A missing or unreadable settings file falls back to defaults.
pub(crate) fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        return Settings::default();
    };
    if !path.exists() {
        return Settings::default();
    }
    let content = std::fs::read_to_string(&path).unwrap_or_default();
    serde_json::from_str(&content).unwrap_or_default()
}

pub(crate) fn save_settings(settings: &Settings) -> anyhow::Result<()> {
    let Some(dir) = config_dir() else {
        return Ok(());
    };
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)?;
    if let Some(path) = settings_path() {
        std::fs::write(path, format!("{json}\n"))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
