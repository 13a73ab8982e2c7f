//! Configuration module
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_VAR: &str = "GITHUB_SEARCH_SETTINGS_PATH";

/// Load settings from the first settings file found, or defaults.
///
/// Environment overrides are applied in every case.
pub fn load() -> Result<Settings> {
    let mut settings = match find_settings_file() {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };

    settings.merge_env();
    Ok(settings)
}

fn find_settings_file() -> Option<PathBuf> {
    let explicit = std::env::var(SETTINGS_PATH_VAR).ok().map(PathBuf::from);

    let defaults = [
        Some(PathBuf::from("settings.yml")),
        Some(PathBuf::from("config/settings.yml")),
        dirs::config_dir().map(|p| p.join("github-repo-search/settings.yml")),
    ];

    explicit
        .into_iter()
        .chain(defaults.into_iter().flatten())
        .find(|path| path.exists())
}
