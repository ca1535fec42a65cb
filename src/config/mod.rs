//! Configuration module for the META-AI backend
//!
//! Handles loading settings from YAML files and environment variables.
//! Settings are loaded once in `main` and passed down explicitly.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "META_AI_SETTINGS_PATH";

/// Candidate settings files, checked in order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("meta-ai-backend/settings.yml"));
    }
    paths
}

/// Load settings from the first file found, or defaults, then apply the
/// environment overlay
pub fn load() -> Result<Settings> {
    let explicit = std::env::var(SETTINGS_PATH_ENV).ok().map(PathBuf::from);
    let mut settings = read_from(explicit.as_deref(), &default_paths())?;
    settings.merge_env();
    Ok(settings)
}

/// Read the first settings file found, without the environment overlay
fn read_from(explicit: Option<&Path>, candidates: &[PathBuf]) -> Result<Settings> {
    if let Some(path) = explicit {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            return Settings::from_file(path);
        }
        anyhow::bail!("Settings file not found: {}", path.display());
    }

    for path in candidates {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            return Settings::from_file(path);
        }
    }

    info!("No settings file found, using defaults");
    Ok(Settings::default())
}
