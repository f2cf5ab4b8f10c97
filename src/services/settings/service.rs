use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::TimeBrushConfig;

const CONFIG_FILE_NAME: &str = "timebrush.toml";
const STORAGE_FILE_NAME: &str = "availability.json";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "TimeBrush", "TimeBrush")
}

/// `<config dir>/timebrush.toml` for the current user, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// `<data dir>/availability.json`, the local store used when no HTTP endpoints are set.
pub fn default_storage_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join(STORAGE_FILE_NAME))
}

/// Reads the config file. A missing file means "all defaults".
pub fn load_config(path: &Path) -> Result<TimeBrushConfig> {
    if !path.exists() {
        log::info!("No config at {}, using defaults", path.display());
        return Ok(TimeBrushConfig::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;
    let config = toml::from_str(&data)
        .with_context(|| format!("failed to parse config at {}", path.display()))?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn save_config(path: &Path, config: &TimeBrushConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = toml::to_string_pretty(config).context("failed to serialize config")?;
    fs::write(path, data)
        .with_context(|| format!("failed to write config to {}", path.display()))?;
    Ok(())
}

/// Explicit path if given, else the per-user default, else defaults in memory.
pub fn resolve_config(explicit: Option<&Path>) -> Result<TimeBrushConfig> {
    match explicit.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => load_config(&path),
        None => {
            log::warn!("No config directory available, using defaults");
            Ok(TimeBrushConfig::default())
        }
    }
}
