use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_SETTINGS_FILE: &str = "numviz.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Locker count used when none is given explicitly.
    pub lockers: usize,
    /// Raw speed-slider position; larger is faster.
    pub speed: u32,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lockers: 20,
            speed: 550,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    lockers: Option<usize>,
    speed: Option<u32>,
    log_filter: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid settings file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Defaults, then `numviz.toml` from the working directory if present, then
/// `NUMVIZ__*` environment variables.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from(None)
}

/// Same as [`load_settings`], but an explicit `path` must exist.
pub fn load_settings_from(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();

    let file_cfg = match path {
        Some(path) => Some(read_file_settings(path)?),
        None => {
            let default_path = Path::new(DEFAULT_SETTINGS_FILE);
            if default_path.exists() {
                Some(read_file_settings(default_path)?)
            } else {
                None
            }
        }
    };

    if let Some(file_cfg) = file_cfg {
        if let Some(v) = file_cfg.lockers {
            settings.lockers = v;
        }
        if let Some(v) = file_cfg.speed {
            settings.speed = v;
        }
        if let Some(v) = file_cfg.log_filter {
            settings.log_filter = v;
        }
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings.lockers = settings.lockers.max(1);
    Ok(settings)
}

fn read_file_settings(path: &Path) -> Result<FileSettings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<FileSettings>(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) {
    if let Some(v) = lookup("NUMVIZ__LOCKERS") {
        match v.trim().parse::<usize>() {
            Ok(parsed) => settings.lockers = parsed,
            Err(_) => warn!(value = %v, "ignoring invalid NUMVIZ__LOCKERS"),
        }
    }
    if let Some(v) = lookup("NUMVIZ__SPEED") {
        match v.trim().parse::<u32>() {
            Ok(parsed) => settings.speed = parsed,
            Err(_) => warn!(value = %v, "ignoring invalid NUMVIZ__SPEED"),
        }
    }
    if let Some(v) = lookup("NUMVIZ__LOG_FILTER") {
        settings.log_filter = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
