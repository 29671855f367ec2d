use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::analysis::DEFAULT_SERVICE_URL;
use crate::extract::DEFAULT_JPEG_QUALITY;
use crate::selection::MIN_SELECTION_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "swatchlens";
const APP_CONFIG_FILE: &str = "config.json";

/// Raw `config.json` contents; every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct AppConfig {
    #[serde(default)]
    pub(crate) service_url: Option<String>,
    /// Any integer; clamped into 1..=100 on resolve.
    #[serde(default)]
    pub(crate) jpeg_quality: Option<i64>,
    #[serde(default)]
    pub(crate) min_selection_size: Option<f64>,
}

/// Settings after defaults and range checks are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub service_url: String,
    pub jpeg_quality: u8,
    pub min_selection_size: f64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        AppConfig::default().resolve()
    }
}

impl AppConfig {
    pub(crate) fn resolve(&self) -> ResolvedConfig {
        let service_url = self
            .service_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_SERVICE_URL)
            .to_string();
        let jpeg_quality = self
            .jpeg_quality
            .map(|quality| quality.clamp(1, 100) as u8)
            .unwrap_or(DEFAULT_JPEG_QUALITY);
        let min_selection_size = self
            .min_selection_size
            .filter(|size| size.is_finite() && *size >= 1.0)
            .unwrap_or(MIN_SELECTION_SIZE);
        ResolvedConfig {
            service_url,
            jpeg_quality,
            min_selection_size,
        }
    }
}

pub fn load_config() -> ResolvedConfig {
    load_app_config().resolve()
}

pub(crate) fn load_app_config() -> AppConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_app_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return AppConfig::default(),
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            AppConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            AppConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
