use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Files picked up from the working directory when `--config` is absent,
/// in priority order.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["pdns-loadtest.toml", "pdns-loadtest.json"];

/// Why a config file was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigOrigin {
    /// Named by `--config`.
    Explicit,
    /// Found in the search directory under a default name.
    Discovered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn for_path(path: &Path) -> AppResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some(ext) => Err(AppError::config(ConfigError::UnsupportedExtension {
                ext: ext.to_owned(),
            })),
            None => Err(AppError::config(ConfigError::MissingExtension)),
        }
    }
}

/// Loads the config named by `--config`, or the first default file in the
/// working directory. `Ok(None)` means there is nothing to apply.
///
/// # Errors
///
/// Returns an error when the chosen file cannot be read or parsed.
pub fn load_config(explicit: Option<&str>) -> AppResult<Option<ConfigFile>> {
    let Some((path, origin)) = resolve_config_path(explicit, Path::new(".")) else {
        debug!("No config file given and none of {:?} found", DEFAULT_CONFIG_FILES);
        return Ok(None);
    };
    match origin {
        ConfigOrigin::Explicit => info!("Using config file {} (--config)", path.display()),
        ConfigOrigin::Discovered => info!(
            "Using config file {} found in the working directory",
            path.display()
        ),
    }
    load_config_file(&path).map(Some)
}

/// Picks the config file to load. An explicit path is returned as is, even if
/// it does not exist, so reading it reports the error.
pub(crate) fn resolve_config_path(
    explicit: Option<&str>,
    search_dir: &Path,
) -> Option<(PathBuf, ConfigOrigin)> {
    if let Some(path) = explicit {
        return Some((PathBuf::from(path), ConfigOrigin::Explicit));
    }
    DEFAULT_CONFIG_FILES
        .iter()
        .map(|name| search_dir.join(name))
        .find(|candidate| candidate.is_file())
        .map(|path| (path, ConfigOrigin::Discovered))
}

pub(crate) fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let format = ConfigFormat::for_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    match format {
        ConfigFormat::Toml => toml::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        ConfigFormat::Json => serde_json::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            })
        }),
    }
}
