//! Application directory helpers anchored to a single `.taksir` folder.
//!
//! Logs live under the OS config directory (e.g., `%APPDATA%` on Windows),
//! with a `TAKSIR_CONFIG_HOME` override for tests or portable setups. Model
//! artifacts are read from `TAKSIR_MODELS_DIR`, a `models` folder next to the
//! executable, or `./models`, in that order.

use std::{
    path::{Path, PathBuf},
    sync::{LazyLock, Mutex},
};

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application directory that lives under the OS config root.
pub const APP_DIR_NAME: &str = ".taksir";
/// Environment variable overriding the config root.
pub const CONFIG_HOME_ENV: &str = "TAKSIR_CONFIG_HOME";
/// Environment variable overriding the models directory.
pub const MODELS_DIR_ENV: &str = "TAKSIR_MODELS_DIR";
const MODELS_DIR_NAME: &str = "models";

static CONFIG_BASE_OVERRIDE: LazyLock<Mutex<Option<PathBuf>>> = LazyLock::new(|| Mutex::new(None));

/// Errors that can occur while resolving or preparing application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// No suitable base config directory could be resolved.
    #[error("No suitable base config directory available for application files")]
    NoBaseDir,
    /// Failed to create the application directory.
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Return the root `.taksir` directory, creating it if needed.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let base = config_base_dir().ok_or(AppDirError::NoBaseDir)?;
    let path = base.join(APP_DIR_NAME);
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Return the logs directory inside the `.taksir` root, creating it if needed.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    let path = app_root_dir()?.join("logs");
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Directory holding the model artifacts. Never created; loading reports what is missing.
pub fn models_dir() -> PathBuf {
    if let Some(path) = env_path(MODELS_DIR_ENV) {
        return path;
    }
    let bundled = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(MODELS_DIR_NAME)));
    resolve_models_dir(bundled.as_deref())
}

fn resolve_models_dir(bundled: Option<&Path>) -> PathBuf {
    match bundled {
        Some(dir) if dir.is_dir() => dir.to_path_buf(),
        _ => PathBuf::from(MODELS_DIR_NAME),
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn config_base_dir() -> Option<PathBuf> {
    if let Some(path) = CONFIG_BASE_OVERRIDE
        .lock()
        .ok()
        .and_then(|guard| guard.clone())
    {
        return Some(path);
    }
    if let Some(path) = env_path(CONFIG_HOME_ENV) {
        return Some(path);
    }
    BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
fn set_config_base_override(path: PathBuf) {
    let mut guard = CONFIG_BASE_OVERRIDE
        .lock()
        .expect("config base override mutex poisoned");
    *guard = Some(path);
}

#[cfg(test)]
fn clear_config_base_override() {
    let mut guard = CONFIG_BASE_OVERRIDE
        .lock()
        .expect("config base override mutex poisoned");
    *guard = None;
}
