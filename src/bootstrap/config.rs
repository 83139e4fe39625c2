//! # Configuration Loader / 配置加载器
//!
//! Reads `vitality.toml` into the [`AppConfig`] DTO. Only loading happens
//! here; key semantics live in `AppConfig::from_toml`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use vt_core::config::AppConfig;

/// Load configuration from a TOML file.
/// 从 TOML 文件加载配置。
///
/// # Errors / 错误
///
/// The file cannot be read, is not TOML, or holds a value of the wrong type.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Invalid config file: {}", config_path.display()))
}

/// Loads the explicitly requested file, or the default one when it exists.
///
/// An explicit path that does not exist is an error; a missing default file
/// means built-in defaults.
pub fn resolve_config(
    explicit: Option<&Path>,
    default_path: PathBuf,
) -> anyhow::Result<(AppConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        return Ok((load_config(path)?, Some(path.to_path_buf())));
    }
    if default_path.is_file() {
        return Ok((load_config(&default_path)?, Some(default_path)));
    }
    Ok((AppConfig::default(), None))
}
