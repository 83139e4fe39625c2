//! # Configuration DTO / 配置数据
//!
//! Pure data: the TOML → `AppConfig` mapping and the documented defaults.
//! Reading files and resolving directories belongs to the bootstrap layer.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Production API host.
pub const DEFAULT_API_BASE_URL: &str = "https://kollie.pythonanywhere.com";

/// Per-request timeout applied to every API call.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Which credential store backs the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageBackend {
    /// Detect from the platform: system keyring when usable, file store otherwise.
    #[default]
    Auto,
    Keyring,
    File,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(StorageBackend::Auto),
            "keyring" => Ok(StorageBackend::Keyring),
            "file" => Ok(StorageBackend::File),
            other => Err(format!("unknown storage backend: {other}")),
        }
    }
}

/// Application configuration DTO.
/// 应用配置 DTO。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the nutrition service, without trailing slash.
    pub api_base_url: String,

    pub request_timeout_secs: u64,

    pub storage_backend: StorageBackend,

    /// Overrides the platform data directory (logs, file credential store).
    /// 覆盖平台数据目录。
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            storage_backend: StorageBackend::Auto,
            data_dir: None,
        }
    }
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    /// 从 TOML 值创建 AppConfig。
    ///
    /// Missing keys keep their defaults. An unknown storage backend is an
    /// error rather than a silent fallback.
    pub fn from_toml(toml_value: &toml::Value) -> Result<Self, String> {
        let defaults = Self::default();

        let api_base_url = toml_value
            .get("api")
            .and_then(|a| a.get("base_url"))
            .and_then(|v| v.as_str())
            .map(|s| s.trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.api_base_url);

        let request_timeout_secs = toml_value
            .get("api")
            .and_then(|a| a.get("request_timeout_secs"))
            .and_then(|v| v.as_integer())
            .filter(|secs| *secs > 0)
            .map(|secs| secs as u64)
            .unwrap_or(defaults.request_timeout_secs);

        let storage_backend = match toml_value
            .get("storage")
            .and_then(|s| s.get("backend"))
            .and_then(|v| v.as_str())
        {
            Some(raw) => raw.parse()?,
            None => defaults.storage_backend,
        };

        let data_dir = toml_value
            .get("storage")
            .and_then(|s| s.get("data_dir"))
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            api_base_url,
            request_timeout_secs,
            storage_backend,
            data_dir,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
