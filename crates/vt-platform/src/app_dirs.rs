use std::path::PathBuf;

const APP_DIR_NAME: &str = "vitality";

/// `VITALITY_PROFILE` isolates data and config of parallel installs.
pub const PROFILE_ENV: &str = "VITALITY_PROFILE";

fn resolved_app_dir_name() -> String {
    match std::env::var(PROFILE_ENV) {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// Credentials (file store) and logs.
    pub app_data_root: PathBuf,
    /// Home of `vitality.toml`.
    pub app_config_root: PathBuf,
}

impl AppDirs {
    pub fn config_file(&self) -> PathBuf {
        self.app_config_root.join("vitality.toml")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.app_data_root.join("logs")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppDirsError {
    #[error("local data directory is unavailable")]
    DataLocalDirUnavailable,

    #[error("config directory is unavailable")]
    ConfigDirUnavailable,
}

#[derive(Debug, Default)]
pub struct DirsAppDirsAdapter {
    base_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves both roots under `base` instead of the system directories.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_dir_override: Some(base),
        }
    }

    fn base_data_local_dir(&self) -> Option<PathBuf> {
        self.base_dir_override.clone().or_else(dirs::data_local_dir)
    }

    fn base_config_dir(&self) -> Option<PathBuf> {
        self.base_dir_override.clone().or_else(dirs::config_dir)
    }

    pub fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;
        let base_config = self
            .base_config_dir()
            .ok_or(AppDirsError::ConfigDirUnavailable)?;
        let app_dir_name = resolved_app_dir_name();

        Ok(AppDirs {
            app_data_root: base_data.join(&app_dir_name),
            app_config_root: base_config.join(&app_dir_name),
        })
    }
}
