//! Builds [`App`] from the loaded configuration.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use vt_app::{App, AppDeps};
use vt_core::config::AppConfig;
use vt_infra::HttpNutritionApi;
use vt_platform::keyring_storage::DEFAULT_SERVICE_NAME;
use vt_platform::{create_credential_store, AppDirs, MemoryNavigator};

/// `[storage] data_dir` if configured, otherwise the platform data dir.
pub fn data_root(config: &AppConfig, dirs: &AppDirs) -> PathBuf {
    config
        .data_dir
        .clone()
        .unwrap_or_else(|| dirs.app_data_root.clone())
}

pub fn wire_app(config: &AppConfig, dirs: &AppDirs) -> anyhow::Result<App> {
    let data_root = data_root(config, dirs);

    let credential_store =
        create_credential_store(config.storage_backend, DEFAULT_SERVICE_NAME, &data_root)
            .context("Failed to open credential store")?;
    let api = Arc::new(
        HttpNutritionApi::from_config(config).context("Failed to create API client")?,
    );

    info!(
        base_url = api.base_url(),
        timeout_secs = config.request_timeout_secs,
        "Wiring application"
    );

    Ok(App::new(AppDeps {
        credential_store,
        api: api.clone(),
        request_auth: api,
        navigator: Arc::new(MemoryNavigator::default()),
    }))
}
