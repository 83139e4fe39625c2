//! Credential store selection.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};
use vt_core::config::StorageBackend;
use vt_core::ports::SecureStoragePort;

use crate::capability::{detect_storage_capability, SecureStorageCapability};
use crate::file_storage::FileSecureStorage;
use crate::keyring_storage::SystemKeyringStorage;

#[derive(Debug, thiserror::Error)]
pub enum KeyringFactoryError {
    #[error("secure storage unsupported: {capability:?}")]
    Unsupported { capability: SecureStorageCapability },

    #[error("failed to initialize file credential store: {0}")]
    FileStoreInit(#[from] std::io::Error),
}

/// Builds the credential store for `backend`; `Auto` follows
/// [`detect_storage_capability`].
pub fn create_credential_store(
    backend: StorageBackend,
    service: &str,
    app_data_root: &Path,
) -> Result<Arc<dyn SecureStoragePort>, KeyringFactoryError> {
    let capability = match backend {
        StorageBackend::Auto => detect_storage_capability(),
        StorageBackend::Keyring => SecureStorageCapability::SystemKeyring,
        StorageBackend::File => SecureStorageCapability::FileStore,
    };
    debug!(?backend, ?capability, "Selecting credential store");

    store_from_capability(capability, service, app_data_root)
}

fn store_from_capability(
    capability: SecureStorageCapability,
    service: &str,
    app_data_root: &Path,
) -> Result<Arc<dyn SecureStoragePort>, KeyringFactoryError> {
    match capability {
        SecureStorageCapability::SystemKeyring => {
            info!(service, "Using system keyring for credentials");
            Ok(Arc::new(SystemKeyringStorage::new(service)) as Arc<dyn SecureStoragePort>)
        }
        SecureStorageCapability::FileStore => {
            let store = FileSecureStorage::new_in_app_data_root(app_data_root)?;
            warn!(dir = %store.base_dir().display(), "Using file credential store");
            Ok(Arc::new(store) as Arc<dyn SecureStoragePort>)
        }
        SecureStorageCapability::Unsupported => {
            Err(KeyringFactoryError::Unsupported { capability })
        }
    }
}
