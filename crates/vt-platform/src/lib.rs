//! # vt-platform
//!
//! Operating-system facing adapters for the Vitality client: where the
//! session credentials live, where app data goes, and the in-process
//! navigation stack.

pub mod app_dirs;
pub mod capability;
pub mod credential_store;
pub mod file_storage;
pub mod keyring_storage;
pub mod navigator;

pub use app_dirs::{AppDirs, AppDirsError, DirsAppDirsAdapter};
pub use capability::{detect_storage_capability, SecureStorageCapability};
pub use credential_store::{create_credential_store, KeyringFactoryError};
pub use file_storage::FileSecureStorage;
pub use keyring_storage::SystemKeyringStorage;
pub use navigator::MemoryNavigator;
