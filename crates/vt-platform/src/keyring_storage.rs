//! Credential store backed by the operating system keyring.
//!
//! 基于系统钥匙串的凭据存储。

use keyring::Entry;
use vt_core::ports::{SecureStorageError, SecureStoragePort};

pub const DEFAULT_SERVICE_NAME: &str = "Vitality";

trait KeyringEntryOps {
    fn get_secret(&self) -> Result<Vec<u8>, keyring::Error>;
    fn set_secret(&self, secret: &[u8]) -> Result<(), keyring::Error>;
    fn delete_credential(&self) -> Result<(), keyring::Error>;
}

trait KeyringBackend {
    type Entry: KeyringEntryOps;
    fn new_entry(&self, service: &str, key: &str) -> Result<Self::Entry, keyring::Error>;
}

struct RealBackend;

struct RealEntry {
    entry: Entry,
}

impl KeyringEntryOps for RealEntry {
    fn get_secret(&self) -> Result<Vec<u8>, keyring::Error> {
        self.entry.get_secret()
    }

    fn set_secret(&self, secret: &[u8]) -> Result<(), keyring::Error> {
        self.entry.set_secret(secret)
    }

    fn delete_credential(&self) -> Result<(), keyring::Error> {
        self.entry.delete_credential()
    }
}

impl KeyringBackend for RealBackend {
    type Entry = RealEntry;

    fn new_entry(&self, service: &str, key: &str) -> Result<Self::Entry, keyring::Error> {
        Ok(RealEntry {
            entry: Entry::new(service, key)?,
        })
    }
}

fn map_error(action: &str, err: keyring::Error) -> SecureStorageError {
    match err {
        keyring::Error::PlatformFailure(inner) => {
            SecureStorageError::PermissionDenied(inner.to_string())
        }
        keyring::Error::NoStorageAccess(inner) => {
            SecureStorageError::Unavailable(inner.to_string())
        }
        bad @ keyring::Error::BadEncoding(_) => {
            SecureStorageError::Corrupt(format!("failed to {action} credential: {bad}"))
        }
        other => SecureStorageError::Other(format!("failed to {action} credential: {other}")),
    }
}

fn entry<B: KeyringBackend>(
    backend: &B,
    service: &str,
    key: &str,
) -> Result<B::Entry, SecureStorageError> {
    backend
        .new_entry(service, key)
        .map_err(|e| map_error("open", e))
}

fn get_with_backend<B: KeyringBackend>(
    backend: &B,
    service: &str,
    key: &str,
) -> Result<Option<Vec<u8>>, SecureStorageError> {
    match entry(backend, service, key)?.get_secret() {
        Ok(secret) => Ok(Some(secret)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(err) => Err(map_error("read", err)),
    }
}

fn set_with_backend<B: KeyringBackend>(
    backend: &B,
    service: &str,
    key: &str,
    value: &[u8],
) -> Result<(), SecureStorageError> {
    entry(backend, service, key)?
        .set_secret(value)
        .map_err(|e| map_error("write", e))
}

fn delete_with_backend<B: KeyringBackend>(
    backend: &B,
    service: &str,
    key: &str,
) -> Result<(), SecureStorageError> {
    match entry(backend, service, key)?.delete_credential() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(err) => Err(map_error("delete", err)),
    }
}

/// One keyring entry per key under a single service name.
#[derive(Debug, Clone)]
pub struct SystemKeyringStorage {
    service: String,
}

impl SystemKeyringStorage {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

impl Default for SystemKeyringStorage {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_NAME)
    }
}

impl SecureStoragePort for SystemKeyringStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, SecureStorageError> {
        get_with_backend(&RealBackend, &self.service, key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), SecureStorageError> {
        set_with_backend(&RealBackend, &self.service, key, value)
    }

    fn delete(&self, key: &str) -> Result<(), SecureStorageError> {
        delete_with_backend(&RealBackend, &self.service, key)
    }
}
