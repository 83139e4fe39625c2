use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use vt_core::ports::{SecureStorageError, SecureStoragePort};

/// Private-file credential store for hosts without a usable keyring.
///
/// 基于文件的凭据存储（无桌面环境回退）。
///
/// One file per key, written through a temp file and rename, mode `0600` on
/// Unix.
#[derive(Debug, Clone)]
pub struct FileSecureStorage {
    base_dir: PathBuf,
}

impl FileSecureStorage {
    /// Create the store rooted at `<app_data_root>/credentials`.
    ///
    /// 在 `<app_data_root>/credentials` 下创建存储。
    pub fn new_in_app_data_root(app_data_root: &Path) -> Result<Self, io::Error> {
        let base_dir = app_data_root.join("credentials");
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_path(&self, key: &str) -> Result<PathBuf, SecureStorageError> {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(SecureStorageError::Other(format!(
                "credential key {key:?} is not a valid file name"
            )));
        }
        Ok(self.base_dir.join(format!("{key}.bin")))
    }

    fn map_io_error(context: &str, err: io::Error) -> SecureStorageError {
        match err.kind() {
            io::ErrorKind::PermissionDenied => {
                SecureStorageError::PermissionDenied(format!("{context}: {err}"))
            }
            _ => SecureStorageError::Other(format!("{context}: {err}")),
        }
    }
}

impl SecureStoragePort for FileSecureStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, SecureStorageError> {
        let path = self.file_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::map_io_error("failed to read credential file", err)),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), SecureStorageError> {
        let path = self.file_path(key)?;
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)
            .map_err(|err| Self::map_io_error("failed to write credential temp file", err))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&temp_path, fs::Permissions::from_mode(0o600))
                .map_err(|err| Self::map_io_error("failed to restrict credential file", err))?;
        }

        fs::rename(&temp_path, &path)
            .map_err(|err| Self::map_io_error("failed to replace credential file", err))
    }

    fn delete(&self, key: &str) -> Result<(), SecureStorageError> {
        let path = self.file_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::map_io_error("failed to delete credential file", err)),
        }
    }
}
