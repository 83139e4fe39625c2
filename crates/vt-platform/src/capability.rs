//! Platform capability detection for the credential store.
//!
//! Decides whether a system keyring is usable or the file fallback is needed.

/// Represents the secure storage capability of the current platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecureStorageCapability {
    /// macOS Keychain, Windows Credential Manager or a Linux Secret Service
    SystemKeyring,
    /// No usable keyring (WSL, headless Linux); credentials go to a private file
    FileStore,
    Unsupported,
}

/// Detect the secure storage capability of the current platform.
///
/// - **macOS / Windows**: `SystemKeyring`
/// - **Linux**: `FileStore` under WSL or without a desktop session
///   (DISPLAY + DBUS), otherwise `SystemKeyring`
/// - **Other**: `Unsupported`
pub fn detect_storage_capability() -> SecureStorageCapability {
    #[cfg(any(target_os = "macos", target_os = "windows"))]
    {
        tracing::info!("Using the platform credential manager");
        return SecureStorageCapability::SystemKeyring;
    }

    #[cfg(target_os = "linux")]
    {
        if is_wsl() {
            tracing::warn!("WSL environment detected, storing credentials in a private file");
            return SecureStorageCapability::FileStore;
        }

        if has_desktop_environment() {
            tracing::info!("Linux desktop session detected, using the system keyring");
            return SecureStorageCapability::SystemKeyring;
        }

        tracing::warn!("No desktop session detected, storing credentials in a private file");
        SecureStorageCapability::FileStore
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        tracing::error!("Unsupported platform for credential storage");
        SecureStorageCapability::Unsupported
    }
}

/// `/proc/version` mentions Microsoft/WSL, or a WSL variable is set.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn is_wsl() -> bool {
    if let Ok(version) = std::fs::read_to_string("/proc/version") {
        if version.contains("Microsoft") || version.contains("WSL") {
            return true;
        }
    }

    std::env::var("WSL_DISTRO_NAME").is_ok() || std::env::var("WSL_INTEROP").is_ok()
}

/// Keyring daemons need both a display and a session bus.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn has_desktop_environment() -> bool {
    std::env::var("DISPLAY").is_ok() && std::env::var("DBUS_SESSION_BUS_ADDRESS").is_ok()
}
