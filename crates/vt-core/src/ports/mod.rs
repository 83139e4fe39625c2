//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `vt-app` and the
//! adapters in `vt-platform` / `vt-infra`. Use cases only ever see
//! `Arc<dyn Port>`.

pub mod api;
pub mod navigator;
pub mod request_auth;
pub mod secure_storage;

pub use api::{AccountCredentials, ApiError, LoginResponse, NutritionApiPort};
pub use navigator::NavigatorPort;
pub use request_auth::RequestAuthPort;
pub use secure_storage::{SecureStorageError, SecureStoragePort};
