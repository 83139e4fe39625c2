//! Nutrition service API port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::diet::DietRecord;
use crate::ids::UserId;
use crate::intake::DietProfile;
use crate::prediction::PredictionPayload;

/// Username/password pair for `/register` and `/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AccountCredentials {
    pub username: String,
    pub password: String,
}

impl AccountCredentials {
    /// Both fields are trimmed before they leave the client.
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            password: password.trim().to_string(),
        }
    }
}

impl fmt::Debug for AccountCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a successful `/login`.
///
/// Every field is optional on the wire; the sign-in use case decides what a
/// usable response is.
#[derive(Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub token_expiration_time: Option<String>,
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("user_id", &self.user_id)
            .field("username", &self.username)
            .field("token_expiration_time", &self.token_expiration_time)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Human-readable reason supplied by the service, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Nutrition prediction service.
///
/// Every call except `register` and `login` relies on the bearer header set
/// through `RequestAuthPort`.
#[async_trait]
pub trait NutritionApiPort: Send + Sync {
    /// `POST /register`
    async fn register(&self, credentials: &AccountCredentials) -> Result<(), ApiError>;

    /// `POST /login`
    async fn login(&self, credentials: &AccountCredentials) -> Result<LoginResponse, ApiError>;

    /// `POST /diet`
    async fn submit_diet_profile(&self, profile: &DietProfile) -> Result<(), ApiError>;

    /// `POST /train_model`
    async fn train_model(&self) -> Result<(), ApiError>;

    /// `POST /predict_food`
    async fn predict_food(&self, user_id: UserId) -> Result<PredictionPayload, ApiError>;

    /// `GET /diet`
    async fn list_diet_records(&self) -> Result<Vec<DietRecord>, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_are_trimmed_and_redacted() {
        let creds = AccountCredentials::new("  alice ", " hunter22 ");
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, "hunter22");
        assert!(!format!("{creds:?}").contains("hunter22"));
    }

    #[test]
    fn login_response_tolerates_missing_fields() {
        let parsed: LoginResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert!(parsed.access_token.is_none());
        assert!(parsed.user_id.is_none());
    }

    #[test]
    fn rejected_error_exposes_detail() {
        let err = ApiError::Rejected {
            status: 401,
            detail: Some("Invalid credentials".into()),
        };
        assert_eq!(err.detail(), Some("Invalid credentials"));
        assert_eq!(err.status(), Some(401));
        assert_eq!(ApiError::Timeout.detail(), None);
    }
}
