use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use vt_core::ports::{AccountCredentials, NutritionApiPort};
use vt_core::{AccessToken, Session};

use super::server_message;
use crate::session::{SessionError, SessionManager};

const DEFAULT_LOGIN_FAILURE: &str = "Invalid credentials. Please try again.";

/// Errors shown on the login screen; `Display` is the user-facing text.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Please enter both username and password")]
    MissingFields,

    #[error("Invalid response from server")]
    InvalidResponse,

    #[error("{0}")]
    Rejected(String),

    #[error("Could not save your session. Please try again.")]
    Session(#[source] SessionError),
}

/// Exchanges a username and password for a session.
///
/// On success the session manager is updated, which in turn lets the route
/// guard move the user into the app.
pub struct SignInWithPassword {
    api: Arc<dyn NutritionApiPort>,
    session: Arc<SessionManager>,
}

impl SignInWithPassword {
    pub fn new(api: Arc<dyn NutritionApiPort>, session: Arc<SessionManager>) -> Self {
        Self { api, session }
    }

    pub async fn execute(&self, username: &str, password: &str) -> Result<Session, LoginError> {
        let span = info_span!("usecase.sign_in.execute");

        async {
            let credentials = AccountCredentials::new(username, password);
            if credentials.username.is_empty() || credentials.password.is_empty() {
                return Err(LoginError::MissingFields);
            }

            let response = self.api.login(&credentials).await.map_err(|err| {
                warn!(error = %err, "Login request failed");
                LoginError::Rejected(server_message(&err, DEFAULT_LOGIN_FAILURE))
            })?;

            let token = response
                .access_token
                .map(AccessToken::new)
                .filter(|token| !token.is_empty());
            let (Some(token), Some(user_id)) = (token, response.user_id) else {
                warn!("Login response is missing the token or user id");
                return Err(LoginError::InvalidResponse);
            };

            let session = self
                .session
                .sign_in(token, Some(user_id))
                .map_err(LoginError::Session)?;
            info!(user_id = %user_id, "Login succeeded");
            Ok(session)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;
    use vt_core::ports::LoginResponse;
    use vt_core::session::TOKEN_KEY;
    use vt_core::{Route, UserId};

    fn sign_in(h: &Harness) -> SignInWithPassword {
        SignInWithPassword::new(h.api.clone(), h.session.clone())
    }

    #[tokio::test]
    async fn success_starts_session_and_leaves_login() {
        let h = Harness::new();
        let session = sign_in(&h).execute(" alice ", "secret123").await.unwrap();

        assert_eq!(session.user_id(), Some(UserId::new(42)));
        assert_eq!(h.store.value(TOKEN_KEY), Some(b"token-1".to_vec()));
        assert_eq!(h.router.current().route, Route::HOME);
    }

    #[tokio::test]
    async fn blank_fields_never_reach_the_server() {
        let h = Harness::new();
        let err = sign_in(&h).execute("alice", "   ").await.unwrap_err();

        assert_eq!(err.to_string(), "Please enter both username and password");
        assert!(h.api.calls().is_empty());
    }

    #[tokio::test]
    async fn server_detail_is_surfaced() {
        let h = Harness::new();
        h.api.fail("login", 401, Some("Incorrect username or password"));

        let err = sign_in(&h).execute("alice", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Incorrect username or password");
    }

    #[tokio::test]
    async fn server_without_detail_gets_default_text() {
        let h = Harness::new();
        h.api.fail("login", 500, None);

        let err = sign_in(&h).execute("alice", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials. Please try again.");
    }

    #[tokio::test]
    async fn response_without_token_is_invalid() {
        let h = Harness::new();
        h.api.set_login(LoginResponse {
            user_id: Some(UserId::new(1)),
            ..LoginResponse::default()
        });

        let err = sign_in(&h).execute("alice", "secret123").await.unwrap_err();
        assert!(matches!(err, LoginError::InvalidResponse));
        assert!(!h.session.session().is_authenticated());
    }
}
