use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use vt_core::ports::{AccountCredentials, NutritionApiPort};
use vt_core::{Location, Route};

use super::server_message;
use crate::navigation::RouteGuardCoordinator;

pub const MIN_PASSWORD_LEN: usize = 8;

const DEFAULT_REGISTER_FAILURE: &str = "Registration failed. Please try again.";

/// Sign-up form as typed.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("{0}")]
    Rejected(String),
}

/// Creates an account, then sends the user to the login screen.
pub struct RegisterAccount {
    api: Arc<dyn NutritionApiPort>,
    router: Arc<RouteGuardCoordinator>,
}

impl RegisterAccount {
    pub fn new(api: Arc<dyn NutritionApiPort>, router: Arc<RouteGuardCoordinator>) -> Self {
        Self { api, router }
    }

    /// Returns the location the user ends up on.
    pub async fn execute(&self, form: &RegistrationForm) -> Result<Location, RegisterError> {
        let span = info_span!("usecase.register_account.execute");

        async {
            Self::check(form)?;

            let credentials = AccountCredentials::new(&form.username, &form.password);
            self.api.register(&credentials).await.map_err(|err| {
                warn!(error = %err, "Registration request failed");
                RegisterError::Rejected(server_message(&err, DEFAULT_REGISTER_FAILURE))
            })?;

            info!(username = %credentials.username, "Account registered");
            Ok(self.router.replace(Location::new(Route::Login)))
        }
        .instrument(span)
        .await
    }

    fn check(form: &RegistrationForm) -> Result<(), RegisterError> {
        if form.username.trim().is_empty()
            || form.password.is_empty()
            || form.confirm_password.is_empty()
        {
            return Err(RegisterError::MissingFields);
        }
        if form.password != form.confirm_password {
            return Err(RegisterError::PasswordMismatch);
        }
        if form.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegisterError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}
