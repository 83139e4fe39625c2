//! Sign-in, registration and sign-out.

mod register;
mod sign_in;
mod sign_out;

pub use register::{RegisterAccount, RegisterError, RegistrationForm, MIN_PASSWORD_LEN};
pub use sign_in::{LoginError, SignInWithPassword};
pub use sign_out::SignOut;

use vt_core::ports::ApiError;

/// Server-supplied reason if there is one, otherwise `fallback`.
pub(crate) fn server_message(err: &ApiError, fallback: &str) -> String {
    err.detail()
        .map(str::trim)
        .filter(|detail| !detail.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
