//! Authentication session model.
//!
//! A session either carries a complete credential pair or nothing at all.
//! There is no representable state with a token but no user id (or the
//! reverse), which keeps the "written and cleared as a pair" rule structural.

use serde::{Deserialize, Serialize};

use crate::ids::{AccessToken, UserId};
use crate::navigation::AuthState;

/// Storage key for the bearer token.
///
/// 令牌的存储键。
pub const TOKEN_KEY: &str = "token";

/// Storage key for the stringified user id.
///
/// 用户 ID 的存储键。
pub const USER_ID_KEY: &str = "userId";

/// Token and user id issued together by a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCredentials {
    pub token: AccessToken,
    pub user_id: UserId,
}

/// In-memory authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    credentials: Option<SessionCredentials>,
}

impl Session {
    /// A signed-out session.
    pub fn anonymous() -> Self {
        Self { credentials: None }
    }

    pub fn authenticated(token: AccessToken, user_id: UserId) -> Self {
        Self {
            credentials: Some(SessionCredentials { token, user_id }),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn auth_state(&self) -> AuthState {
        if self.is_authenticated() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }

    pub fn token(&self) -> Option<&AccessToken> {
        self.credentials.as_ref().map(|c| &c.token)
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.credentials.as_ref().map(|c| c.user_id)
    }

    pub fn credentials(&self) -> Option<&SessionCredentials> {
        self.credentials.as_ref()
    }
}
