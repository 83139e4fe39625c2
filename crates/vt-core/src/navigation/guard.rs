//! Route guard.
//!
//! Defines a pure decision function that keeps the visible navigation area
//! consistent with the authentication state.

use serde::{Deserialize, Serialize};

use super::route::{Route, RouteArea};

/// Two-state authentication machine the guard observes.
///
/// 路由守卫观察的认证状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

/// Pure route guard: no side effects, no navigation of its own.
///
/// 纯路由守卫：只返回重定向目标。
pub struct RouteGuard;

impl RouteGuard {
    /// Returns the redirect target, or `None` when the current area already
    /// matches the auth state. Re-evaluating a consistent state never redirects.
    pub fn evaluate(auth: AuthState, area: RouteArea) -> Option<Route> {
        match (auth, area) {
            (AuthState::Unauthenticated, RouteArea::App) => Some(Route::SIGN_IN),
            (AuthState::Authenticated, RouteArea::Auth) => Some(Route::HOME),
            (AuthState::Unauthenticated, RouteArea::Auth)
            | (AuthState::Authenticated, RouteArea::App) => None,
        }
    }
}
