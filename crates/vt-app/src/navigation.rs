//! Route guard coordinator.
//!
//! Applies [`RouteGuard`] to the live navigator: once after every session
//! change and once after every navigation request.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

use vt_core::ports::NavigatorPort;
use vt_core::{AuthState, Location, RouteGuard, Session};

use crate::session::SessionObserver;

pub struct RouteGuardCoordinator {
    navigator: Arc<dyn NavigatorPort>,
    auth: Mutex<AuthState>,
}

impl RouteGuardCoordinator {
    /// Assumes signed out until the first session notification.
    pub fn new(navigator: Arc<dyn NavigatorPort>) -> Self {
        Self {
            navigator,
            auth: Mutex::new(AuthState::Unauthenticated),
        }
    }

    pub fn current(&self) -> Location {
        self.navigator.current()
    }

    /// Pushes `location`, then lets the guard correct it. Returns where the
    /// user actually landed.
    pub fn navigate(&self, location: Location) -> Location {
        self.navigator.push(location);
        self.enforce();
        self.navigator.current()
    }

    /// Swaps the current location without growing history, then guards it.
    pub fn replace(&self, location: Location) -> Location {
        self.navigator.replace(location);
        self.enforce();
        self.navigator.current()
    }

    /// Redirects if the current location is not allowed. Calling it again
    /// without a state change does nothing.
    pub fn enforce(&self) -> Option<Location> {
        let auth = *self.auth.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.navigator.current();
        let target = RouteGuard::evaluate(auth, current.area())?;

        info!(from = %current.route, to = %target, "Route guard redirect");
        let redirect = Location::new(target);
        self.navigator.replace(redirect.clone());
        Some(redirect)
    }
}

impl SessionObserver for RouteGuardCoordinator {
    fn session_changed(&self, session: &Session) {
        *self.auth.lock().unwrap_or_else(PoisonError::into_inner) = session.auth_state();
        self.enforce();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StackNavigator;
    use vt_core::{AccessToken, Route, UserId};

    fn signed_in() -> Session {
        Session::authenticated(AccessToken::new("t"), UserId::new(1))
    }

    #[test]
    fn signing_in_on_login_goes_home() {
        let guard = RouteGuardCoordinator::new(Arc::new(StackNavigator::at(Route::Login)));
        guard.session_changed(&signed_in());
        assert_eq!(guard.current().route, Route::HOME);
    }

    #[test]
    fn signing_out_inside_app_goes_to_login() {
        let guard = RouteGuardCoordinator::new(Arc::new(StackNavigator::at(Route::Login)));
        guard.session_changed(&signed_in());
        guard.navigate(Location::new(Route::Dashboard));

        guard.session_changed(&Session::anonymous());
        assert_eq!(guard.current().route, Route::SIGN_IN);
    }

    #[test]
    fn navigating_into_app_while_signed_out_is_redirected() {
        let guard = RouteGuardCoordinator::new(Arc::new(StackNavigator::at(Route::Login)));
        let landed = guard.navigate(Location::new(Route::Meals));
        assert_eq!(landed.route, Route::Login);
    }

    #[test]
    fn enforce_is_idempotent() {
        let guard = RouteGuardCoordinator::new(Arc::new(StackNavigator::at(Route::Predict)));
        assert_eq!(guard.enforce(), Some(Location::new(Route::Login)));
        assert_eq!(guard.enforce(), None);
    }

    #[test]
    fn allowed_navigation_keeps_state() {
        let guard = RouteGuardCoordinator::new(Arc::new(StackNavigator::at(Route::Login)));
        guard.session_changed(&signed_in());
        let landed = guard.navigate(Location::with_state(Route::DietPlan, "{}"));
        assert_eq!(landed.state.as_deref(), Some("{}"));
    }
}
