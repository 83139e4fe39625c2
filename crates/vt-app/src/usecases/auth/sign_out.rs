use std::sync::Arc;

use tracing::warn;

use crate::session::{SessionError, SessionManager};

/// Profile screen's "Sign out".
pub struct SignOut {
    session: Arc<SessionManager>,
}

impl SignOut {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self { session }
    }

    /// The user is signed out in memory even when this returns an error;
    /// the error only reports that the credential store could not be cleaned.
    pub fn execute(&self) -> Result<(), SessionError> {
        self.session.sign_out().inspect_err(|err| {
            warn!(error = %err, "Sign-out left credentials behind");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;
    use std::sync::atomic::Ordering;
    use vt_core::Route;

    #[test]
    fn sign_out_returns_to_login() {
        let h = Harness::new().signed_in();
        assert_eq!(h.router.current().route, Route::HOME);

        SignOut::new(h.session.clone()).execute().unwrap();

        assert_eq!(h.router.current().route, Route::Login);
        assert!(h.header.bearer().is_none());
    }

    #[test]
    fn store_failure_still_signs_out() {
        let h = Harness::new().signed_in();
        h.store.fail_delete.store(true, Ordering::SeqCst);

        assert!(SignOut::new(h.session.clone()).execute().is_err());
        assert!(!h.session.session().is_authenticated());
        assert_eq!(h.router.current().route, Route::Login);
    }
}
