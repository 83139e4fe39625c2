//! Application root: owns the session manager and the route guard and hands
//! out use cases wired to the same ports.

use std::sync::Arc;

use tracing::info;

use vt_core::ports::NutritionApiPort;
use vt_core::{Location, Session};

use crate::deps::AppDeps;
use crate::navigation::RouteGuardCoordinator;
use crate::session::SessionManager;
use crate::usecases::{
    LoadDashboard, ProfileIntakeScreen, RegisterAccount, SignInWithPassword, SignOut,
    SubmissionPolicy, SubmitProfileIntake,
};

pub struct App {
    api: Arc<dyn NutritionApiPort>,
    session: Arc<SessionManager>,
    router: Arc<RouteGuardCoordinator>,
    submission_policy: SubmissionPolicy,
}

impl App {
    /// Subscribes the route guard to session changes. Call [`App::start`]
    /// before using any screen.
    pub fn new(deps: AppDeps) -> Self {
        let session = Arc::new(SessionManager::new(
            deps.credential_store,
            deps.request_auth,
        ));
        let router = Arc::new(RouteGuardCoordinator::new(deps.navigator));
        session.subscribe(router.clone());

        Self {
            api: deps.api,
            session,
            router,
            submission_policy: SubmissionPolicy::default(),
        }
    }

    pub fn with_submission_policy(mut self, policy: SubmissionPolicy) -> Self {
        self.submission_policy = policy;
        self
    }

    /// Restores the persisted session; the guard then settles the initial
    /// location.
    pub fn start(&self) -> Session {
        let session = self.session.restore();
        info!(
            authenticated = session.is_authenticated(),
            location = %self.router.current().route,
            "App started"
        );
        session
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    pub fn router(&self) -> &Arc<RouteGuardCoordinator> {
        &self.router
    }

    pub fn navigate(&self, location: impl Into<Location>) -> Location {
        self.router.navigate(location.into())
    }

    pub fn sign_in(&self) -> SignInWithPassword {
        SignInWithPassword::new(self.api.clone(), self.session.clone())
    }

    pub fn register(&self) -> RegisterAccount {
        RegisterAccount::new(self.api.clone(), self.router.clone())
    }

    pub fn sign_out(&self) -> SignOut {
        SignOut::new(self.session.clone())
    }

    pub fn intake_screen(&self) -> ProfileIntakeScreen {
        ProfileIntakeScreen::open(
            SubmitProfileIntake::with_policy(self.api.clone(), self.submission_policy),
            self.session.clone(),
            self.router.clone(),
        )
    }

    pub fn load_dashboard(&self) -> LoadDashboard {
        LoadDashboard::new(self.api.clone())
    }
}
