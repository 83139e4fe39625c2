//! Controller behind the Predict tab.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use vt_core::intake::{IntakeStage, IntakeWizard, ProfileIntakeForm};
use vt_core::ports::ApiError;
use vt_core::{Location, Route};

use super::policy::IntakeStep;
use super::submit::{IntakeError, SubmitProfileIntake};
use crate::navigation::RouteGuardCoordinator;
use crate::session::SessionManager;

pub const PREDICTION_FAILED_MESSAGE: &str = "Failed to get prediction. Please try again.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

/// Wizard state plus the loading flag and inline error of the intake screen.
///
/// The form survives failed submissions untouched so the user can retry.
pub struct ProfileIntakeScreen {
    wizard: IntakeWizard,
    loading: bool,
    error: Option<String>,
    submit: SubmitProfileIntake,
    session: Arc<SessionManager>,
    router: Arc<RouteGuardCoordinator>,
}

impl ProfileIntakeScreen {
    /// Copies the user id from the current session into a fresh form.
    pub fn open(
        submit: SubmitProfileIntake,
        session: Arc<SessionManager>,
        router: Arc<RouteGuardCoordinator>,
    ) -> Self {
        let form = ProfileIntakeForm::for_user(session.session().user_id());
        Self {
            wizard: IntakeWizard::new(form),
            loading: false,
            error: None,
            submit,
            session,
            router,
        }
    }

    pub fn stage(&self) -> IntakeStage {
        self.wizard.stage()
    }

    pub fn form(&self) -> &ProfileIntakeForm {
        self.wizard.form()
    }

    pub fn form_mut(&mut self) -> &mut ProfileIntakeForm {
        self.wizard.form_mut()
    }

    pub fn advance(&mut self) -> IntakeStage {
        self.wizard.advance()
    }

    pub fn back(&mut self) -> IntakeStage {
        self.wizard.back()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Inline error text, if the last submission failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn submit(&mut self) -> Result<Location, IntakeError> {
        self.submit_with_cancel(&CancellationToken::new()).await
    }

    /// Runs the submission chain unless `cancel` fires first.
    ///
    /// On success the diet plan is pushed with the raw prediction as
    /// navigation state and the landed location is returned.
    pub async fn submit_with_cancel(
        &mut self,
        cancel: &CancellationToken,
    ) -> Result<Location, IntakeError> {
        self.loading = true;
        self.error = None;

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(IntakeError::Cancelled),
            result = self.submit.execute(self.wizard.form()) => result,
        };

        self.loading = false;

        let payload = match outcome {
            Ok(payload) => payload,
            Err(err) => {
                self.report(&err);
                return Err(err);
            }
        };

        let state = payload
            .to_navigation_state()
            .map_err(|e| IntakeError::RequestFailed {
                step: IntakeStep::Predict,
                source: ApiError::Decode(e.to_string()),
            })
            .inspect_err(|err| self.report(err))?;

        info!("Opening diet plan");
        Ok(self.router.navigate(Location::with_state(Route::DietPlan, state)))
    }

    fn report(&mut self, err: &IntakeError) {
        self.error = match err {
            IntakeError::Validation(e) => Some(e.to_string()),
            IntakeError::MissingUser => {
                warn!("Intake submitted without a user id, signing out");
                if let Err(e) = self.session.sign_out() {
                    warn!(error = %e, "Sign-out after lost session failed");
                }
                Some(SESSION_EXPIRED_MESSAGE.to_string())
            }
            IntakeError::RequestFailed { .. } => Some(PREDICTION_FAILED_MESSAGE.to_string()),
            IntakeError::Cancelled => None,
        };
    }
}
