use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use vt_core::intake::{IntakeFormError, ProfileIntakeForm, ValidationError};
use vt_core::ports::{ApiError, NutritionApiPort};
use vt_core::prediction::PredictionPayload;

use super::policy::{IntakeStep, StepPolicy, SubmissionPolicy};

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no signed-in user")]
    MissingUser,

    #[error("{step} failed: {source}")]
    RequestFailed {
        step: IntakeStep,
        #[source]
        source: ApiError,
    },

    #[error("submission cancelled")]
    Cancelled,
}

impl From<IntakeFormError> for IntakeError {
    fn from(err: IntakeFormError) -> Self {
        match err {
            IntakeFormError::Validation(e) => IntakeError::Validation(e),
            IntakeFormError::MissingUser => IntakeError::MissingUser,
        }
    }
}

/// Validates the form, then runs profile → train → predict in order.
pub struct SubmitProfileIntake {
    api: Arc<dyn NutritionApiPort>,
    policy: SubmissionPolicy,
}

impl SubmitProfileIntake {
    pub fn new(api: Arc<dyn NutritionApiPort>) -> Self {
        Self::with_policy(api, SubmissionPolicy::default())
    }

    pub fn with_policy(api: Arc<dyn NutritionApiPort>, policy: SubmissionPolicy) -> Self {
        Self { api, policy }
    }

    pub fn policy(&self) -> SubmissionPolicy {
        self.policy
    }

    /// Nothing is sent unless the form validates and carries a user id.
    pub async fn execute(
        &self,
        form: &ProfileIntakeForm,
    ) -> Result<PredictionPayload, IntakeError> {
        let span = info_span!("usecase.submit_profile_intake.execute");

        async {
            let profile = form.validate()?;

            self.step(
                IntakeStep::SubmitProfile,
                self.api.submit_diet_profile(&profile),
            )
            .await?;
            self.step(IntakeStep::TrainModel, self.api.train_model())
                .await?;

            let payload = self
                .api
                .predict_food(profile.user_id)
                .await
                .map_err(|source| IntakeError::RequestFailed {
                    step: IntakeStep::Predict,
                    source,
                })?;

            info!(user_id = %profile.user_id, "Prediction received");
            Ok(payload)
        }
        .instrument(span)
        .await
    }

    async fn step(
        &self,
        step: IntakeStep,
        request: impl Future<Output = Result<(), ApiError>>,
    ) -> Result<(), IntakeError> {
        match request.await {
            Ok(()) => {
                debug!(%step, "Step completed");
                Ok(())
            }
            Err(source) => match self.policy.for_step(step) {
                StepPolicy::Abort => {
                    warn!(%step, error = %source, "Step failed, aborting submission");
                    Err(IntakeError::RequestFailed { step, source })
                }
                StepPolicy::Ignore => {
                    warn!(%step, error = %source, "Step failed, continuing");
                    Ok(())
                }
            },
        }
    }
}
