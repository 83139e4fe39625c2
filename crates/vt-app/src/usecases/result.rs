//! Diet plan (result) screen.

use vt_core::prediction::{PredictionParseError, PredictionPayload};
use vt_core::{Location, PredictionResult, Route};

#[derive(Debug, thiserror::Error)]
pub enum ResultError {
    #[error("diet plan opened without a prediction")]
    MissingState,

    #[error("navigation state is not a prediction: {0}")]
    InvalidState(#[from] PredictionParseError),

    #[error("{0} is not the diet plan screen")]
    WrongRoute(Route),
}

/// Display model of the result screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DietPlanScreen {
    result: PredictionResult,
}

impl DietPlanScreen {
    pub fn from_location(location: &Location) -> Result<Self, ResultError> {
        if location.route != Route::DietPlan {
            return Err(ResultError::WrongRoute(location.route));
        }
        let state = location.state.as_deref().ok_or(ResultError::MissingState)?;
        Self::from_navigation_state(state)
    }

    pub fn from_navigation_state(state: &str) -> Result<Self, ResultError> {
        let payload = PredictionPayload::from_navigation_state(state)?;
        Ok(Self {
            result: PredictionResult::from_payload(&payload),
        })
    }

    pub fn title(&self) -> &'static str {
        "Your Personalized Diet Plan"
    }

    /// Diet label without the service's prefix.
    pub fn predicted_diet(&self) -> &str {
        &self.result.predicted_diet
    }

    pub fn result(&self) -> &PredictionResult {
        &self.result
    }
}
