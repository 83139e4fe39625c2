//! Prediction payload returned by `POST /predict_food`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label prefix the service prepends to the predicted diet.
pub const PREDICTED_DIET_PREFIX: &str = "predicted_diet: ";

/// Raw payload as sent by the service and carried as navigation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionPayload {
    pub predicted_diet: String,
}

#[derive(Debug, Error)]
pub enum PredictionParseError {
    #[error("prediction payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Display-ready prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_diet: String,
}

impl PredictionPayload {
    pub fn to_navigation_state(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_navigation_state(state: &str) -> Result<Self, PredictionParseError> {
        Ok(serde_json::from_str(state)?)
    }
}

impl PredictionResult {
    /// Strips the known label prefix once; any later occurrence is kept.
    pub fn from_payload(payload: &PredictionPayload) -> Self {
        let raw = payload.predicted_diet.as_str();
        let label = raw.strip_prefix(PREDICTED_DIET_PREFIX).unwrap_or(raw);
        Self {
            predicted_diet: label.to_string(),
        }
    }
}

impl From<PredictionPayload> for PredictionResult {
    fn from(payload: PredictionPayload) -> Self {
        Self::from_payload(&payload)
    }
}
