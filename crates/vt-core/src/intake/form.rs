use serde::{Deserialize, Serialize};

use super::error::{IntakeField, IntakeFormError, ValidationError};
use super::options::{ActivityLevel, DietaryPreference, Gender, Goal};
use crate::ids::UserId;

/// Raw form state as typed by the user.
///
/// Numeric fields stay strings until submission; only `validate` interprets
/// them. The form lives for one visit of the intake screen and is never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileIntakeForm {
    pub age: String,
    pub height_cm: String,
    pub weight_kg: String,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub dietary_preference: DietaryPreference,
    /// Copied from the session when the screen opens.
    pub user_id: Option<UserId>,
}

/// Body of `POST /diet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietProfile {
    pub user_id: UserId,
    pub age: u32,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub dietary_preference: DietaryPreference,
}

impl ProfileIntakeForm {
    pub fn for_user(user_id: Option<UserId>) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    /// Checks required fields, then the user id, and builds the payload.
    ///
    /// Field checks run first so an incomplete form is reported inline even
    /// when the session has also been lost.
    pub fn validate(&self) -> Result<DietProfile, IntakeFormError> {
        let age_raw = required(&self.age, IntakeField::Age)?;
        let height_raw = required(&self.height_cm, IntakeField::Height)?;
        let weight_raw = required(&self.weight_kg, IntakeField::Weight)?;

        let age = age_raw
            .parse::<u32>()
            .map_err(|_| invalid(IntakeField::Age, age_raw))?;
        let height = parse_measure(height_raw, IntakeField::Height)?;
        let weight = parse_measure(weight_raw, IntakeField::Weight)?;

        let user_id = self.user_id.ok_or(IntakeFormError::MissingUser)?;

        Ok(DietProfile {
            user_id,
            age,
            gender: self.gender,
            height,
            weight,
            activity_level: self.activity_level,
            goal: self.goal,
            dietary_preference: self.dietary_preference,
        })
    }
}

fn required(value: &str, field: IntakeField) -> Result<&str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

fn parse_measure(raw: &str, field: IntakeField) -> Result<f64, ValidationError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(invalid(field, raw)),
    }
}

fn invalid(field: IntakeField, raw: &str) -> ValidationError {
    ValidationError::InvalidNumber {
        field,
        value: raw.to_string(),
    }
}
