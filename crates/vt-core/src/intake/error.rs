use std::fmt;

use thiserror::Error;

/// Numeric fields of the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeField {
    Age,
    Height,
    Weight,
}

impl fmt::Display for IntakeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntakeField::Age => "age",
            IntakeField::Height => "height",
            IntakeField::Weight => "weight",
        };
        f.write_str(name)
    }
}

/// Client-side required-field validation failure. Shown inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingField(IntakeField),

    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: IntakeField, value: String },
}

impl ValidationError {
    pub fn field(&self) -> IntakeField {
        match self {
            ValidationError::MissingField(field) => *field,
            ValidationError::InvalidNumber { field, .. } => *field,
        }
    }
}

/// Reasons a form cannot be turned into a submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeFormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No user id was copied from the session; the user must sign in again.
    #[error("no signed-in user, please sign in again")]
    MissingUser,
}
