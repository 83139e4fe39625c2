//! Profile intake: the biometric/preference form and its two-stage wizard.

mod error;
mod form;
mod options;
mod wizard;

pub use error::{IntakeField, IntakeFormError, ValidationError};
pub use form::{DietProfile, ProfileIntakeForm};
pub use options::{ActivityLevel, DietaryPreference, Gender, Goal, UnknownOptionError};
pub use wizard::{IntakeStage, IntakeWizard};
