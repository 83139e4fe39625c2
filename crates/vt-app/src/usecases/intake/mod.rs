//! Profile intake: validation, the request chain and the screen controller.

mod policy;
mod screen;
mod submit;

pub use policy::{IntakeStep, StepPolicy, SubmissionPolicy};
pub use screen::{ProfileIntakeScreen, PREDICTION_FAILED_MESSAGE, SESSION_EXPIRED_MESSAGE};
pub use submit::{IntakeError, SubmitProfileIntake};
