//! Use cases, one module per screen family.

pub mod auth;
pub mod dashboard;
pub mod intake;
pub mod result;

pub use auth::{
    LoginError, RegisterAccount, RegisterError, RegistrationForm, SignInWithPassword, SignOut,
};
pub use dashboard::{DashboardError, LoadDashboard};
pub use intake::{
    IntakeError, IntakeStep, ProfileIntakeScreen, StepPolicy, SubmissionPolicy,
    SubmitProfileIntake, PREDICTION_FAILED_MESSAGE, SESSION_EXPIRED_MESSAGE,
};
pub use result::{DietPlanScreen, ResultError};
