//! # vt-core
//!
//! Core domain models and port definitions for the Vitality nutrition client.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! no HTTP, no keyring, no filesystem.

// Public module exports
pub mod config;
pub mod diet;
pub mod ids;
pub mod intake;
pub mod meals;
pub mod navigation;
pub mod ports;
pub mod prediction;
pub mod session;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::{AccessToken, UserId};
pub use intake::{IntakeStage, IntakeWizard, ProfileIntakeForm, ValidationError};
pub use navigation::{AuthState, Location, Route, RouteArea, RouteGuard};
pub use prediction::PredictionResult;
pub use session::{Session, SessionCredentials};
