//! # vt-infra
//!
//! External service adapters for the Vitality client.

pub mod http;

pub use http::{ApiClientError, HttpNutritionApi};
