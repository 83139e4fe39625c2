//! reqwest-based implementation of the nutrition service ports.

mod client;
mod error_body;

pub use client::{ApiClientError, HttpNutritionApi};
