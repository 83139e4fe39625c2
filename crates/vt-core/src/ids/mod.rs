//! ID and credential wrapper types for type safety.

pub mod access_token;
pub mod user_id;

pub use access_token::AccessToken;
pub use user_id::{UserId, UserIdParseError};
