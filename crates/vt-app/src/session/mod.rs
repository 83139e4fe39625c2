//! Authentication session ownership.

mod manager;

pub use manager::{SessionError, SessionManager, SessionObserver};
