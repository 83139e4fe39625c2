//! Vitality application orchestration layer
//!
//! Session management, the route guard coordinator and the use cases behind
//! each screen. Everything here talks to the outside world through the ports
//! defined in `vt-core`.

pub mod app;
pub mod deps;
pub mod navigation;
pub mod session;
pub mod usecases;

#[cfg(test)]
pub(crate) mod testing;

pub use app::App;
pub use deps::AppDeps;
pub use navigation::RouteGuardCoordinator;
pub use session::{SessionError, SessionManager, SessionObserver};
