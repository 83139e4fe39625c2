//! Navigation model and the authentication route guard.

mod guard;
mod route;

pub use guard::{AuthState, RouteGuard};
pub use route::{Location, Route, RouteArea};
