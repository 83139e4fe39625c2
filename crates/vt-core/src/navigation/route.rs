use serde::{Deserialize, Serialize};
use std::fmt;

/// Navigation area a route belongs to.
///
/// 路由所属区域。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteArea {
    /// Sign-in / sign-up flow.
    ///
    /// 登录 / 注册流程。
    Auth,
    /// Everything behind authentication.
    ///
    /// 需要认证的应用区域。
    App,
}

/// Every screen the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Login,
    Register,
    /// Home tab: the profile intake wizard.
    Predict,
    Meals,
    Dashboard,
    Profile,
    /// Prediction result; carries the serialized payload as navigation state.
    DietPlan,
}

impl Route {
    /// Landing route for an authenticated user.
    pub const HOME: Route = Route::Predict;

    /// Landing route for a signed-out user.
    pub const SIGN_IN: Route = Route::Login;

    pub fn area(&self) -> RouteArea {
        match self {
            Route::Login | Route::Register => RouteArea::Auth,
            Route::Predict
            | Route::Meals
            | Route::Dashboard
            | Route::Profile
            | Route::DietPlan => RouteArea::App,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Predict => "/",
            Route::Meals => "/meals",
            Route::Dashboard => "/dashboard",
            Route::Profile => "/profile",
            Route::DietPlan => "/diet-plan",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A route plus the state handed to the screen that renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub route: Route,
    /// Serialized navigation state (e.g. the prediction payload for `DietPlan`).
    pub state: Option<String>,
}

impl Location {
    pub fn new(route: Route) -> Self {
        Self { route, state: None }
    }

    pub fn with_state(route: Route, state: impl Into<String>) -> Self {
        Self {
            route,
            state: Some(state.into()),
        }
    }

    pub fn area(&self) -> RouteArea {
        self.route.area()
    }
}

impl From<Route> for Location {
    fn from(route: Route) -> Self {
        Self::new(route)
    }
}
