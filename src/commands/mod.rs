//! One function per CLI subcommand. Output goes to the supplied writer;
//! failures the user should see come back as `anyhow` errors.

mod account;
mod browse;
mod intake;

pub use account::{login, logout, register, status};
pub use browse::{dashboard, meals};
pub use intake::intake;

use anyhow::bail;
use vt_app::App;
use vt_core::{Location, Route};

/// Opens `route` through the guard and fails if the user was redirected.
pub(crate) fn open(app: &App, route: Route) -> anyhow::Result<Location> {
    let landed = app.navigate(route);
    if landed.route != route {
        if landed.route == Route::SIGN_IN {
            bail!("You are not signed in. Run `vitality login` first.");
        }
        bail!("Already signed in. Run `vitality logout` to switch accounts.");
    }
    Ok(landed)
}
