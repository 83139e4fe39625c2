use std::io::Write;

use anyhow::Context;
use serde_json::json;

use vt_app::usecases::RegistrationForm;
use vt_app::App;
use vt_core::Route;

use super::open;

pub async fn register(
    app: &App,
    out: &mut dyn Write,
    username: &str,
    password: &str,
    confirm_password: Option<&str>,
) -> anyhow::Result<()> {
    open(app, Route::Register)?;

    let form = RegistrationForm {
        username: username.to_string(),
        password: password.to_string(),
        confirm_password: confirm_password.unwrap_or(password).to_string(),
    };
    app.register().execute(&form).await?;

    writeln!(out, "Account created. Sign in with `vitality login`.")?;
    Ok(())
}

pub async fn login(
    app: &App,
    out: &mut dyn Write,
    username: &str,
    password: &str,
) -> anyhow::Result<()> {
    open(app, Route::Login)?;

    let session = app.sign_in().execute(username, password).await?;
    let user_id = session
        .user_id()
        .context("Signed in without a user id")?;

    writeln!(out, "Signed in as user {user_id}.")?;
    Ok(())
}

pub fn logout(app: &App, out: &mut dyn Write) -> anyhow::Result<()> {
    if !app.session().session().is_authenticated() {
        writeln!(out, "Not signed in.")?;
        return Ok(());
    }
    app.sign_out()
        .execute()
        .context("Signed out, but the stored credentials could not be removed")?;
    writeln!(out, "Signed out.")?;
    Ok(())
}

pub fn status(app: &App, out: &mut dyn Write, as_json: bool) -> anyhow::Result<()> {
    let session = app.session().session();
    let location = app.router().current();

    if as_json {
        let value = json!({
            "authenticated": session.is_authenticated(),
            "user_id": session.user_id(),
            "location": location.route,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    match session.user_id() {
        Some(user_id) => writeln!(out, "Signed in as user {user_id}.")?,
        None => writeln!(out, "Not signed in.")?,
    }
    writeln!(out, "Location: {}", location.route)?;
    Ok(())
}
