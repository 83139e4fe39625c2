//! Vitality command-line client.
//!
//! Bootstrap (config, logging, wiring) and the `vitality` subcommands on top
//! of the `vt-*` workspace crates.

pub mod bootstrap;
pub mod cli;
pub mod commands;

use std::io::Write;

use anyhow::Context;
use tracing::debug;

use vt_app::App;
use vt_platform::DirsAppDirsAdapter;

use crate::cli::{Cli, Commands};

/// Full process run: resolve dirs and config, start logging, wire and
/// dispatch.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application directories")?;
    let (config, source) = bootstrap::resolve_config(cli.config.as_deref(), dirs.config_file())?;

    let logs_dir = bootstrap::data_root(&config, &dirs).join("logs");
    if let Err(err) = bootstrap::init_tracing_subscriber(Some(&logs_dir), cli.verbose) {
        eprintln!("Failed to initialize logging: {err:#}");
    }
    debug!(config = ?source, "Configuration loaded");

    let app = bootstrap::wire_app(&config, &dirs)?;
    app.start();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(&app, &mut out, cli.command).await
}

/// Runs one subcommand against an already started [`App`].
pub async fn dispatch(app: &App, out: &mut dyn Write, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Register {
            username,
            password,
            confirm_password,
        } => {
            commands::register(app, out, &username, &password, confirm_password.as_deref()).await
        }
        Commands::Login { username, password } => {
            commands::login(app, out, &username, &password).await
        }
        Commands::Logout => commands::logout(app, out),
        Commands::Status { json } => commands::status(app, out, json),
        Commands::Intake(args) => commands::intake(app, out, args).await,
        Commands::Meals { category } => commands::meals(app, out, category.map(Into::into)),
        Commands::Dashboard { json } => commands::dashboard(app, out, json).await,
    }
}
