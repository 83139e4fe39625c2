use std::process::ExitCode;

use clap::Parser;
use vitality::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match vitality::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "Command failed");
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
