use std::io::Write;

use anyhow::anyhow;
use tokio_util::sync::CancellationToken;
use tracing::info;

use vt_app::usecases::{DietPlanScreen, IntakeError};
use vt_app::App;
use vt_core::Route;

use super::open;
use crate::cli::IntakeArgs;

/// Fills the wizard from the flags, walks both stages and submits.
///
/// Ctrl-C cancels the request chain.
pub async fn intake(app: &App, out: &mut dyn Write, args: IntakeArgs) -> anyhow::Result<()> {
    open(app, Route::Predict)?;

    let mut screen = app.intake_screen();
    {
        let form = screen.form_mut();
        form.age = args.age;
        form.height_cm = args.height;
        form.weight_kg = args.weight;
        if let Some(gender) = args.gender {
            form.gender = gender;
        }
        if let Some(activity) = args.activity {
            form.activity_level = activity;
        }
        if let Some(goal) = args.goal {
            form.goal = goal;
        }
        if let Some(diet) = args.diet {
            form.dietary_preference = diet;
        }
    }
    screen.advance();

    let cancel = CancellationToken::new();
    let interrupt = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Interrupted, cancelling submission");
                cancel.cancel();
            }
        })
    };

    let outcome = screen.submit_with_cancel(&cancel).await;
    interrupt.abort();

    let landed = match outcome {
        Ok(landed) => landed,
        Err(IntakeError::Cancelled) => return Err(anyhow!("Submission cancelled.")),
        Err(err) => {
            return Err(match screen.error() {
                Some(message) if message != err.to_string() => {
                    anyhow::Error::new(err).context(message.to_string())
                }
                _ => err.into(),
            });
        }
    };

    let plan = DietPlanScreen::from_location(&landed)?;
    writeln!(out, "{}", plan.title())?;
    writeln!(out, "Recommended diet: {}", plan.predicted_diet())?;
    Ok(())
}
