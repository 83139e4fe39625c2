use std::io::Write;

use vt_app::App;
use vt_core::meals::{meal_suggestions, meals_in, MealCategory, MealSuggestion};
use vt_core::Route;

use super::open;

pub fn meals(app: &App, out: &mut dyn Write, category: Option<MealCategory>) -> anyhow::Result<()> {
    open(app, Route::Meals)?;

    let selected: Vec<&MealSuggestion> = match category {
        Some(category) => meals_in(category).collect(),
        None => meal_suggestions().iter().collect(),
    };

    writeln!(out, "Healthy Meals")?;
    for meal in selected {
        writeln!(
            out,
            "  {:<24} {:<10} {:>4} kcal  {:>3} min  {}",
            meal.name,
            meal.category.to_string(),
            meal.calories,
            meal.prep_minutes,
            meal.serving
        )?;
    }
    Ok(())
}

pub async fn dashboard(app: &App, out: &mut dyn Write, as_json: bool) -> anyhow::Result<()> {
    open(app, Route::Dashboard)?;

    let summary = app.load_dashboard().execute().await?;

    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }

    if summary.record_count == 0 {
        writeln!(out, "No profiles submitted yet. Run `vitality intake` to get started.")?;
        return Ok(());
    }

    writeln!(out, "Profiles submitted: {}", summary.record_count)?;
    if let Some(weight) = summary.latest_weight_kg {
        writeln!(out, "Latest weight:      {weight} kg")?;
    }
    if let Some(goal) = &summary.latest_goal {
        writeln!(out, "Goal:               {goal}")?;
    }
    if let Some(diet) = &summary.latest_predicted_diet {
        writeln!(out, "Last prediction:    {diet}")?;
    }
    Ok(())
}
