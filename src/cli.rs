use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use vt_core::intake::{ActivityLevel, DietaryPreference, Gender, Goal};
use vt_core::meals::MealCategory;

#[derive(Debug, Parser)]
#[command(name = "vitality")]
#[command(about = "Personalized diet predictions from the Vitality service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to vitality.toml in the app config dir)
    #[arg(long, global = true, env = "VITALITY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an account
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
        /// Repeat the password (defaults to --password)
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Sign in and remember the session
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the current session
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Submit your profile and get a diet prediction
    Intake(IntakeArgs),
    /// List curated meal suggestions
    Meals {
        #[arg(short, long, value_enum)]
        category: Option<CategoryArg>,
    },
    /// Summarize your submitted profiles
    Dashboard {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, clap::Args)]
pub struct IntakeArgs {
    /// Age in years
    #[arg(long, default_value = "")]
    pub age: String,
    /// Height in cm
    #[arg(long, default_value = "")]
    pub height: String,
    /// Weight in kg
    #[arg(long, default_value = "")]
    pub weight: String,
    #[arg(long)]
    pub gender: Option<Gender>,
    /// Sedentary, Light, Moderate, Active or "Very Active"
    #[arg(long)]
    pub activity: Option<ActivityLevel>,
    /// "Weight Loss", Maintenance or "Muscle Gain"
    #[arg(long)]
    pub goal: Option<Goal>,
    /// Balanced, Low-carb, High-protein, Vegetarian, Vegan or Keto
    #[arg(long)]
    pub diet: Option<DietaryPreference>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Breakfast,
    Lunch,
    Dinner,
}

impl From<CategoryArg> for MealCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Breakfast => MealCategory::Breakfast,
            CategoryArg::Lunch => MealCategory::Lunch,
            CategoryArg::Dinner => MealCategory::Dinner,
        }
    }
}
