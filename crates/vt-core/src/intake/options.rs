//! Closed option sets offered by the intake pickers.
//!
//! Each variant serializes to the exact label the nutrition service stores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} option: {value:?}")]
pub struct UnknownOptionError {
    pub kind: &'static str,
    pub value: String,
}

/// Implements label mapping, `Display` and lenient `FromStr` for an option enum.
///
/// Parsing accepts the API label case-insensitively, with spaces, dashes and
/// underscores treated as equivalent ("very-active" == "Very Active").
macro_rules! labeled_options {
    ($name:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownOptionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|option| normalize(option.label()) == wanted)
                    .ok_or_else(|| UnknownOptionError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

labeled_options!(Gender, "gender", {
    Male => "Male",
    Female => "Female",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    #[serde(rename = "Very Active")]
    VeryActive,
}

labeled_options!(ActivityLevel, "activity level", {
    Sedentary => "Sedentary",
    Light => "Light",
    Moderate => "Moderate",
    Active => "Active",
    VeryActive => "Very Active",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    #[default]
    Maintenance,
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
}

labeled_options!(Goal, "goal", {
    WeightLoss => "Weight Loss",
    Maintenance => "Maintenance",
    MuscleGain => "Muscle Gain",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietaryPreference {
    #[default]
    Balanced,
    #[serde(rename = "Low-carb")]
    LowCarb,
    #[serde(rename = "High-protein")]
    HighProtein,
    Vegetarian,
    Vegan,
    Keto,
}

labeled_options!(DietaryPreference, "dietary preference", {
    Balanced => "Balanced",
    LowCarb => "Low-carb",
    HighProtein => "High-protein",
    Vegetarian => "Vegetarian",
    Vegan => "Vegan",
    Keto => "Keto",
});
