//! Curated meal suggestions shown on the Meals tab.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MealCategory::Breakfast => "Breakfast",
            MealCategory::Lunch => "Lunch",
            MealCategory::Dinner => "Dinner",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealSuggestion {
    pub id: u32,
    pub name: &'static str,
    pub category: MealCategory,
    pub calories: u32,
    pub prep_minutes: u32,
    /// Serving size as printed on the card ("380g", "300ml").
    pub serving: &'static str,
}

const CATALOG: &[MealSuggestion] = &[
    MealSuggestion {
        id: 1,
        name: "Quinoa Buddha Bowl",
        category: MealCategory::Lunch,
        calories: 450,
        prep_minutes: 25,
        serving: "380g",
    },
    MealSuggestion {
        id: 2,
        name: "Berry Protein Smoothie",
        category: MealCategory::Breakfast,
        calories: 280,
        prep_minutes: 5,
        serving: "300ml",
    },
    MealSuggestion {
        id: 3,
        name: "Grilled Salmon Bowl",
        category: MealCategory::Dinner,
        calories: 520,
        prep_minutes: 30,
        serving: "400g",
    },
];

pub fn meal_suggestions() -> &'static [MealSuggestion] {
    CATALOG
}

pub fn meals_in(category: MealCategory) -> impl Iterator<Item = &'static MealSuggestion> {
    CATALOG.iter().filter(move |meal| meal.category == category)
}
