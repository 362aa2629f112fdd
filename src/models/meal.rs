use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::NutrientTotals;

/// A single logged meal.
///
/// `nutrients` are already multiplied by `portions`. Entries are created once
/// and never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealLogEntry {
    pub food_name: String,
    pub portions: f64,
    pub nutrients: NutrientTotals,
    pub timestamp: NaiveDateTime,
}

impl MealLogEntry {
    pub fn new(
        food_name: String,
        portions: f64,
        nutrients: NutrientTotals,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            food_name,
            portions,
            nutrients,
            timestamp,
        }
    }

    /// Calendar date the entry was logged on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
