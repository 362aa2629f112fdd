use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::calculator::constants::{CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM};
use crate::models::{FoodItem, MealLogEntry, NutrientTotals};

/// Totals for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub totals: NutrientTotals,
}

/// Sum the nutrients of every entry accepted by `predicate`.
///
/// Returns zero totals when nothing matches. The result does not depend on
/// entry order.
pub fn aggregate<'a, I, P>(entries: I, mut predicate: P) -> NutrientTotals
where
    I: IntoIterator<Item = &'a MealLogEntry>,
    P: FnMut(&MealLogEntry) -> bool,
{
    entries
        .into_iter()
        .filter(|entry| predicate(*entry))
        .map(|entry| entry.nutrients)
        .sum()
}

/// Nutrients for `portions` servings of a catalog food. No rounding.
pub fn scale_to_portions(food: &FoodItem, portions: f64) -> NutrientTotals {
    food.per_serving().scale(portions)
}

/// Predicate: entry was logged on `date`.
pub fn on_date(date: NaiveDate) -> impl Fn(&MealLogEntry) -> bool {
    move |entry: &MealLogEntry| entry.date() == date
}

/// Predicate: entry was logged between `start` and `end`, both inclusive.
pub fn between(start: NaiveDate, end: NaiveDate) -> impl Fn(&MealLogEntry) -> bool {
    move |entry: &MealLogEntry| {
        let date = entry.date();
        date >= start && date <= end
    }
}

/// Totals for a single calendar day.
pub fn daily_totals(entries: &[MealLogEntry], date: NaiveDate) -> NutrientTotals {
    aggregate(entries, on_date(date))
}

/// One `DailyTotals` per day for the `days` days ending at `end`, oldest first.
///
/// Days with nothing logged are present with zero totals.
pub fn trailing_window(entries: &[MealLogEntry], end: NaiveDate, days: u32) -> Vec<DailyTotals> {
    (0..days)
        .rev()
        .filter_map(|offset| end.checked_sub_days(Days::new(offset as u64)))
        .map(|date| DailyTotals {
            date,
            totals: daily_totals(entries, date),
        })
        .collect()
}

/// Percent of `goal` reached by `actual`. Non-positive goals give 0.
pub fn percent_of(actual: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        actual / goal * 100.0
    } else {
        0.0
    }
}

/// Intake as a percentage of each goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl GoalProgress {
    pub fn new(actual: &NutrientTotals, goals: &NutrientTotals) -> Self {
        Self {
            calories: percent_of(actual.calories, goals.calories),
            protein: percent_of(actual.protein_grams, goals.protein_grams),
            carbs: percent_of(actual.carbs_grams, goals.carbs_grams),
            fat: percent_of(actual.fat_grams, goals.fat_grams),
        }
    }
}

/// Calories contributed by each macronutrient (Atwater factors).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroCalories {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroCalories {
    pub fn total(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }

    /// Share of each macro in percent, as (protein, carbs, fat).
    pub fn shares(&self) -> (f64, f64, f64) {
        let total = self.total();
        (
            percent_of(self.protein, total),
            percent_of(self.carbs, total),
            percent_of(self.fat, total),
        )
    }
}

pub fn macro_calorie_split(totals: &NutrientTotals) -> MacroCalories {
    MacroCalories {
        protein: totals.protein_grams * PROTEIN_KCAL_PER_GRAM,
        carbs: totals.carbs_grams * CARBS_KCAL_PER_GRAM,
        fat: totals.fat_grams * FAT_KCAL_PER_GRAM,
    }
}
