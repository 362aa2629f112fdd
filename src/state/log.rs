use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calculator::{self, DailyTotals};
use crate::error::{NutritionError, Result};
use crate::models::{MealLogEntry, NutrientTotals};
use crate::state::FoodCatalog;

/// Append-only log of meals, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealLog {
    entries: Vec<MealLogEntry>,
}

impl MealLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap entries that are already in log order.
    pub fn from_entries(entries: Vec<MealLogEntry>) -> Self {
        Self { entries }
    }

    /// Append an entry and return a reference to it.
    pub fn append(&mut self, entry: MealLogEntry) -> &MealLogEntry {
        tracing::debug!(
            food = %entry.food_name,
            portions = entry.portions,
            calories = entry.nutrients.calories,
            "meal logged"
        );
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Log `portions` servings of a catalog food.
    pub fn log_food(
        &mut self,
        catalog: &FoodCatalog,
        food_name: &str,
        portions: f64,
        timestamp: NaiveDateTime,
    ) -> Result<&MealLogEntry> {
        check_portions(portions)?;
        let food = catalog.lookup(food_name)?;
        let nutrients = calculator::scale_to_portions(food, portions);
        Ok(self.append(MealLogEntry::new(
            food.name.clone(),
            portions,
            nutrients,
            timestamp,
        )))
    }

    /// Log a food that is not in the catalog, from its per-serving values.
    pub fn log_custom(
        &mut self,
        food_name: &str,
        portions: f64,
        per_serving: NutrientTotals,
        timestamp: NaiveDateTime,
    ) -> Result<&MealLogEntry> {
        check_portions(portions)?;
        if !per_serving.is_valid() {
            return Err(NutritionError::InvalidInput(format!(
                "nutrient values for {} must not be negative",
                food_name
            )));
        }
        Ok(self.append(MealLogEntry::new(
            food_name.to_string(),
            portions,
            per_serving.scale(portions),
            timestamp,
        )))
    }

    pub fn entries(&self) -> &[MealLogEntry] {
        &self.entries
    }

    /// Entries logged on `date`, in log order.
    pub fn entries_on(&self, date: NaiveDate) -> Vec<&MealLogEntry> {
        let on_date = calculator::on_date(date);
        self.entries.iter().filter(|e| on_date(*e)).collect()
    }

    pub fn daily_totals(&self, date: NaiveDate) -> NutrientTotals {
        calculator::daily_totals(&self.entries, date)
    }

    pub fn trend(&self, end: NaiveDate, days: u32) -> Vec<DailyTotals> {
        calculator::trailing_window(&self.entries, end, days)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn check_portions(portions: f64) -> Result<()> {
    if portions.is_finite() && portions > 0.0 {
        Ok(())
    } else {
        Err(NutritionError::InvalidInput(format!(
            "portions must be positive, got {}",
            portions
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodItem;

    fn catalog() -> FoodCatalog {
        FoodCatalog::new(vec![FoodItem {
            name: "Rice".to_string(),
            serving_size: 150.0,
            calories_per_serving: 200.0,
            protein_per_serving: 4.0,
            carbs_per_serving: 45.0,
            fat_per_serving: 0.5,
        }])
    }

    fn noon(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_log_food_scales_and_appends() {
        let mut log = MealLog::new();
        let entry = log.log_food(&catalog(), "rice", 1.5, noon(1)).unwrap().clone();

        assert_eq!(entry.food_name, "Rice");
        assert_eq!(entry.nutrients, NutrientTotals::new(300.0, 6.0, 67.5, 0.75));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_log_food_unknown() {
        let mut log = MealLog::new();
        let result = log.log_food(&catalog(), "Sushi", 1.0, noon(1));
        assert!(matches!(result, Err(NutritionError::FoodNotFound(_))));
        assert!(log.is_empty());
    }

    #[test]
    fn test_log_rejects_non_positive_portions() {
        let mut log = MealLog::new();
        assert!(log.log_food(&catalog(), "Rice", 0.0, noon(1)).is_err());
        assert!(
            log.log_custom("Photo", -1.0, NutrientTotals::zero(), noon(1))
                .is_err()
        );
        assert!(log.is_empty());
    }

    #[test]
    fn test_log_custom_keeps_reported_calories() {
        let mut log = MealLog::new();
        // Calories deliberately inconsistent with the macros.
        let per_100g = NutrientTotals::new(52.0, 0.3, 14.0, 0.2);
        log.log_custom("apple", 2.0, per_100g, noon(1)).unwrap();
        assert_eq!(log.entries()[0].nutrients.calories, 104.0);
    }

    #[test]
    fn test_append_order_and_daily_totals() {
        let mut log = MealLog::new();
        log.log_food(&catalog(), "Rice", 1.0, noon(1)).unwrap();
        log.log_food(&catalog(), "Rice", 2.0, noon(2)).unwrap();
        log.log_food(&catalog(), "Rice", 1.0, noon(2)).unwrap();

        assert_eq!(log.entries()[0].portions, 1.0);
        assert_eq!(log.entries()[1].portions, 2.0);

        let day2 = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        assert_eq!(log.daily_totals(day2).calories, 600.0);
        assert_eq!(log.entries_on(day2).len(), 2);
        assert_eq!(log.trend(day2, 7).len(), 7);
    }

    #[test]
    fn test_from_entries_keeps_order_and_appends() {
        let rice = |portions: f64, day: u32| {
            let nutrients = NutrientTotals::new(200.0, 4.0, 45.0, 0.5).scale(portions);
            MealLogEntry::new("Rice".to_string(), portions, nutrients, noon(day))
        };
        let existing = vec![rice(1.0, 3), rice(0.5, 1)];
        let mut log = MealLog::from_entries(existing.clone());
        assert_eq!(log.entries(), existing.as_slice());

        log.log_food(&catalog(), "Rice", 2.0, noon(3)).unwrap();
        assert_eq!(log.len(), 3);
        assert_eq!(log.entries()[2].portions, 2.0);

        let day3 = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        assert_eq!(log.daily_totals(day3).calories, 600.0);
    }
}
