use serde::{Deserialize, Serialize};

use super::NutrientTotals;

/// A row of the food reference catalog.
///
/// Column names follow the catalog CSV header:
/// `food_name,serving_size,calories,protein,carbs,fat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "food_name")]
    pub name: String,

    pub serving_size: f64,

    #[serde(rename = "calories")]
    pub calories_per_serving: f64,

    #[serde(rename = "protein")]
    pub protein_per_serving: f64,

    #[serde(rename = "carbs")]
    pub carbs_per_serving: f64,

    #[serde(rename = "fat")]
    pub fat_per_serving: f64,
}

impl FoodItem {
    /// Nutrients of a single serving.
    pub fn per_serving(&self) -> NutrientTotals {
        NutrientTotals::new(
            self.calories_per_serving,
            self.protein_per_serving,
            self.carbs_per_serving,
            self.fat_per_serving,
        )
    }

    /// Basic validation: non-negative values.
    pub fn is_valid(&self) -> bool {
        self.serving_size >= 0.0 && self.per_serving().is_valid()
    }

    /// Canonical key for lookups (lowercase, trimmed name).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodItem {}

impl std::hash::Hash for FoodItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
