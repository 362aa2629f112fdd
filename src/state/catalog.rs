use std::collections::HashMap;

use crate::error::{NutritionError, Result};
use crate::models::FoodItem;

/// Read-only food reference catalog.
///
/// Lookups are case-insensitive. Listing preserves the order foods were
/// loaded in.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<FoodItem>,
    /// Lowercase name -> index into `foods`.
    index: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Build a catalog. A repeated name replaces the earlier entry in place.
    pub fn new(foods: Vec<FoodItem>) -> Self {
        let mut catalog = Self::default();
        for food in foods {
            let key = food.key();
            match catalog.index.get(&key) {
                Some(&i) => catalog.foods[i] = food,
                None => {
                    catalog.index.insert(key, catalog.foods.len());
                    catalog.foods.push(food);
                }
            }
        }
        catalog
    }

    /// Get a food by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&i| &self.foods[i])
    }

    /// Like [`get`](Self::get), but a miss is a `FoodNotFound` error.
    pub fn lookup(&self, name: &str) -> Result<&FoodItem> {
        self.get(name)
            .ok_or_else(|| NutritionError::FoodNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Food names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.foods.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodItem> {
        self.foods.iter()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
