pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{NutritionError, Result};
pub use models::{ActivityLevel, FoodItem, MealLogEntry, NutrientTotals, Profile, Sex};
