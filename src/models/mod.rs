pub mod food;
pub mod meal;
pub mod nutrients;
pub mod profile;

pub use food::FoodItem;
pub use meal::MealLogEntry;
pub use nutrients::NutrientTotals;
pub use profile::{ActivityLevel, Profile, Sex};
