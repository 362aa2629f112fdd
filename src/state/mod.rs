mod catalog;
mod log;
mod persistence;
mod session;

pub use catalog::FoodCatalog;
pub use log::MealLog;
pub use persistence::{load_catalog, load_session, save_session};
pub use session::Session;
