use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::FoodItem;
use crate::state::{FoodCatalog, Session};

/// Load the food catalog from a CSV file.
///
/// Expects the header `food_name,serving_size,calories,protein,carbs,fat`.
/// Rows with negative values are skipped with a warning.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

    let mut foods = Vec::new();
    for record in reader.deserialize() {
        let food: FoodItem = record?;
        if !food.is_valid() {
            tracing::warn!(food = %food.name, "skipping catalog row with negative values");
            continue;
        }
        foods.push(food);
    }

    let catalog = FoodCatalog::new(foods);
    tracing::info!(path = %path.display(), foods = catalog.len(), "loaded food catalog");
    Ok(catalog)
}

/// Load a session from a JSON file. A missing file is an empty session.
pub fn load_session<P: AsRef<Path>>(path: P) -> Result<Session> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no session file, starting empty");
        return Ok(Session::default());
    }

    let content = fs::read_to_string(path)?;
    let session: Session = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), entries = session.log.len(), "loaded session");
    Ok(session)
}

/// Save a session to a JSON file.
pub fn save_session<P: AsRef<Path>>(path: P, session: &Session) -> Result<()> {
    let json = serde_json::to_string_pretty(session)?;
    fs::write(path.as_ref(), json)?;
    tracing::debug!(path = %path.as_ref().display(), entries = session.log.len(), "saved session");
    Ok(())
}
