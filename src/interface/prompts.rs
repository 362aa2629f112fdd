use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::calculator::constants::{MAX_PORTIONS, MIN_PORTIONS};
use crate::error::{NutritionError, Result};
use crate::models::FoodItem;
use crate::state::FoodCatalog;

/// Minimum Jaro-Winkler similarity for a fuzzy food match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy suggestions offered at once.
const MAX_SUGGESTIONS: usize = 5;

/// Check a portion count against the range the logger accepts.
pub fn check_portion_range(portions: f64) -> Result<f64> {
    if (MIN_PORTIONS..=MAX_PORTIONS).contains(&portions) {
        Ok(portions)
    } else {
        Err(NutritionError::InvalidInput(format!(
            "portions must be between {} and {}",
            MIN_PORTIONS, MAX_PORTIONS
        )))
    }
}

/// Catalog foods ranked by name similarity to `query`, best first.
pub fn fuzzy_matches<'a>(catalog: &'a FoodCatalog, query: &str) -> Vec<&'a FoodItem> {
    let query = query.trim().to_lowercase();
    let mut candidates: Vec<(&FoodItem, f64)> = catalog
        .iter()
        .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().map(|(f, _)| f).collect()
}

/// Pick one food from the whole catalog.
fn select_from_catalog(catalog: &FoodCatalog) -> Result<Option<String>> {
    let names = catalog.names();
    if names.is_empty() {
        return Ok(None);
    }

    let selection = Select::new()
        .with_prompt("Select food")
        .items(&names)
        .default(0)
        .interact()?;

    Ok(names.get(selection).map(|n| n.to_string()))
}

/// Prompt for a food name, resolving typos by fuzzy matching.
///
/// Pressing Enter on an empty line opens the full catalog list.
pub fn prompt_food(catalog: &FoodCatalog) -> Result<String> {
    if catalog.is_empty() {
        return Err(NutritionError::InvalidInput(
            "the food catalog is empty".to_string(),
        ));
    }

    loop {
        let input: String = Input::new()
            .with_prompt("Food (press Enter to browse)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            if let Some(name) = select_from_catalog(catalog)? {
                return Ok(name);
            }
            continue;
        }

        if let Some(food) = catalog.get(input) {
            return Ok(food.name.clone());
        }

        let candidates = fuzzy_matches(catalog, input);

        if candidates.is_empty() {
            println!("No matching food found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let food = candidates[0];
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", food.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(food.name.clone());
            }
            continue;
        }

        let options: Vec<String> = candidates
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(|f| f.name.clone())
            .collect();

        let mut selection_options = options.clone();
        selection_options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&selection_options)
            .default(0)
            .interact()?;

        if selection < options.len() {
            return Ok(options[selection].clone());
        }
    }
}

/// Prompt for a portion count.
pub fn prompt_portions() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("Portions ({}-{})", MIN_PORTIONS, MAX_PORTIONS))
        .default("1.0".to_string())
        .interact_text()?;

    let portions: f64 = input
        .trim()
        .parse()
        .map_err(|_| NutritionError::InvalidInput("Invalid number".to_string()))?;

    check_portion_range(portions)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
