use chrono::NaiveDate;

use crate::calculator::{DailyTotals, GoalProgress, macro_calorie_split};
use crate::models::{MealLogEntry, NutrientTotals, Profile};
use crate::state::FoodCatalog;

/// Width of the progress bars in characters.
const BAR_WIDTH: usize = 20;

/// Render a percentage as a fixed-width bar, clamped to 100%.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let fraction = if percent.is_finite() {
        (percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Display calculated daily goals.
pub fn display_goals(goals: &NutrientTotals, profile: &Profile) {
    println!();
    println!("=== Daily Goals ===");
    println!();
    println!(
        "Profile: {} kg, {} cm, {} y, {}, {}",
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex.as_str(),
        profile.activity_level.as_str()
    );
    println!();
    println!("  Calories: {:>6.0} kcal", goals.calories);
    println!("  Protein:  {:>6.0} g", goals.protein_grams);
    println!("  Carbs:    {:>6.0} g", goals.carbs_grams);
    println!("  Fat:      {:>6.0} g", goals.fat_grams);
    println!();
}

/// Display the daily dashboard: intake against goals and macro distribution.
pub fn display_dashboard(
    date: NaiveDate,
    totals: &NutrientTotals,
    goals: &NutrientTotals,
    entries: &[&MealLogEntry],
) {
    let progress = GoalProgress::new(totals, goals);

    println!();
    println!("=== Daily Nutrition Dashboard ({}) ===", date);
    println!();

    let rows = [
        ("Calories", totals.calories, goals.calories, progress.calories),
        ("Protein (g)", totals.protein_grams, goals.protein_grams, progress.protein),
        ("Carbs (g)", totals.carbs_grams, goals.carbs_grams, progress.carbs),
        ("Fat (g)", totals.fat_grams, goals.fat_grams, progress.fat),
    ];

    for (label, actual, goal, percent) in rows {
        println!(
            "  {:<12} {:>6.0} / {:<6.0} {} {:>5.1}%",
            label,
            actual.trunc(),
            goal,
            progress_bar(percent, BAR_WIDTH),
            percent
        );
    }

    let split = macro_calorie_split(totals);
    println!();
    println!("--- Macronutrient Distribution ---");
    if split.total() > 0.0 {
        let (protein, carbs, fat) = split.shares();
        println!("  Protein: {:>6.0} kcal ({:.1}%)", split.protein, protein);
        println!("  Carbs:   {:>6.0} kcal ({:.1}%)", split.carbs, carbs);
        println!("  Fat:     {:>6.0} kcal ({:.1}%)", split.fat, fat);
    } else {
        println!("  Nothing logged yet.");
    }

    if !entries.is_empty() {
        println!();
        println!("--- Meals ---");
        for entry in entries {
            display_entry(entry);
        }
    }
    println!();
}

/// Display one logged meal on a single line.
pub fn display_entry(entry: &MealLogEntry) {
    println!(
        "  {} {} x{} - {:.0} cal, P:{:.1} C:{:.1} F:{:.1}",
        entry.timestamp.format("%H:%M"),
        entry.food_name,
        entry.portions,
        entry.nutrients.calories,
        entry.nutrients.protein_grams,
        entry.nutrients.carbs_grams,
        entry.nutrients.fat_grams
    );
}

/// Display the calorie and macro trend, one row per day.
pub fn display_trend(trend: &[DailyTotals]) {
    if trend.is_empty() {
        println!("No days to show.");
        return;
    }

    let peak = trend
        .iter()
        .map(|d| d.totals.calories)
        .fold(0.0, f64::max);

    println!();
    println!("=== Progress ({} days) ===", trend.len());
    println!();
    println!(
        "  {:<10}  {:>7}  {:>7}  {:>7}  {:>7}",
        "Date", "kcal", "P (g)", "C (g)", "F (g)"
    );

    for day in trend {
        let relative = if peak > 0.0 {
            day.totals.calories / peak * 100.0
        } else {
            0.0
        };
        println!(
            "  {:<10}  {:>7.0}  {:>7.1}  {:>7.1}  {:>7.1}  {}",
            day.date.to_string(),
            day.totals.calories,
            day.totals.protein_grams,
            day.totals.carbs_grams,
            day.totals.fat_grams,
            progress_bar(relative, BAR_WIDTH)
        );
    }

    let total: NutrientTotals = trend.iter().map(|d| &d.totals).sum();
    let days = trend.len() as f64;
    println!();
    println!(
        "  Average: {:.0} kcal, P:{:.1} C:{:.1} F:{:.1}",
        total.calories / days,
        total.protein_grams / days,
        total.carbs_grams / days,
        total.fat_grams / days
    );
    println!();
}

/// Display the food catalog.
pub fn display_food_list(catalog: &FoodCatalog) {
    if catalog.is_empty() {
        println!("Food catalog: (none)");
        return;
    }

    println!();
    println!("=== Food Catalog ({} items) ===", catalog.len());
    println!();

    let width = catalog.iter().map(|f| f.name.len()).max().unwrap_or(10);
    for food in catalog.iter() {
        println!(
            "  {:<width$}  {:>6} g  {:>5.0} cal  P:{:.1} C:{:.1} F:{:.1}",
            food.name,
            food.serving_size,
            food.calories_per_serving,
            food.protein_per_serving,
            food.carbs_per_serving,
            food.fat_per_serving,
            width = width
        );
    }

    println!();
}
