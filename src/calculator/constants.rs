use std::ops::RangeInclusive;

use crate::models::NutrientTotals;

// ─────────────────────────────────────────────────────────────────────────────
// Revised Harris-Benedict coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const MALE_BMR_BASE: f64 = 88.362;
pub const MALE_BMR_PER_KG: f64 = 13.397;
pub const MALE_BMR_PER_CM: f64 = 4.799;
pub const MALE_BMR_PER_YEAR: f64 = 5.677;

pub const FEMALE_BMR_BASE: f64 = 447.593;
pub const FEMALE_BMR_PER_KG: f64 = 9.247;
pub const FEMALE_BMR_PER_CM: f64 = 3.098;
pub const FEMALE_BMR_PER_YEAR: f64 = 4.330;

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers
// ─────────────────────────────────────────────────────────────────────────────

pub const SEDENTARY_MULT: f64 = 1.2;
pub const LIGHT_MULT: f64 = 1.375;
pub const MODERATE_MULT: f64 = 1.55;
pub const ACTIVE_MULT: f64 = 1.725;
pub const VERY_ACTIVE_MULT: f64 = 1.9;

/// Multiplier used when the activity level label is not recognised.
pub const DEFAULT_ACTIVITY_MULT: f64 = SEDENTARY_MULT;

// ─────────────────────────────────────────────────────────────────────────────
// Macro split and Atwater factors
// ─────────────────────────────────────────────────────────────────────────────

/// Share of daily calories from each macronutrient. Sums to 1.0.
pub const PROTEIN_CALORIE_SHARE: f64 = 0.30;
pub const CARBS_CALORIE_SHARE: f64 = 0.45;
pub const FAT_CALORIE_SHARE: f64 = 0.25;

/// Calories per gram.
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Input ranges and defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=200.0;
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 100.0..=250.0;
pub const AGE_RANGE: RangeInclusive<u32> = 15..=100;

pub const MIN_PORTIONS: f64 = 0.25;
pub const MAX_PORTIONS: f64 = 10.0;

/// Length of the progress trend in days.
pub const TREND_WINDOW_DAYS: u32 = 7;

/// Longest trend the CLI will build, one leap year.
pub const MAX_TREND_DAYS: u32 = 366;

/// Goals shown before the user has calculated their own.
pub const DEFAULT_DAILY_GOALS: NutrientTotals = NutrientTotals {
    calories: 2000.0,
    protein_grams: 150.0,
    carbs_grams: 225.0,
    fat_grams: 55.0,
};
