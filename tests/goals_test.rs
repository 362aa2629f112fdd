#[macro_use]
extern crate assert_float_eq;

use nutrition_tracker_rs::calculator::{
    SEDENTARY_MULT, activity_multiplier_for_label, basal_metabolic_rate, compute_daily_needs,
    daily_calories,
};
use nutrition_tracker_rs::models::{ActivityLevel, NutrientTotals, Profile, Sex};

fn make_profile(weight: f64, height: f64, age: u32, sex: Sex, activity: ActivityLevel) -> Profile {
    Profile {
        weight_kg: weight,
        height_cm: height,
        age_years: age,
        sex,
        activity_level: activity,
    }
}

#[test]
fn test_reference_male_moderate() {
    let profile = make_profile(70.0, 170.0, 30, Sex::Male, ActivityLevel::Moderate);

    assert_float_absolute_eq!(basal_metabolic_rate(&profile), 1671.672, 1e-6);
    assert_float_absolute_eq!(daily_calories(&profile), 2591.0916, 1e-6);
    assert_eq!(
        compute_daily_needs(&profile),
        NutrientTotals::new(2591.0, 194.0, 291.0, 72.0)
    );
}

#[test]
fn test_reference_female_sedentary() {
    let profile = make_profile(60.0, 165.0, 25, Sex::Female, ActivityLevel::Sedentary);
    assert_eq!(
        compute_daily_needs(&profile),
        NutrientTotals::new(1686.0, 126.0, 190.0, 47.0)
    );
}

#[test]
fn test_very_active_male() {
    let profile = make_profile(90.0, 185.0, 45, Sex::Male, ActivityLevel::VeryActive);
    assert_eq!(
        compute_daily_needs(&profile),
        NutrientTotals::new(3660.0, 275.0, 412.0, 102.0)
    );
}

#[test]
fn test_calories_positive_across_valid_profiles() {
    for sex in [Sex::Male, Sex::Female] {
        for activity in ActivityLevel::ALL {
            for (weight, height, age) in [(30.0, 100.0, 15), (70.0, 170.0, 40), (200.0, 250.0, 100)]
            {
                let needs = compute_daily_needs(&make_profile(weight, height, age, sex, activity));
                assert!(needs.calories > 0.0, "{:?} {:?} {}", sex, activity, weight);
                assert!(needs.is_valid());
            }
        }
    }
}

#[test]
fn test_macro_calories_match_total_within_rounding() {
    // Each field is rounded on its own, so the Atwater sum can drift by at
    // most 0.5 * (4 + 4 + 9) from the unrounded total, plus 0.5 on calories.
    let tolerance = 0.5 * (4.0 + 4.0 + 9.0) + 0.5;

    for sex in [Sex::Male, Sex::Female] {
        for activity in ActivityLevel::ALL {
            for weight in [45.0, 62.5, 80.0, 115.0] {
                for age in [18, 35, 67] {
                    let needs =
                        compute_daily_needs(&make_profile(weight, 172.0, age, sex, activity));
                    let from_macros = 4.0 * needs.protein_grams
                        + 4.0 * needs.carbs_grams
                        + 9.0 * needs.fat_grams;
                    assert!(
                        (from_macros - needs.calories).abs() <= tolerance,
                        "macros {} vs calories {}",
                        from_macros,
                        needs.calories
                    );
                }
            }
        }
    }
}

#[test]
fn test_unknown_activity_matches_sedentary() {
    let unknown = ActivityLevel::from_label("unknown");
    let fallback = compute_daily_needs(&make_profile(70.0, 170.0, 30, Sex::Male, unknown));
    let sedentary = compute_daily_needs(&make_profile(
        70.0,
        170.0,
        30,
        Sex::Male,
        ActivityLevel::Sedentary,
    ));

    assert_eq!(fallback, sedentary);
    assert_eq!(activity_multiplier_for_label("unknown"), SEDENTARY_MULT);
}

#[test]
fn test_out_of_range_inputs_still_produce_values() {
    let profile = make_profile(-10.0, 0.0, 0, Sex::Male, ActivityLevel::Active);
    let needs = compute_daily_needs(&profile);
    assert!(needs.calories.is_finite());
    assert!(profile.validate().is_err());
}
