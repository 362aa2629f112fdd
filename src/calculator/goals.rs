use crate::calculator::constants::*;
use crate::models::{ActivityLevel, NutrientTotals, Profile, Sex};

/// Basal metabolic rate in kcal/day (revised Harris-Benedict).
pub fn basal_metabolic_rate(profile: &Profile) -> f64 {
    let weight = profile.weight_kg;
    let height = profile.height_cm;
    let age = profile.age_years as f64;

    match profile.sex {
        Sex::Male => {
            MALE_BMR_BASE + MALE_BMR_PER_KG * weight + MALE_BMR_PER_CM * height
                - MALE_BMR_PER_YEAR * age
        }
        Sex::Female => {
            FEMALE_BMR_BASE + FEMALE_BMR_PER_KG * weight + FEMALE_BMR_PER_CM * height
                - FEMALE_BMR_PER_YEAR * age
        }
    }
}

/// BMR multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => SEDENTARY_MULT,
        ActivityLevel::Light => LIGHT_MULT,
        ActivityLevel::Moderate => MODERATE_MULT,
        ActivityLevel::Active => ACTIVE_MULT,
        ActivityLevel::VeryActive => VERY_ACTIVE_MULT,
    }
}

/// Multiplier for a free-text activity label.
///
/// Unrecognised labels get `DEFAULT_ACTIVITY_MULT`.
pub fn activity_multiplier_for_label(label: &str) -> f64 {
    activity_multiplier(ActivityLevel::from_label(label))
}

/// Total daily energy expenditure, unrounded.
pub fn daily_calories(profile: &Profile) -> f64 {
    basal_metabolic_rate(profile) * activity_multiplier(profile.activity_level)
}

/// Daily calorie and macro targets for a profile.
///
/// Protein, carbs, and fat take 30/45/25 % of calories. Every field is rounded
/// independently after the split; nothing upstream is rounded.
///
/// Inputs are assumed to be in the ranges checked by [`Profile::validate`],
/// but any finite input produces a value.
pub fn compute_daily_needs(profile: &Profile) -> NutrientTotals {
    let calories = daily_calories(profile);

    let needs = NutrientTotals {
        calories,
        protein_grams: calories * PROTEIN_CALORIE_SHARE / PROTEIN_KCAL_PER_GRAM,
        carbs_grams: calories * CARBS_CALORIE_SHARE / CARBS_KCAL_PER_GRAM,
        fat_grams: calories * FAT_CALORIE_SHARE / FAT_KCAL_PER_GRAM,
    }
    .rounded();

    tracing::debug!(
        sex = profile.sex.as_str(),
        activity = profile.activity_level.as_str(),
        calories = needs.calories,
        "computed daily needs"
    );

    needs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(sex: Sex, activity_level: ActivityLevel) -> Profile {
        Profile {
            weight_kg: 70.0,
            height_cm: 170.0,
            age_years: 30,
            sex,
            activity_level,
        }
    }

    #[test]
    fn test_bmr_male() {
        let bmr = basal_metabolic_rate(&profile(Sex::Male, ActivityLevel::Sedentary));
        assert!((bmr - 1671.672).abs() < 1e-6);
    }

    #[test]
    fn test_bmr_female() {
        // 447.593 + 9.247*70 + 3.098*170 - 4.330*30
        let bmr = basal_metabolic_rate(&profile(Sex::Female, ActivityLevel::Sedentary));
        assert!((bmr - 1491.643).abs() < 1e-6);
    }

    #[test]
    fn test_activity_multipliers() {
        assert_eq!(activity_multiplier(ActivityLevel::Sedentary), 1.2);
        assert_eq!(activity_multiplier(ActivityLevel::Light), 1.375);
        assert_eq!(activity_multiplier(ActivityLevel::Moderate), 1.55);
        assert_eq!(activity_multiplier(ActivityLevel::Active), 1.725);
        assert_eq!(activity_multiplier(ActivityLevel::VeryActive), 1.9);
    }

    #[test]
    fn test_label_fallback_multiplier() {
        assert_eq!(activity_multiplier_for_label("unknown"), DEFAULT_ACTIVITY_MULT);
        assert_eq!(activity_multiplier_for_label("Very Active"), VERY_ACTIVE_MULT);
    }

    #[test]
    fn test_daily_needs_reference_profile() {
        let needs = compute_daily_needs(&profile(Sex::Male, ActivityLevel::Moderate));
        assert_eq!(needs, NutrientTotals::new(2591.0, 194.0, 291.0, 72.0));
    }

    #[test]
    fn test_zero_inputs_do_not_panic() {
        let p = Profile {
            weight_kg: 0.0,
            height_cm: 0.0,
            age_years: 0,
            sex: Sex::Female,
            activity_level: ActivityLevel::Light,
        };
        let needs = compute_daily_needs(&p);
        assert!(needs.calories.is_finite());
        assert!(needs.calories > 0.0);
    }
}
