use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::calculator::constants::{AGE_RANGE, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};
use crate::error::{NutritionError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Self-reported activity level used to scale BMR.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Parse a free-text label, case-insensitively.
    ///
    /// Spaces and dashes are treated as underscores, so "Very Active" maps to
    /// `VeryActive`. Anything unrecognised falls back to `Sedentary`.
    pub fn from_label(s: &str) -> Self {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "very_active" => ActivityLevel::VeryActive,
            _ => {
                tracing::warn!(label = s, "unknown activity level, using sedentary");
                ActivityLevel::Sedentary
            }
        }
    }
}

/// Biometric inputs for goal calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: Sex,
    /// Profiles saved without an activity level load as sedentary.
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

impl Profile {
    /// Check the inputs against the ranges the goal formula was fitted for.
    ///
    /// The calculator itself accepts anything; this is for callers taking
    /// user input.
    pub fn validate(&self) -> Result<()> {
        check_range("weight (kg)", self.weight_kg, &WEIGHT_RANGE_KG)?;
        check_range("height (cm)", self.height_cm, &HEIGHT_RANGE_CM)?;
        if !AGE_RANGE.contains(&self.age_years) {
            return Err(NutritionError::InvalidInput(format!(
                "age {} is outside {}..={}",
                self.age_years,
                AGE_RANGE.start(),
                AGE_RANGE.end()
            )));
        }
        Ok(())
    }
}

fn check_range(field: &str, value: f64, range: &RangeInclusive<f64>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(NutritionError::InvalidInput(format!(
            "{} {} is outside {}..={}",
            field,
            value,
            range.start(),
            range.end()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            weight_kg: 70.0,
            height_cm: 170.0,
            age_years: 30,
            sex: Sex::Male,
            activity_level: ActivityLevel::Moderate,
        }
    }

    #[test]
    fn test_activity_from_label_variants() {
        assert_eq!(ActivityLevel::from_label("Moderate"), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::from_label("very active"), ActivityLevel::VeryActive);
        assert_eq!(ActivityLevel::from_label("Very-Active"), ActivityLevel::VeryActive);
        assert_eq!(ActivityLevel::from_label("very_active"), ActivityLevel::VeryActive);
    }

    #[test]
    fn test_activity_unknown_falls_back() {
        assert_eq!(ActivityLevel::from_label("unknown"), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::from_label(""), ActivityLevel::Sedentary);
    }

    #[test]
    fn test_activity_label_roundtrip() {
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::from_label(level.as_str()), level);
        }
    }

    #[test]
    fn test_profile_without_activity_is_sedentary() {
        let json = r#"{"weight_kg": 60.0, "height_cm": 165.0, "age_years": 25, "sex": "female"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.activity_level, ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::default(), ActivityLevel::Sedentary);
    }

    #[test]
    fn test_sex_from_label() {
        assert_eq!(Sex::from_label("Male"), Some(Sex::Male));
        assert_eq!(Sex::from_label("F"), Some(Sex::Female));
        assert_eq!(Sex::from_label("other"), None);
    }

    #[test]
    fn test_validate_ranges() {
        assert!(sample_profile().validate().is_ok());

        let mut light = sample_profile();
        light.weight_kg = 20.0;
        assert!(light.validate().is_err());

        let mut young = sample_profile();
        young.age_years = 14;
        assert!(young.validate().is_err());

        let mut tall = sample_profile();
        tall.height_cm = 250.0;
        assert!(tall.validate().is_ok());
    }
}
