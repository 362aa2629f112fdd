use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// Calories and macronutrient grams.
///
/// Used both as a daily target and as an accumulated intake. `calories` is
/// carried as reported and is not re-derived from the macros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fat_grams: f64,
}

impl NutrientTotals {
    pub fn new(calories: f64, protein_grams: f64, carbs_grams: f64, fat_grams: f64) -> Self {
        Self {
            calories,
            protein_grams,
            carbs_grams,
            fat_grams,
        }
    }

    /// All four fields zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Multiply every field by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein_grams: self.protein_grams * factor,
            carbs_grams: self.carbs_grams * factor,
            fat_grams: self.fat_grams * factor,
        }
    }

    /// Round each field to the nearest integer independently.
    pub fn rounded(&self) -> Self {
        Self {
            calories: self.calories.round(),
            protein_grams: self.protein_grams.round(),
            carbs_grams: self.carbs_grams.round(),
            fat_grams: self.fat_grams.round(),
        }
    }

    /// True when no field is negative.
    pub fn is_valid(&self) -> bool {
        self.calories >= 0.0
            && self.protein_grams >= 0.0
            && self.carbs_grams >= 0.0
            && self.fat_grams >= 0.0
    }
}

impl Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, other: NutrientTotals) -> NutrientTotals {
        NutrientTotals {
            calories: self.calories + other.calories,
            protein_grams: self.protein_grams + other.protein_grams,
            carbs_grams: self.carbs_grams + other.carbs_grams,
            fat_grams: self.fat_grams + other.fat_grams,
        }
    }
}

impl AddAssign for NutrientTotals {
    fn add_assign(&mut self, other: NutrientTotals) {
        *self = *self + other;
    }
}

impl Mul<f64> for NutrientTotals {
    type Output = NutrientTotals;

    fn mul(self, factor: f64) -> NutrientTotals {
        self.scale(factor)
    }
}

impl std::iter::Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientTotals::zero(), |acc, n| acc + n)
    }
}

impl<'a> std::iter::Sum<&'a NutrientTotals> for NutrientTotals {
    fn sum<I: Iterator<Item = &'a NutrientTotals>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_sum() {
        let a = NutrientTotals::new(100.0, 10.0, 20.0, 5.0);
        let b = NutrientTotals::new(50.0, 1.0, 2.0, 0.5);

        let total: NutrientTotals = [a, b].into_iter().sum();
        assert_eq!(total, NutrientTotals::new(150.0, 11.0, 22.0, 5.5));
        assert_eq!(a + b, total);
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: NutrientTotals = std::iter::empty::<NutrientTotals>().sum();
        assert_eq!(total, NutrientTotals::zero());
    }

    #[test]
    fn test_rounded_is_per_field() {
        let n = NutrientTotals::new(2591.0916, 194.3187, 291.4778, 71.9748);
        assert_eq!(n.rounded(), NutrientTotals::new(2591.0, 194.0, 291.0, 72.0));
    }

    #[test]
    fn test_is_valid() {
        assert!(NutrientTotals::zero().is_valid());
        assert!(!NutrientTotals::new(-1.0, 0.0, 0.0, 0.0).is_valid());
    }
}
