use serde::{Deserialize, Serialize};

use crate::calculator::{DEFAULT_DAILY_GOALS, compute_daily_needs};
use crate::models::{NutrientTotals, Profile};
use crate::state::MealLog;

/// Everything a user has entered: their saved goals and their meal log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub goals: Option<NutrientTotals>,

    #[serde(default)]
    pub profile: Option<Profile>,

    #[serde(rename = "entries", default)]
    pub log: MealLog,
}

impl Session {
    /// Saved goals, or the built-in defaults if none have been calculated.
    pub fn goals_or_default(&self) -> NutrientTotals {
        self.goals.unwrap_or(DEFAULT_DAILY_GOALS)
    }

    pub fn has_saved_goals(&self) -> bool {
        self.goals.is_some()
    }

    /// Compute goals for `profile` and remember both, replacing any saved ones.
    pub fn update_goals(&mut self, profile: Profile) -> NutrientTotals {
        let goals = compute_daily_needs(&profile);
        self.profile = Some(profile);
        self.goals = Some(goals);
        goals
    }
}
