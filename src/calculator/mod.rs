pub mod aggregation;
pub mod constants;
pub mod goals;

pub use aggregation::{
    DailyTotals, GoalProgress, MacroCalories, aggregate, between, daily_totals,
    macro_calorie_split, on_date, percent_of, scale_to_portions, trailing_window,
};
pub use constants::*;
pub use goals::{
    activity_multiplier, activity_multiplier_for_label, basal_metabolic_rate, compute_daily_needs,
    daily_calories,
};
