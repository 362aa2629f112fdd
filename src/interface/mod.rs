pub mod prompts;
pub mod render;

pub use prompts::{check_portion_range, fuzzy_matches, prompt_food, prompt_portions, prompt_yes_no};
pub use render::{
    display_dashboard, display_entry, display_food_list, display_goals, display_trend,
    progress_bar,
};
