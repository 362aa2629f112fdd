use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::calculator::constants::{MAX_TREND_DAYS, TREND_WINDOW_DAYS};
use crate::models::{ActivityLevel, Sex};

/// Nutrition Tracker: log meals and compare daily intake with your goals.
#[derive(Parser, Debug)]
#[command(name = "nutrition-tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog CSV file.
    #[arg(long, env = "NUTRITION_FOODS", default_value = "food_database.csv")]
    pub foods: String,

    /// Path to the session JSON file holding goals and the meal log.
    #[arg(short, long, env = "NUTRITION_SESSION", default_value = "nutrition_session.json")]
    pub session: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate daily calorie and macro goals from a profile.
    Goals {
        /// Body weight in kilograms (30-200).
        #[arg(long)]
        weight: f64,

        /// Height in centimetres (100-250).
        #[arg(long)]
        height: f64,

        /// Age in years (15-100).
        #[arg(long)]
        age: u32,

        /// male or female.
        #[arg(long, value_parser = parse_sex)]
        sex: Sex,

        /// sedentary, light, moderate, active or very_active.
        #[arg(long, default_value = "sedentary", value_parser = parse_activity)]
        activity: ActivityLevel,

        /// Store the goals in the session.
        #[arg(long)]
        save: bool,
    },

    /// Log portions of a food from the catalog.
    Log {
        /// Food name; prompts interactively when omitted.
        food: Option<String>,

        /// Number of servings (0.25-10).
        #[arg(short, long)]
        portions: Option<f64>,
    },

    /// Log a food that is not in the catalog, using its per-serving values.
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        calories: f64,

        #[arg(long, default_value = "0")]
        protein: f64,

        #[arg(long, default_value = "0")]
        carbs: f64,

        #[arg(long, default_value = "0")]
        fat: f64,

        /// Number of servings (0.25-10).
        #[arg(short, long, default_value = "1")]
        portions: f64,
    },

    /// Show today's intake against goals.
    Dashboard {
        /// Date to show (YYYY-MM-DD); defaults to today.
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// Show daily totals over a trailing window.
    Progress {
        /// Number of days to show (1-366).
        #[arg(
            long,
            default_value_t = TREND_WINDOW_DAYS,
            value_parser = clap::value_parser!(u32).range(1..=MAX_TREND_DAYS as i64)
        )]
        days: u32,

        /// Last day of the window (YYYY-MM-DD); defaults to today.
        #[arg(long, value_parser = parse_date)]
        end: Option<NaiveDate>,
    },

    /// List the foods in the catalog.
    Foods,
}

impl Default for Command {
    fn default() -> Self {
        Command::Dashboard { date: None }
    }
}

fn parse_sex(s: &str) -> Result<Sex, String> {
    Sex::from_label(s).ok_or_else(|| format!("expected 'male' or 'female', got '{}'", s))
}

/// Unknown labels fall back to sedentary rather than failing.
fn parse_activity(s: &str) -> Result<ActivityLevel, String> {
    Ok(ActivityLevel::from_label(s))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date '{}': {}", s, e))
}
