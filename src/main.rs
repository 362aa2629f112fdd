use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nutrition_tracker_rs::calculator::compute_daily_needs;
use nutrition_tracker_rs::cli::{Cli, Command};
use nutrition_tracker_rs::error::Result;
use nutrition_tracker_rs::interface::{
    check_portion_range, display_dashboard, display_entry, display_food_list, display_goals,
    display_trend, prompt_food, prompt_portions, prompt_yes_no,
};
use nutrition_tracker_rs::models::{ActivityLevel, NutrientTotals, Profile, Sex};
use nutrition_tracker_rs::state::{load_catalog, load_session, save_session};

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nutrition_tracker_rs=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Goals {
            weight,
            height,
            age,
            sex,
            activity,
            save,
        } => cmd_goals(&cli.session, weight, height, age, sex, activity, save),
        Command::Log { food, portions } => cmd_log(&cli.foods, &cli.session, food, portions),
        Command::Add {
            name,
            calories,
            protein,
            carbs,
            fat,
            portions,
        } => cmd_add(
            &cli.session,
            &name,
            NutrientTotals::new(calories, protein, carbs, fat),
            portions,
        ),
        Command::Dashboard { date } => cmd_dashboard(&cli.session, date.unwrap_or_else(today)),
        Command::Progress { days, end } => {
            cmd_progress(&cli.session, end.unwrap_or_else(today), days)
        }
        Command::Foods => cmd_foods(&cli.foods),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Calculate daily goals. The session file is only touched with `--save`.
fn cmd_goals(
    session_path: &str,
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    activity_level: ActivityLevel,
    save: bool,
) -> Result<()> {
    let profile = Profile {
        weight_kg,
        height_cm,
        age_years,
        sex,
        activity_level,
    };
    profile.validate()?;

    let goals = compute_daily_needs(&profile);
    display_goals(&goals, &profile);

    if !save {
        return Ok(());
    }

    let mut session = load_session(session_path)?;
    if session.has_saved_goals() && !prompt_yes_no("Overwrite your saved goals?", true)? {
        println!("Kept existing goals.");
        return Ok(());
    }
    session.update_goals(profile);
    save_session(session_path, &session)?;
    println!("Daily goals updated!");

    Ok(())
}

/// Log a catalog food, prompting for anything not given on the command line.
fn cmd_log(
    foods_path: &str,
    session_path: &str,
    food: Option<String>,
    portions: Option<f64>,
) -> Result<()> {
    let catalog = load_catalog(foods_path)?;

    let food_name = match food {
        Some(name) => name,
        None => prompt_food(&catalog)?,
    };
    let portions = match portions {
        Some(p) => check_portion_range(p)?,
        None => prompt_portions()?,
    };

    let mut session = load_session(session_path)?;
    let now = Local::now().naive_local();
    let entry = session
        .log
        .log_food(&catalog, &food_name, portions, now)?
        .clone();
    save_session(session_path, &session)?;

    println!("Logged {} portion(s) of {}", portions, entry.food_name);
    display_entry(&entry);
    Ok(())
}

/// Log a food from externally supplied per-serving values.
fn cmd_add(
    session_path: &str,
    name: &str,
    per_serving: NutrientTotals,
    portions: f64,
) -> Result<()> {
    let portions = check_portion_range(portions)?;

    let mut session = load_session(session_path)?;
    let now = Local::now().naive_local();
    let entry = session
        .log
        .log_custom(name, portions, per_serving, now)?
        .clone();
    save_session(session_path, &session)?;

    println!("Logged {} portion(s) of {}", portions, entry.food_name);
    display_entry(&entry);
    Ok(())
}

fn cmd_dashboard(session_path: &str, date: NaiveDate) -> Result<()> {
    let session = load_session(session_path)?;
    let totals = session.log.daily_totals(date);
    let entries = session.log.entries_on(date);
    display_dashboard(date, &totals, &session.goals_or_default(), &entries);

    if session.goals.is_none() {
        println!("Using default goals. Run 'goals --save' to calculate your own.");
    }
    Ok(())
}

fn cmd_progress(session_path: &str, end: NaiveDate, days: u32) -> Result<()> {
    let session = load_session(session_path)?;
    display_trend(&session.log.trend(end, days));
    Ok(())
}

fn cmd_foods(foods_path: &str) -> Result<()> {
    let catalog = load_catalog(foods_path)?;
    display_food_list(&catalog);
    Ok(())
}
