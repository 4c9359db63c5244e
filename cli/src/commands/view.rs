use anyhow::Result;
use tabled::{
    Table, Tabled,
    settings::Style,
};

use platter_core::models::{DayMeals, Meal, MealType, date_key, week_start_for};
use platter_core::store::PlanStore;

use super::helpers::{format_amount, parse_date, truncate};

pub(crate) fn cmd_day(store: &mut PlanStore, date: Option<String>, json: bool) -> Result<()> {
    let date = parse_date(date)?;
    let day = store.fetch_meals_for_date(date);

    if json {
        println!("{}", serde_json::to_string_pretty(&day)?);
        return Ok(());
    }

    println!("=== {date} ===\n");

    if day.is_empty() {
        println!("  Nothing planned.");
        return Ok(());
    }

    for (meal_type, meal) in day.iter() {
        print_meal_slot(meal_type, meal);
    }
    Ok(())
}

fn print_meal_slot(meal_type: MealType, meal: &Meal) {
    let label = meal_type.as_str().to_uppercase();
    let name = &meal.name;
    let id = &meal.id;
    let fav = if meal.is_favorite { " ★" } else { "" };
    println!("  {label}: {name}{fav} (id: {id})");
    if !meal.description.is_empty() {
        let description = &meal.description;
        println!("    {description}");
    }
    for ing in &meal.ingredients {
        let amount = format_amount(ing.amount);
        let unit = &ing.unit;
        let ing_name = &ing.name;
        if unit.is_empty() {
            println!("    - {amount} {ing_name}");
        } else {
            println!("    - {amount} {unit} {ing_name}");
        }
    }
    if let Some(n) = &meal.nutrition {
        let cal = n.calories;
        let protein = n.protein;
        let carbs = n.carbs;
        let fat = n.fat;
        println!("    {cal:.0} kcal | P:{protein:.0}g C:{carbs:.0}g F:{fat:.0}g");
    }
    println!();
}

pub(crate) fn cmd_week(store: &mut PlanStore, date: Option<String>, json: bool) -> Result<()> {
    let date = parse_date(date)?;
    let start = week_start_for(date);
    store.fetch_week_meals(start);

    // fetch_week_meals just created or selected this week
    let week = store
        .get_week_for_date(start)
        .expect("current week exists after fetch");

    if json {
        println!("{}", serde_json::to_string_pretty(week)?);
        return Ok(());
    }

    #[derive(Tabled)]
    struct WeekRow {
        #[tabled(rename = "Date")]
        date: String,
        #[tabled(rename = "Breakfast")]
        breakfast: String,
        #[tabled(rename = "Lunch")]
        lunch: String,
        #[tabled(rename = "Dinner")]
        dinner: String,
        #[tabled(rename = "Snack")]
        snack: String,
    }

    fn cell(day: &DayMeals, meal_type: MealType) -> String {
        day.slot(meal_type)
            .map_or_else(|| "-".to_string(), |m| truncate(&m.name, 20))
    }

    let rows: Vec<WeekRow> = week
        .days
        .iter()
        .map(|(day_key, day)| WeekRow {
            date: day_key.clone(),
            breakfast: cell(day, MealType::Breakfast),
            lunch: cell(day, MealType::Lunch),
            dinner: cell(day, MealType::Dinner),
            snack: cell(day, MealType::Snack),
        })
        .collect();

    let start_key = date_key(start);
    println!("Week of {start_key}");
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");

    Ok(())
}
