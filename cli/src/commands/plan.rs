use anyhow::{Result, bail};
use std::process;

use platter_core::models::{Meal, parse_meal_type};
use platter_core::store::PlanStore;

use super::helpers::{json_error, parse_date, parse_ingredient};

#[allow(clippy::too_many_arguments)]
pub(crate) fn cmd_plan_add(
    store: &mut PlanStore,
    name: &str,
    meal: &str,
    date: Option<String>,
    ingredients: &[String],
    description: Option<String>,
    json: bool,
) -> Result<()> {
    let meal_type = parse_meal_type(meal)?;
    let date = parse_date(date)?;
    let ingredients = ingredients
        .iter()
        .map(|s| parse_ingredient(s))
        .collect::<Result<Vec<_>>>()?;

    // Template meal; the store mints the real id and date stamp.
    let template = Meal {
        id: String::new(),
        name: name.to_string(),
        description: description.unwrap_or_default(),
        meal_type,
        ingredients,
        date: String::new(),
        is_favorite: false,
        nutrition: None,
    };

    let id = store.add_meal_to_week(&template, date, meal_type);

    if json {
        let planned = store.find_meal(&id);
        println!("{}", serde_json::to_string_pretty(&planned)?);
    } else {
        println!("Planned {name} for {meal_type} on {date} (id: {id})");
    }
    Ok(())
}

pub(crate) fn cmd_plan_edit(
    store: &mut PlanStore,
    meal_id: &str,
    name: Option<String>,
    description: Option<String>,
    json: bool,
) -> Result<()> {
    if name.is_none() && description.is_none() {
        bail!("Nothing to update. Provide at least one of --name or --description");
    }

    let Some(existing) = store.find_meal(meal_id) else {
        if json {
            println!("{}", json_error(&format!("Meal {meal_id} not found")));
        } else {
            eprintln!("Meal {meal_id} not found");
        }
        process::exit(2);
    };

    let mut edited = existing.clone();
    if let Some(name) = name {
        edited.name = name;
    }
    if let Some(description) = description {
        edited.description = description;
    }

    store.update_meal(&edited);

    if json {
        println!("{}", serde_json::to_string_pretty(&edited)?);
    } else {
        let name = &edited.name;
        println!("Updated meal {meal_id}: {name}");
    }
    Ok(())
}

pub(crate) fn cmd_plan_remove(store: &mut PlanStore, meal_id: &str, json: bool) -> Result<()> {
    if store.find_meal(meal_id).is_none() {
        if json {
            println!("{}", json_error(&format!("Meal {meal_id} not found")));
        } else {
            eprintln!("Meal {meal_id} not found");
        }
        process::exit(2);
    }

    store.remove_meal(meal_id);

    if json {
        println!("{}", serde_json::json!({ "removed": meal_id }));
    } else {
        println!("Removed meal {meal_id} from the plan");
    }
    Ok(())
}

pub(crate) fn cmd_clear(store: &mut PlanStore, yes: bool, json: bool) -> Result<()> {
    if !yes {
        bail!("This deletes every planned week, favorite, and shopping list. Re-run with --yes to confirm");
    }

    store.clear_all_data();

    if json {
        println!("{}", serde_json::json!({ "cleared": true }));
    } else {
        println!("All meal plan data cleared");
    }
    Ok(())
}
