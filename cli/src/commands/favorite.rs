use anyhow::Result;
use std::process;
use tabled::{
    Table, Tabled,
    settings::Style,
};

use platter_core::store::PlanStore;

use super::helpers::{json_error, truncate};

pub(crate) fn cmd_favorite_add(store: &mut PlanStore, meal_id: &str, json: bool) -> Result<()> {
    let Some(meal) = store.find_meal(meal_id).cloned() else {
        return not_found(meal_id, json);
    };

    if store.favorites().iter().any(|f| f.id == meal_id) {
        if json {
            println!("{}", json_error(&format!("Meal {meal_id} is already a favorite")));
        } else {
            eprintln!("Meal {meal_id} is already a favorite");
        }
        process::exit(2);
    }

    store.add_favorite_meal(&meal);

    if json {
        println!("{}", serde_json::json!({ "favorited": meal_id }));
    } else {
        let name = &meal.name;
        println!("Added {name} to favorites");
    }
    Ok(())
}

pub(crate) fn cmd_favorite_remove(store: &mut PlanStore, meal_id: &str, json: bool) -> Result<()> {
    if !store.favorites().iter().any(|f| f.id == meal_id) {
        return not_found(meal_id, json);
    }

    store.remove_favorite_meal(meal_id);

    if json {
        println!("{}", serde_json::json!({ "unfavorited": meal_id }));
    } else {
        println!("Removed {meal_id} from favorites");
    }
    Ok(())
}

pub(crate) fn cmd_favorite_toggle(store: &mut PlanStore, meal_id: &str, json: bool) -> Result<()> {
    let Some(meal) = store.find_meal(meal_id).cloned() else {
        return not_found(meal_id, json);
    };

    store.toggle_favorite(&meal);
    let favorited = store.favorites().iter().any(|f| f.id == meal_id);

    if json {
        println!(
            "{}",
            serde_json::json!({ "id": meal_id, "favorited": favorited })
        );
    } else {
        let name = &meal.name;
        if favorited {
            println!("Added {name} to favorites");
        } else {
            println!("Removed {name} from favorites");
        }
    }
    Ok(())
}

pub(crate) fn cmd_favorite_list(store: &PlanStore, json: bool) -> Result<()> {
    let favorites = store.favorites();

    if json {
        println!("{}", serde_json::to_string_pretty(favorites)?);
        return Ok(());
    }

    if favorites.is_empty() {
        eprintln!("No favorite meals yet");
        process::exit(2);
    }

    #[derive(Tabled)]
    struct FavoriteRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Type")]
        meal_type: String,
        #[tabled(rename = "Ingredients")]
        ingredients: usize,
        #[tabled(rename = "Description")]
        description: String,
    }

    let rows: Vec<FavoriteRow> = favorites
        .iter()
        .map(|m| FavoriteRow {
            id: m.id.clone(),
            name: truncate(&m.name, 30),
            meal_type: m.meal_type.to_string(),
            ingredients: m.ingredients.len(),
            description: truncate(&m.description, 30),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
    Ok(())
}

fn not_found(meal_id: &str, json: bool) -> Result<()> {
    if json {
        println!("{}", json_error(&format!("Meal {meal_id} not found")));
    } else {
        eprintln!("Meal {meal_id} not found");
    }
    process::exit(2);
}
