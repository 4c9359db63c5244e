use anyhow::Result;
use std::process;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use platter_core::models::ShoppingList;
use platter_core::store::PlanStore;

use super::helpers::{format_amount, json_error};

pub(crate) fn cmd_shopping_generate(store: &mut PlanStore, json: bool) -> Result<()> {
    if store.current_week().is_none() {
        if json {
            println!(
                "{}",
                json_error("No week selected. Run `platter week` first")
            );
        } else {
            eprintln!("No week selected. Run `platter week` first");
        }
        process::exit(2);
    }

    store.generate_shopping_list();

    let list = store
        .shopping_list()
        .expect("list exists after generation with a current week");
    if json {
        println!("{}", serde_json::to_string_pretty(list)?);
    } else {
        print_shopping_list(list);
    }
    Ok(())
}

pub(crate) fn cmd_shopping_show(store: &PlanStore, json: bool) -> Result<()> {
    let Some(list) = store.shopping_list() else {
        if json {
            println!(
                "{}",
                json_error("No shopping list yet. Run `platter shopping generate`")
            );
        } else {
            eprintln!("No shopping list yet. Run `platter shopping generate`");
        }
        process::exit(2);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(list)?);
    } else {
        print_shopping_list(list);
    }
    Ok(())
}

fn print_shopping_list(list: &ShoppingList) {
    let week_id = &list.week_id;
    println!("Shopping list for week of {week_id}");

    if list.items.is_empty() {
        println!("  Nothing to buy — no ingredients planned this week.");
        return;
    }

    #[derive(Tabled)]
    struct ItemRow {
        #[tabled(rename = "Ingredient")]
        ingredient: String,
        #[tabled(rename = "Amount")]
        amount: String,
        #[tabled(rename = "Unit")]
        unit: String,
    }

    let rows: Vec<ItemRow> = list
        .items
        .iter()
        .map(|i| ItemRow {
            ingredient: i.ingredient.clone(),
            amount: format_amount(i.total_amount),
            unit: i.unit.clone(),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..2)).with(Alignment::right()))
        .to_string();
    println!("{table}");
}
