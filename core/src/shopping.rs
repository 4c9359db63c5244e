use crate::models::{ShoppingListItem, WeekPlan};

/// Aggregate every ingredient of every planned meal in `week` into one list.
///
/// Keys are lowercased ingredient names and items keep first-seen order.
/// Amounts add only when the unit matches exactly; on a unit mismatch the
/// new ingredient's amount and unit replace the stored entry, discarding the
/// previous total. That mismatch behavior is deliberate compatibility with
/// the store's historical aggregation rule — see DESIGN.md before changing it.
#[must_use]
pub fn aggregate(week: &WeekPlan) -> Vec<ShoppingListItem> {
    let mut items: Vec<ShoppingListItem> = Vec::new();

    for day in week.days.values() {
        for (_, meal) in day.iter() {
            for ingredient in &meal.ingredients {
                let key = ingredient.name.to_lowercase();
                match items.iter_mut().find(|i| i.ingredient == key) {
                    Some(existing) if existing.unit == ingredient.unit => {
                        existing.total_amount += ingredient.amount;
                    }
                    Some(existing) => {
                        existing.total_amount = ingredient.amount;
                        existing.unit = ingredient.unit.clone();
                    }
                    None => items.push(ShoppingListItem {
                        ingredient: key,
                        total_amount: ingredient.amount,
                        unit: ingredient.unit.clone(),
                    }),
                }
            }
        }
    }

    items
}
