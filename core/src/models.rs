use std::collections::BTreeMap;
use std::fmt;

use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// The four daily meal slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn parse_meal_type(s: &str) -> Result<MealType> {
    match s.to_lowercase().as_str() {
        "breakfast" => Ok(MealType::Breakfast),
        "lunch" => Ok(MealType::Lunch),
        "dinner" => Ok(MealType::Dinner),
        "snack" => Ok(MealType::Snack),
        _ => anyhow::bail!(
            "Invalid meal type '{s}'. Must be one of: breakfast, lunch, dinner, snack"
        ),
    }
}

/// A single recipe line. No identity beyond its name and unit: two
/// ingredients combine on the shopping list iff their names match
/// case-insensitively and their units match exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// A planned meal. Identity is `id`; the same meal may appear in the
/// current-day cache, inside a week's day entry, and in the favorites list
/// as independent copies that the store keeps in sync by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub meal_type: MealType,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// ISO timestamp of the day this meal was planned for.
    pub date: String,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

/// One calendar day's plan: at most one meal per slot. Slots that may be
/// empty are explicit `Option`s, never sentinel meals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayMeals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Meal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Meal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Meal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snack: Option<Meal>,
}

impl DayMeals {
    #[must_use]
    pub fn slot(&self, meal_type: MealType) -> Option<&Meal> {
        match meal_type {
            MealType::Breakfast => self.breakfast.as_ref(),
            MealType::Lunch => self.lunch.as_ref(),
            MealType::Dinner => self.dinner.as_ref(),
            MealType::Snack => self.snack.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, meal_type: MealType) -> &mut Option<Meal> {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snack => &mut self.snack,
        }
    }

    /// Occupied slots in fixed breakfast → snack order.
    pub fn iter(&self) -> impl Iterator<Item = (MealType, &Meal)> {
        MealType::ALL
            .iter()
            .filter_map(|&t| self.slot(t).map(|m| (t, m)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// One week's plan, keyed by its start date. Day keys are ISO dates and
/// scans run in `BTreeMap` key order, so iteration is chronological and
/// deterministic across reloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub id: String,
    pub start_date: String,
    pub days: BTreeMap<String, DayMeals>,
}

impl WeekPlan {
    /// A fresh week: exactly 7 consecutive day entries starting at `start`,
    /// all slots unset.
    #[must_use]
    pub fn new(start: NaiveDate) -> Self {
        let key = date_key(start);
        let mut days = BTreeMap::new();
        for i in 0..7 {
            days.insert(date_key(start + Duration::days(i)), DayMeals::default());
        }
        WeekPlan {
            id: key.clone(),
            start_date: key,
            days,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Lowercased ingredient name.
    pub ingredient: String,
    pub total_amount: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub week_id: String,
    pub items: Vec<ShoppingListItem>,
}

/// ISO day key (`YYYY-MM-DD`) used for week ids and day-map keys.
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Sunday-aligned start of the week containing `date`.
#[must_use]
pub fn week_start_for(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}
