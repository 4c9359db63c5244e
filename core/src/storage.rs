use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::{DayMeals, Meal, ShoppingList, WeekPlan};

/// The entire persisted store state: one blob, serialized whole on every
/// mutation. No version field — new optional fields deserialize with
/// `#[serde(default)]`, so adding fields is forward-compatible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanState {
    #[serde(default)]
    pub weeks: std::collections::BTreeMap<String, WeekPlan>,
    #[serde(default)]
    pub current_day_meals: DayMeals,
    #[serde(default)]
    pub favorites: Vec<Meal>,
    #[serde(default)]
    pub shopping_list: Option<ShoppingList>,
    #[serde(default)]
    pub current_week_start_date: Option<String>,
}

/// Reads and writes the single state blob. Failures in either direction are
/// logged to stderr and swallowed: a failed load yields the default empty
/// state, a failed save leaves the in-memory change unsaved.
pub struct Storage {
    /// `None` means in-memory only (tests); no I/O is performed.
    path: Option<PathBuf>,
}

impl Storage {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Storage { path: Some(path) }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Storage { path: None }
    }

    #[must_use]
    pub fn load(&self) -> PlanState {
        let Some(path) = &self.path else {
            return PlanState::default();
        };
        if !path.exists() {
            return PlanState::default();
        }
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Failed to read saved plan from {}: {e}", path.display());
                return PlanState::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(state) => state,
            Err(e) => {
                eprintln!("Saved plan at {} is unreadable: {e}", path.display());
                PlanState::default()
            }
        }
    }

    pub fn save(&self, state: &PlanState) {
        let Some(path) = &self.path else { return };
        let text = match serde_json::to_string(state) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Failed to serialize plan state: {e}");
                return;
            }
        };
        if let Err(e) = fs::write(path, text) {
            eprintln!("Failed to save plan to {}: {e}", path.display());
        }
    }

    /// Delete the persisted blob. A missing file is fine.
    pub fn clear(&self) {
        let Some(path) = &self.path else { return };
        if let Err(e) = fs::remove_file(path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                eprintln!("Failed to delete saved plan at {}: {e}", path.display());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealType, date_key, week_start_for};
    use chrono::NaiveDate;

    fn sample_state() -> PlanState {
        let start = week_start_for(NaiveDate::from_ymd_opt(2024, 6, 19).unwrap());
        let mut state = PlanState::default();
        let mut week = WeekPlan::new(start);
        let meal = Meal {
            id: "m1".to_string(),
            name: "Omelette".to_string(),
            description: String::new(),
            meal_type: MealType::Breakfast,
            ingredients: vec![],
            date: "2024-06-19T00:00:00+00:00".to_string(),
            is_favorite: false,
            nutrition: None,
        };
        *week
            .days
            .get_mut(&date_key(start))
            .unwrap()
            .slot_mut(MealType::Breakfast) = Some(meal.clone());
        state.weeks.insert(week.id.clone(), week);
        state.favorites.push(meal);
        state.current_week_start_date = Some(date_key(start));
        state
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("plan.json"));
        assert_eq!(storage.load(), PlanState::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("plan.json"));

        let state = sample_state();
        storage.save(&state);
        assert_eq!(storage.load(), state);
    }

    #[test]
    fn test_load_corrupt_blob_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.json");
        fs::write(&path, "{not json").unwrap();

        let storage = Storage::new(path);
        assert_eq!(storage.load(), PlanState::default());
    }

    #[test]
    fn test_clear_removes_blob() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.json");
        let storage = Storage::new(path.clone());

        storage.save(&sample_state());
        assert!(path.exists());
        storage.clear();
        assert!(!path.exists());

        // Clearing again is a no-op.
        storage.clear();
    }

    #[test]
    fn test_in_memory_storage_does_no_io() {
        let storage = Storage::in_memory();
        storage.save(&sample_state());
        assert_eq!(storage.load(), PlanState::default());
        storage.clear();
    }

    #[test]
    fn test_default_state_shape() {
        let state = PlanState::default();
        assert!(state.weeks.is_empty());
        assert!(state.current_day_meals.is_empty());
        assert!(state.favorites.is_empty());
        assert!(state.shopping_list.is_none());
        assert!(state.current_week_start_date.is_none());
    }

    #[test]
    fn test_state_deserialize_empty_object() {
        // A blob from a build that knew fewer fields still loads.
        let state: PlanState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, PlanState::default());
    }
}
