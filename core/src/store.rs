use std::path::PathBuf;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{DayMeals, Meal, MealType, ShoppingList, WeekPlan, date_key, week_start_for};
use crate::shopping;
use crate::storage::{PlanState, Storage};

/// The weekly meal-plan store: held weeks, the current-day cache, favorites,
/// and the last generated shopping list.
///
/// Owned explicitly by the application's composition root — there is no
/// module-level singleton. Every mutation ends by serializing the full state
/// through [`Storage`]; persistence failures are logged and never fatal, so
/// mutations themselves cannot fail.
///
/// The current-day cache, week day slots, and favorites hold independent
/// copies of a meal. [`PlanStore::update_meal`] keeps them in sync by
/// rewriting every copy with a matching id; favorites deliberately diverge
/// from the plan on [`PlanStore::remove_meal`] (snapshots survive removal).
pub struct PlanStore {
    state: PlanState,
    storage: Storage,
}

impl PlanStore {
    /// Open the store backed by the blob at `path`, starting from the saved
    /// state if it loads, else the default empty state.
    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        let storage = Storage::new(path);
        let state = storage.load();
        PlanStore { state, storage }
    }

    #[must_use]
    pub fn open_in_memory() -> Self {
        PlanStore {
            state: PlanState::default(),
            storage: Storage::in_memory(),
        }
    }

    fn save(&self) {
        self.storage.save(&self.state);
    }

    // --- Queries (no mutation, no persistence) ---

    #[must_use]
    pub fn current_week(&self) -> Option<&WeekPlan> {
        let key = self.state.current_week_start_date.as_ref()?;
        self.state.weeks.get(key)
    }

    #[must_use]
    pub fn current_week_start_date(&self) -> Option<&str> {
        self.state.current_week_start_date.as_deref()
    }

    #[must_use]
    pub fn current_day_meals(&self) -> &DayMeals {
        &self.state.current_day_meals
    }

    #[must_use]
    pub fn favorites(&self) -> &[Meal] {
        &self.state.favorites
    }

    #[must_use]
    pub fn shopping_list(&self) -> Option<&ShoppingList> {
        self.state.shopping_list.as_ref()
    }

    /// The day's plan from the first held week containing `date` (weeks scan
    /// chronologically), or an all-unset `DayMeals` when no week holds it.
    #[must_use]
    pub fn get_meals_for_date(&self, date: NaiveDate) -> DayMeals {
        let key = date_key(date);
        self.state
            .weeks
            .values()
            .find_map(|week| week.days.get(&key))
            .cloned()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn get_week_for_date(&self, date: NaiveDate) -> Option<&WeekPlan> {
        let key = date_key(date);
        self.state
            .weeks
            .values()
            .find(|week| week.days.contains_key(&key))
    }

    /// Look a meal up by id: week slots first (chronological scan), then
    /// favorites.
    #[must_use]
    pub fn find_meal(&self, meal_id: &str) -> Option<&Meal> {
        for week in self.state.weeks.values() {
            for day in week.days.values() {
                for (_, meal) in day.iter() {
                    if meal.id == meal_id {
                        return Some(meal);
                    }
                }
            }
        }
        self.state.favorites.iter().find(|m| m.id == meal_id)
    }

    // --- Mutations (each ends with a full-state save) ---

    /// Refresh the current-day cache from whichever week holds `date`.
    /// Does not create the week.
    pub fn fetch_meals_for_date(&mut self, date: NaiveDate) -> DayMeals {
        self.state.current_day_meals = self.get_meals_for_date(date);
        self.save();
        self.state.current_day_meals.clone()
    }

    /// Select `start` as the current week, creating the week plan with its
    /// 7 day entries on first access. Idempotent for an existing week.
    pub fn fetch_week_meals(&mut self, start: NaiveDate) {
        let key = date_key(start);
        self.state.current_week_start_date = Some(key.clone());
        self.state
            .weeks
            .entry(key)
            .or_insert_with(|| WeekPlan::new(start));
        self.save();
    }

    /// Set `meal` into the `meal_type` slot for `date`, in both the
    /// current-day cache and the week holding that date. When no held week
    /// contains `date`, the date's Sunday-aligned week is created through
    /// [`PlanStore::fetch_week_meals`], which also moves the current-week
    /// pointer to it; adding to an existing non-current week leaves the
    /// pointer alone.
    pub fn add_meal(&mut self, meal: Meal, date: NaiveDate, meal_type: MealType) {
        let key = date_key(date);
        if self.get_week_for_date(date).is_none() {
            self.fetch_week_meals(week_start_for(date));
        }

        *self.state.current_day_meals.slot_mut(meal_type) = Some(meal.clone());

        if let Some(week) = self
            .state
            .weeks
            .values_mut()
            .find(|week| week.days.contains_key(&key))
        {
            let day = week.days.entry(key).or_default();
            *day.slot_mut(meal_type) = Some(meal);
        }
        self.save();
    }

    /// Plan `meal` for `date` as a fresh entry: mints a new unique id and
    /// stamps the meal's date with the target day, then delegates to
    /// [`PlanStore::add_meal`]. Returns the minted id.
    pub fn add_meal_to_week(&mut self, meal: &Meal, date: NaiveDate, meal_type: MealType) -> String {
        let mut planned = meal.clone();
        planned.id = Uuid::new_v4().to_string();
        planned.date = date.and_time(chrono::NaiveTime::MIN).and_utc().to_rfc3339();
        let id = planned.id.clone();
        self.add_meal(planned, date, meal_type);
        id
    }

    /// Replace every copy of the meal with `meal.id` — the current-day slot
    /// of the meal's type, every matching slot in every week, and any
    /// favorites entry. The containers hold no shared references, so each
    /// copy is rewritten individually.
    pub fn update_meal(&mut self, meal: &Meal) {
        let slot = self.state.current_day_meals.slot_mut(meal.meal_type);
        if slot.as_ref().is_some_and(|m| m.id == meal.id) {
            *slot = Some(meal.clone());
        }

        for week in self.state.weeks.values_mut() {
            for day in week.days.values_mut() {
                for meal_type in MealType::ALL {
                    let slot = day.slot_mut(meal_type);
                    if slot.as_ref().is_some_and(|m| m.id == meal.id) {
                        *slot = Some(meal.clone());
                    }
                }
            }
        }

        if let Some(favorite) = self
            .state
            .favorites
            .iter_mut()
            .find(|f| f.id == meal.id)
        {
            *favorite = meal.clone();
        }
        self.save();
    }

    /// Unset every plan slot holding `meal_id`. Favorites keep their
    /// snapshot.
    pub fn remove_meal(&mut self, meal_id: &str) {
        for meal_type in MealType::ALL {
            let slot = self.state.current_day_meals.slot_mut(meal_type);
            if slot.as_ref().is_some_and(|m| m.id == meal_id) {
                *slot = None;
            }
        }

        for week in self.state.weeks.values_mut() {
            for day in week.days.values_mut() {
                for meal_type in MealType::ALL {
                    let slot = day.slot_mut(meal_type);
                    if slot.as_ref().is_some_and(|m| m.id == meal_id) {
                        *slot = None;
                    }
                }
            }
        }
        self.save();
    }

    // --- Favorites ---

    pub fn add_favorite_meal(&mut self, meal: &Meal) {
        let mut favorite = meal.clone();
        favorite.is_favorite = true;
        self.state.favorites.push(favorite);
        self.save();
    }

    pub fn update_favorite_meal(&mut self, meal: &Meal) {
        if let Some(existing) = self
            .state
            .favorites
            .iter_mut()
            .find(|f| f.id == meal.id)
        {
            let mut favorite = meal.clone();
            favorite.is_favorite = true;
            *existing = favorite;
        }
        self.save();
    }

    pub fn remove_favorite_meal(&mut self, meal_id: &str) {
        self.state.favorites.retain(|f| f.id != meal_id);
        self.save();
    }

    /// Remove the favorite with `meal.id` if present, else append `meal`
    /// with `is_favorite` forced true. Its own inverse.
    pub fn toggle_favorite(&mut self, meal: &Meal) {
        if let Some(pos) = self.state.favorites.iter().position(|f| f.id == meal.id) {
            self.state.favorites.remove(pos);
        } else {
            let mut favorite = meal.clone();
            favorite.is_favorite = true;
            self.state.favorites.push(favorite);
        }
        self.save();
    }

    // --- Shopping list ---

    /// Regenerate the shopping list from the current week. With no week
    /// selected this is a no-op and any prior list is left untouched.
    pub fn generate_shopping_list(&mut self) {
        let Some(week) = self.current_week() else {
            return;
        };
        let list = ShoppingList {
            week_id: week.id.clone(),
            items: shopping::aggregate(week),
        };
        self.state.shopping_list = Some(list);
        self.save();
    }

    /// Reset all in-memory state to the default empty state and delete the
    /// persisted blob.
    pub fn clear_all_data(&mut self) {
        self.state = PlanState::default();
        self.storage.clear();
    }
}
