//! The habit list and global stats, bound to the storage they persist into.

use crate::errors::HabitError;
use crate::models::{CompletionOutcome, Habit, HabitData, HistoryEntry, Stats};
use crate::storage::{KeyValueStore, load_data, persist_data};
use crate::streak;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

pub struct HabitStore {
    data: HabitData,
    backend: Box<dyn KeyValueStore>,
}

impl HabitStore {
    /// Loads persisted habits and zeroes streaks that lapsed before `today`.
    pub fn load(backend: Box<dyn KeyValueStore>, today: NaiveDate) -> Self {
        let mut data = load_data(&*backend);
        let reset = streak::recompute_on_load(&mut data.habits, today);
        if reset > 0 {
            info!(reset, "cleared lapsed streaks");
        }
        Self { data, backend }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.data.habits
    }

    pub fn stats(&self) -> Stats {
        self.data.stats
    }

    pub fn data(&self) -> &HabitData {
        &self.data
    }

    pub fn get(&self, id: u64) -> Result<&Habit, HabitError> {
        self.data
            .habits
            .iter()
            .find(|habit| habit.id == id)
            .ok_or(HabitError::NotFound(id))
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut Habit, HabitError> {
        self.data
            .habits
            .iter_mut()
            .find(|habit| habit.id == id)
            .ok_or(HabitError::NotFound(id))
    }

    /// Appends a new habit. `now_millis` seeds the id, which is bumped when
    /// needed so ids stay strictly increasing.
    pub fn create_habit(&mut self, name: &str, target_streak: u32, now_millis: u64) -> Result<Habit, HabitError> {
        let name = streak::validate_name(name)?;
        let target_streak = streak::validate_target(target_streak)?;

        let id = match self.data.habits.iter().map(|habit| habit.id).max() {
            Some(last) if last >= now_millis => last
                .checked_add(1)
                .ok_or_else(|| HabitError::Validation("no habit ids left".into()))?,
            _ => now_millis,
        };
        let habit = Habit::new(id, name, target_streak);
        self.data.habits.push(habit.clone());
        info!(id, name = %habit.name, target_streak, "habit created");
        self.save();
        Ok(habit)
    }

    pub fn complete(&mut self, id: u64, today: NaiveDate) -> Result<(Habit, Stats, CompletionOutcome), HabitError> {
        let HabitData { habits, stats } = &mut self.data;
        let habit = habits
            .iter_mut()
            .find(|habit| habit.id == id)
            .ok_or(HabitError::NotFound(id))?;

        let outcome = streak::record_completion(habit, stats, today);
        let habit = habit.clone();
        let stats = *stats;
        debug!(id, ?outcome, current_streak = habit.current_streak, "completion recorded");

        if outcome != CompletionOutcome::AlreadyCompletedToday {
            self.save();
        }
        Ok((habit, stats, outcome))
    }

    pub fn edit(&mut self, id: u64, name: &str, target_streak: u32) -> Result<Habit, HabitError> {
        let habit = self.get_mut(id)?;
        streak::edit_habit(habit, name, target_streak)?;
        let habit = habit.clone();
        info!(id, name = %habit.name, target_streak, "habit edited");
        self.save();
        Ok(habit)
    }

    /// Removes a habit. Milestones it already contributed to the stats stay counted.
    pub fn delete(&mut self, id: u64) -> Result<Habit, HabitError> {
        let index = self
            .data
            .habits
            .iter()
            .position(|habit| habit.id == id)
            .ok_or(HabitError::NotFound(id))?;
        let removed = self.data.habits.remove(index);
        info!(id, name = %removed.name, "habit deleted");
        self.save();
        Ok(removed)
    }

    /// Completion dates, most recent first; the first entry is flagged `latest`.
    pub fn history(&self, id: u64) -> Result<Vec<HistoryEntry>, HabitError> {
        let habit = self.get(id)?;
        Ok(habit
            .completion_dates
            .iter()
            .rev()
            .enumerate()
            .map(|(index, date)| HistoryEntry {
                date: *date,
                latest: index == 0,
            })
            .collect())
    }

    fn save(&mut self) {
        if let Err(err) = persist_data(&mut *self.backend, &self.data) {
            warn!("failed to persist habits: {err}");
        }
    }
}
