//! Streak bookkeeping for a single habit.
//!
//! Every function takes "today" as a calendar date so day boundaries are
//! decided by the caller's clock, never by elapsed hours.

use crate::errors::HabitError;
use crate::models::{CompletionOutcome, Habit, MAX_TARGET_STREAK, MIN_TARGET_STREAK, Stats};
use chrono::{Duration, NaiveDate};

/// True when the habit was last completed before yesterday.
/// A habit that was never completed has no streak to break.
pub fn has_streak_broken(habit: &Habit, today: NaiveDate) -> bool {
    has_gap(habit.last_completed, today)
}

fn has_gap(last_completed: Option<NaiveDate>, today: NaiveDate) -> bool {
    match last_completed {
        Some(last) => last < today - Duration::days(1),
        None => false,
    }
}

/// Marks `habit` done on `today`, updating its streak and the global counters.
pub fn record_completion(habit: &mut Habit, stats: &mut Stats, today: NaiveDate) -> CompletionOutcome {
    if !habit.completion_dates.insert(today) {
        return CompletionOutcome::AlreadyCompletedToday;
    }

    let previous = habit.last_completed.replace(today);

    let outcome = if has_gap(previous, today) {
        habit.current_streak = 1;
        stats.broken_streaks = stats.broken_streaks.saturating_add(1);
        CompletionOutcome::StreakBroken
    } else {
        habit.current_streak = habit.current_streak.saturating_add(1);
        if habit.current_streak % habit.target_streak.max(1) == 0 {
            habit.total_completions = habit.total_completions.saturating_add(1);
            stats.completed_habits = stats.completed_habits.saturating_add(1);
            CompletionOutcome::TargetReached
        } else {
            CompletionOutcome::StreakContinued
        }
    };

    habit.longest_streak = habit.longest_streak.max(habit.current_streak);
    outcome
}

/// Zeroes the displayed streak of every habit that lapsed while the app was
/// not running. Longest streak, totals and stats are left alone; a break is
/// only counted in `Stats::broken_streaks` when the user next completes it.
///
/// Returns the number of habits that were reset.
pub fn recompute_on_load(habits: &mut [Habit], today: NaiveDate) -> usize {
    let mut reset = 0;
    for habit in habits.iter_mut() {
        if has_streak_broken(habit, today) && habit.current_streak != 0 {
            habit.current_streak = 0;
            reset += 1;
        }
    }
    reset
}

/// Renames and retargets a habit, then recounts `total_completions` from the
/// full completion history. The running and longest streaks are not touched.
pub fn edit_habit(habit: &mut Habit, new_name: &str, new_target_streak: u32) -> Result<(), HabitError> {
    let name = validate_name(new_name)?;
    let target = validate_target(new_target_streak)?;

    habit.name = name;
    habit.target_streak = target;
    habit.total_completions = habit.completion_dates.len() as u32 / target;
    Ok(())
}

pub fn validate_name(name: &str) -> Result<String, HabitError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(HabitError::Validation("name must not be empty".into()));
    }
    Ok(name.to_string())
}

pub fn validate_target(target_streak: u32) -> Result<u32, HabitError> {
    if !(MIN_TARGET_STREAK..=MAX_TARGET_STREAK).contains(&target_streak) {
        return Err(HabitError::Validation(format!(
            "target streak must be between {MIN_TARGET_STREAK} and {MAX_TARGET_STREAK}"
        )));
    }
    Ok(target_streak)
}

/// Validates a target streak taken straight from a JSON request body.
/// Negative, fractional and oversized numbers are validation errors too.
pub fn validate_target_number(target_streak: &serde_json::Number) -> Result<u32, HabitError> {
    let target = target_streak
        .as_u64()
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| {
            HabitError::Validation(format!(
                "target streak must be a whole number between {MIN_TARGET_STREAK} and {MAX_TARGET_STREAK}"
            ))
        })?;
    validate_target(target)
}
