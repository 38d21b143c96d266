use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const MIN_TARGET_STREAK: u32 = 1;
pub const MAX_TARGET_STREAK: u32 = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: u64,
    pub name: String,
    pub target_streak: u32,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub total_completions: u32,
    #[serde(default)]
    pub completion_dates: BTreeSet<NaiveDate>,
    #[serde(default)]
    pub last_completed: Option<NaiveDate>,
}

impl Habit {
    pub fn new(id: u64, name: impl Into<String>, target_streak: u32) -> Self {
        Self {
            id,
            name: name.into(),
            target_streak,
            current_streak: 0,
            longest_streak: 0,
            total_completions: 0,
            completion_dates: BTreeSet::new(),
            last_completed: None,
        }
    }

    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.completion_dates.contains(&date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default)]
    pub completed_habits: u64,
    #[serde(default)]
    pub broken_streaks: u64,
}

/// Everything that is persisted: the ordered habit list and the global counters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HabitData {
    pub habits: Vec<Habit>,
    pub stats: Stats,
}

/// Result of marking a habit done for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionOutcome {
    AlreadyCompletedToday,
    StreakBroken,
    StreakContinued,
    /// The streak continued and landed on a multiple of the target.
    TargetReached,
}

impl CompletionOutcome {
    pub fn streak_continued(self) -> bool {
        matches!(self, Self::StreakContinued | Self::TargetReached)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitRequest {
    pub name: String,
    /// Kept as a raw JSON number so out-of-range values reach validation.
    pub target_streak: serde_json::Number,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub habit: Habit,
    pub stats: Stats,
    pub outcome: CompletionOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub latest: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    pub date: String,
    pub completions: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPoint {
    pub week: String,
    pub start_date: String,
    pub end_date: String,
    pub completions: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub completed_habits: u64,
    pub broken_streaks: u64,
    pub habit_count: usize,
    pub active_streaks: usize,
    pub best_streak: u32,
    pub completed_today: usize,
    pub last_7_days: Vec<DailyPoint>,
    pub weekly_totals: Vec<WeeklyPoint>,
}
