use crate::models::{DailyPoint, HabitData, SummaryResponse, WeeklyPoint};
use crate::streak::has_streak_broken;
use chrono::{Datelike, Duration, NaiveDate};

pub fn build_summary_at(today: NaiveDate, data: &HabitData) -> SummaryResponse {
    const WEEK_COUNT: usize = 8;

    let mut last_7_days = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset as i64);
        last_7_days.push(DailyPoint {
            date: date.to_string(),
            completions: completions_on(data, date),
        });
    }

    let current_week_start = week_start(today);
    let mut weekly_totals = Vec::with_capacity(WEEK_COUNT);
    for offset in (0..WEEK_COUNT).rev() {
        let start = current_week_start - Duration::weeks(offset as i64);
        let end = start + Duration::days(6);

        let completions = data
            .habits
            .iter()
            .map(|habit| habit.completion_dates.range(start..=end).count() as u32)
            .sum();

        weekly_totals.push(WeeklyPoint {
            week: week_label(start),
            start_date: start.to_string(),
            end_date: end.to_string(),
            completions,
        });
    }

    let active_streaks = data
        .habits
        .iter()
        .filter(|habit| habit.current_streak > 0 && !has_streak_broken(habit, today))
        .count();

    SummaryResponse {
        completed_habits: data.stats.completed_habits,
        broken_streaks: data.stats.broken_streaks,
        habit_count: data.habits.len(),
        active_streaks,
        best_streak: data.habits.iter().map(|habit| habit.longest_streak).max().unwrap_or(0),
        completed_today: data.habits.iter().filter(|habit| habit.completed_on(today)).count(),
        last_7_days,
        weekly_totals,
    }
}

fn completions_on(data: &HabitData, date: NaiveDate) -> u32 {
    data.habits.iter().filter(|habit| habit.completed_on(date)).count() as u32
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}
