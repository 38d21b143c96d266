use chrono::{Local, NaiveDate, Utc};
use std::env;
use tracing::warn;

/// Source of "today" and creation timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    System,
    Fixed(NaiveDate),
}

impl Clock {
    /// `APP_FIXED_DATE=YYYY-MM-DD` pins the calendar date; anything else uses local time.
    pub fn from_env() -> Self {
        match env::var("APP_FIXED_DATE") {
            Ok(value) => match value.trim().parse::<NaiveDate>() {
                Ok(date) => Clock::Fixed(date),
                Err(err) => {
                    warn!("ignoring APP_FIXED_DATE={value:?}: {err}");
                    Clock::System
                }
            },
            Err(_) => Clock::System,
        }
    }

    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }

    pub fn now_millis(&self) -> u64 {
        Utc::now().timestamp_millis().max(0) as u64
    }
}
