use crate::errors::StorageError;
use crate::models::{Habit, HabitData, Stats};
use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tracing::error;

pub const HABITS_KEY: &str = "habits";
pub const STATS_KEY: &str = "stats";

/// String key-value storage the habit store persists into.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;

    /// Stores several entries as one write where the backend allows it.
    fn set_all(&mut self, entries: Vec<(&str, String)>) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

/// A JSON object of string entries kept on disk, rewritten on every write.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = read_entries(&path);
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let payload = serde_json::to_vec_pretty(&self.entries)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> BTreeMap<String, String> {
    match fs::read(path) {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                error!("failed to parse data file {}: {err}", path.display());
                BTreeMap::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
        Err(err) => {
            error!("failed to read data file {}: {err}", path.display());
            BTreeMap::new()
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn set_all(&mut self, entries: Vec<(&str, String)>) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.entries.insert(key.to_string(), value);
        }
        self.flush()
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value);
        Ok(())
    }
}

/// Reads both keys. Missing keys yield defaults; unreadable payloads are
/// logged and replaced by defaults so the app still starts.
pub fn load_data(store: &dyn KeyValueStore) -> HabitData {
    let habits: Vec<Habit> = load_key(store, HABITS_KEY).unwrap_or_default();
    let stats: Stats = load_key(store, STATS_KEY).unwrap_or_default();
    HabitData { habits, stats }
}

fn load_key<T: serde::de::DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            error!("failed to read {key}: {err}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            error!("discarding unreadable {key} payload: {err}");
            None
        }
    }
}

pub fn persist_data(store: &mut dyn KeyValueStore, data: &HabitData) -> Result<(), StorageError> {
    let habits = serde_json::to_string(&data.habits)?;
    let stats = serde_json::to_string(&data.stats)?;
    store.set_all(vec![(HABITS_KEY, habits), (STATS_KEY, stats)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn populated() -> HabitData {
        let mut read = Habit::new(1_700_000_000_000, "Read", 3);
        read.current_streak = 2;
        read.longest_streak = 5;
        read.total_completions = 1;
        read.completion_dates.insert(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        read.completion_dates.insert(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        read.last_completed = NaiveDate::from_ymd_opt(2026, 3, 2);
        HabitData {
            habits: vec![read, Habit::new(1_700_000_000_001, "Stretch", 7)],
            stats: Stats {
                completed_habits: 4,
                broken_streaks: 2,
            },
        }
    }

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        env::temp_dir().join(format!("habit_tracker_{tag}_{}_{}.json", std::process::id(), nanos))
    }

    #[test]
    fn memory_store_round_trips_populated_data() {
        let mut store = MemoryStore::new();
        let data = populated();
        persist_data(&mut store, &data).unwrap();
        assert_eq!(load_data(&store), data);
    }

    #[test]
    fn payload_uses_camel_case_fields_and_iso_dates() {
        let mut store = MemoryStore::new();
        persist_data(&mut store, &populated()).unwrap();
        let habits = store.get(HABITS_KEY).unwrap().unwrap();
        assert!(habits.contains("\"targetStreak\":3"));
        assert!(habits.contains("\"completionDates\":[\"2026-03-01\",\"2026-03-02\"]"));
        assert!(habits.contains("\"lastCompleted\":null"));
        let stats = store.get(STATS_KEY).unwrap().unwrap();
        assert_eq!(stats, r#"{"completedHabits":4,"brokenStreaks":2}"#);
    }

    #[test]
    fn missing_and_corrupt_keys_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        assert_eq!(load_data(&store), HabitData::default());

        store.set(HABITS_KEY, "not json".into()).unwrap();
        store.set(STATS_KEY, r#"{"completedHabits":9}"#.into()).unwrap();
        let data = load_data(&store);
        assert!(data.habits.is_empty());
        assert_eq!(data.stats.completed_habits, 9);
        assert_eq!(data.stats.broken_streaks, 0);
    }

    #[test]
    fn file_store_survives_reopen() {
        let path = temp_path("reopen");
        let data = populated();
        {
            let mut store = JsonFileStore::open(&path);
            persist_data(&mut store, &data).unwrap();
        }
        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.path(), path.as_path());
        assert_eq!(load_data(&reopened), data);
        let _ = fs::remove_file(path);
    }

    #[derive(Default)]
    struct RecordingStore {
        sets: usize,
        batches: Vec<Vec<String>>,
    }

    impl KeyValueStore for RecordingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: String) -> Result<(), StorageError> {
            self.sets += 1;
            Ok(())
        }

        fn set_all(&mut self, entries: Vec<(&str, String)>) -> Result<(), StorageError> {
            self.batches.push(entries.iter().map(|(key, _)| key.to_string()).collect());
            Ok(())
        }
    }

    #[test]
    fn persist_writes_both_keys_in_one_batch() {
        let mut store = RecordingStore::default();
        persist_data(&mut store, &populated()).unwrap();
        assert_eq!(store.sets, 0);
        assert_eq!(store.batches, vec![vec![HABITS_KEY.to_string(), STATS_KEY.to_string()]]);
    }

    #[test]
    fn file_store_batch_lands_in_a_single_file() {
        let path = temp_path("batch");
        let mut store = JsonFileStore::open(&path);
        store
            .set_all(vec![(HABITS_KEY, "[]".to_string()), (STATS_KEY, "{}".to_string())])
            .unwrap();

        let on_disk: BTreeMap<String, String> = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(on_disk.get(HABITS_KEY).map(String::as_str), Some("[]"));
        assert_eq!(on_disk.get(STATS_KEY).map(String::as_str), Some("{}"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn file_store_write_failure_is_reported() {
        let dir = temp_path("missing_dir");
        let mut store = JsonFileStore::open(dir.join("nested").join("state.json"));
        let err = store.set(HABITS_KEY, "[]".into()).unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }
}
