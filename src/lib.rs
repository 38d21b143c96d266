pub mod app;
pub mod clock;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod stats;
pub mod storage;
pub mod store;
pub mod streak;
pub mod ui;
pub mod state;

pub use app::router;
pub use clock::Clock;
pub use state::AppState;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, resolve_data_path};
pub use store::HabitStore;
