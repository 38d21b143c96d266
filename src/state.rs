use crate::clock::Clock;
use crate::store::HabitStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub clock: Clock,
    pub store: Arc<Mutex<HabitStore>>,
}

impl AppState {
    pub fn new(clock: Clock, store: HabitStore) -> Self {
        Self {
            clock,
            store: Arc::new(Mutex::new(store)),
        }
    }
}
