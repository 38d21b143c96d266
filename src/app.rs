use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/habits", get(handlers::list_habits).post(handlers::create_habit))
        .route("/api/habits/:id", put(handlers::edit_habit).delete(handlers::delete_habit))
        .route("/api/habits/:id/complete", post(handlers::complete_habit))
        .route("/api/habits/:id/history", get(handlers::habit_history))
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
