use crate::errors::{AppError, HabitError};
use crate::models::{CompletionResponse, Habit, HabitRequest, HistoryEntry, SummaryResponse};
use crate::state::AppState;
use crate::stats::build_summary_at;
use crate::store::HabitStore;
use crate::streak::validate_target_number;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use std::sync::Arc;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = state.clock.today();
    let store = state.store.lock().await;
    Html(render_index(&today.to_string(), store.habits().len()))
}

pub async fn list_habits(State(state): State<AppState>) -> Json<Vec<Habit>> {
    let store = state.store.lock().await;
    Json(store.habits().to_vec())
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<HabitRequest>,
) -> Result<(StatusCode, Json<Habit>), AppError> {
    let target = validate_target_number(&payload.target_streak)?;
    let now = state.clock.now_millis();
    let habit = mutate(&state, move |store| store.create_habit(&payload.name, target, now)).await?;
    Ok((StatusCode::CREATED, Json(habit)))
}

pub async fn complete_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<CompletionResponse>, AppError> {
    let today = state.clock.today();
    let (habit, stats, outcome) = mutate(&state, move |store| store.complete(id, today)).await?;
    info!(id, %today, ?outcome, "habit completed");
    Ok(Json(CompletionResponse { habit, stats, outcome }))
}

pub async fn edit_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<HabitRequest>,
) -> Result<Json<Habit>, AppError> {
    let target = validate_target_number(&payload.target_streak)?;
    let habit = mutate(&state, move |store| store.edit(id, &payload.name, target)).await?;
    Ok(Json(habit))
}

pub async fn delete_habit(State(state): State<AppState>, Path(id): Path<u64>) -> Result<StatusCode, AppError> {
    mutate(&state, move |store| store.delete(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn habit_history(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(store.history(id)?))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<SummaryResponse> {
    let today = state.clock.today();
    let store = state.store.lock().await;
    Json(build_summary_at(today, store.data()))
}

/// Runs a store mutation on the blocking pool, since every mutation ends in a
/// synchronous write to the storage backend.
async fn mutate<T, F>(state: &AppState, op: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&mut HabitStore) -> Result<T, HabitError> + Send + 'static,
{
    let mut store = Arc::clone(&state.store).lock_owned().await;
    let result = tokio::task::spawn_blocking(move || op(&mut *store))
        .await
        .map_err(AppError::internal)?;
    Ok(result?)
}
