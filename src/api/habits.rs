//! Habit and entry endpoints.

use super::{ApiState, ErrorResponse, bad_request, internal_error};
use crate::{
    core::{habits, tracking},
    errors::Error,
    models::{Habit, HabitEntry, TargetFrequency},
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(super) struct CreateHabitRequest {
    name: String,
    description: Option<String>,
    target_frequency: Option<String>,
    user_id: String,
}

#[derive(Serialize)]
pub(super) struct CreateHabitResponse {
    message: &'static str,
    habit_name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct TrackHabitRequest {
    habit_name: String,
    user_id: String,
    completed: bool,
    notes: Option<String>,
    rating: Option<u8>,
}

#[derive(Serialize)]
pub(super) struct TrackHabitResponse {
    message: &'static str,
    habit_name: String,
    completed: bool,
}

#[derive(Debug, Deserialize)]
pub(super) struct EntriesQuery {
    #[serde(default = "default_entry_days")]
    days: i64,
}

fn default_entry_days() -> i64 {
    30
}

/// `POST /habits` - creates a habit. 400 on duplicates or a bad name.
pub(super) async fn create_habit(
    State(state): State<ApiState>,
    Json(request): Json<CreateHabitRequest>,
) -> Result<Json<CreateHabitResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut habit = Habit::new(request.user_id, request.name.clone());
    habit.description = request.description;
    habit.target_frequency = request
        .target_frequency
        .as_deref()
        .map_or(TargetFrequency::Daily, TargetFrequency::parse);

    match habits::create_habit(state.store.as_ref(), &habit).await {
        Ok(true) => Ok(Json(CreateHabitResponse {
            message: "Habit created",
            habit_name: request.name,
        })),
        Ok(false) => Err(bad_request("Habit already exists")),
        Err(Error::InvalidInput { message }) => Err(bad_request(message)),
        Err(e) => Err(internal_error(e.to_string())),
    }
}

/// `GET /habits/{user_id}` - lists a user's habits.
pub(super) async fn list_habits(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Habit>>, (StatusCode, Json<ErrorResponse>)> {
    habits::user_habits(state.store.as_ref(), &user_id)
        .await
        .map(Json)
        .map_err(|e| internal_error(e.to_string()))
}

/// `POST /habits/track` - records one entry. 400 on an invalid rating.
pub(super) async fn track_habit(
    State(state): State<ApiState>,
    Json(request): Json<TrackHabitRequest>,
) -> Result<Json<TrackHabitResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut entry = HabitEntry::new(request.user_id, request.habit_name.clone(), request.completed);
    entry.notes = request.notes;
    entry.rating = request.rating;

    match tracking::add_entry(state.store.as_ref(), &entry).await {
        Ok(()) => Ok(Json(TrackHabitResponse {
            message: "Progress recorded",
            habit_name: request.habit_name,
            completed: request.completed,
        })),
        Err(Error::InvalidInput { message }) => Err(bad_request(message)),
        Err(e) => Err(internal_error(e.to_string())),
    }
}

/// `GET /entries/{user_id}?days=N` - lists a user's entries in a trailing
/// window (default 30 days).
pub(super) async fn list_entries(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
    Query(query): Query<EntriesQuery>,
) -> Result<Json<Vec<HabitEntry>>, (StatusCode, Json<ErrorResponse>)> {
    tracking::user_entries(state.store.as_ref(), &user_id, query.days)
        .await
        .map(Json)
        .map_err(|e| internal_error(e.to_string()))
}
