//! Stats, insight, recommendation, and dashboard endpoints.
//!
//! Everything here sits on total core operations: these endpoints always
//! answer 200 with degraded content rather than surface a failure.

use super::ApiState;
use crate::{
    core::{habits, insights, stats, tracking},
    models::{AiInsight, Habit, HabitEntry, UserStats},
};
use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use tracing::warn;

#[derive(Serialize)]
pub(super) struct RecommendationResponse {
    user_id: String,
    current_habits: Vec<String>,
    recommendation: String,
}

#[derive(Serialize)]
pub(super) struct DashboardResponse {
    user_id: String,
    habits: Vec<Habit>,
    entries: Vec<HabitEntry>,
    stats: UserStats,
    insights: Vec<AiInsight>,
    last_updated: String,
}

/// `GET /stats/{user_id}` - statistics snapshot. Store failures yield the
/// zero-valued snapshot.
pub(super) async fn get_stats(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
) -> Json<UserStats> {
    Json(stats::user_stats(state.store.as_ref(), &user_id, state.config.stats_window_days).await)
}

/// `GET /insights/{user_id}` - AI insights, never empty.
pub(super) async fn get_insights(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
) -> Json<Vec<AiInsight>> {
    Json(
        insights::generate_insights(
            state.store.as_ref(),
            state.ai.as_ref(),
            &user_id,
            state.config.stats_window_days,
        )
        .await,
    )
}

/// `GET /recommendations/{user_id}` - one complementary-habit suggestion.
pub(super) async fn get_recommendation(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
) -> Json<RecommendationResponse> {
    let habit_names: Vec<String> = habits::user_habits(state.store.as_ref(), &user_id)
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, user_id, "habit read failed, degrading to empty");
            Vec::new()
        })
        .into_iter()
        .map(|habit| habit.name)
        .collect();

    let recommendation = insights::habit_recommendation(state.ai.as_ref(), &habit_names).await;

    Json(RecommendationResponse {
        user_id,
        current_habits: habit_names,
        recommendation,
    })
}

/// `GET /dashboard/{user_id}` - everything the web dashboard needs in one
/// call. Each piece degrades independently.
pub(super) async fn get_dashboard(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
) -> Json<DashboardResponse> {
    let window_days = state.config.stats_window_days;

    let habit_list = habits::user_habits(state.store.as_ref(), &user_id)
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, user_id, "habit read failed, degrading to empty");
            Vec::new()
        });

    let entries = tracking::user_entries(state.store.as_ref(), &user_id, window_days)
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, user_id, "entry read failed, degrading to empty");
            Vec::new()
        });

    let user_stats = stats::user_stats(state.store.as_ref(), &user_id, window_days).await;

    let generated = insights::generate_insights(
        state.store.as_ref(),
        state.ai.as_ref(),
        &user_id,
        window_days,
    )
    .await;

    Json(DashboardResponse {
        user_id,
        habits: habit_list,
        entries,
        stats: user_stats,
        insights: generated,
        last_updated: Utc::now().to_rfc3339(),
    })
}
