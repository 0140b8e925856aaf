//! Statistics engine - derives a [`UserStats`] snapshot from raw entries.
//!
//! All metrics are recomputed from scratch on every request; nothing here is
//! cached or persisted. The snapshot is a total function of the store: if
//! the store is unreachable the engine degrades to a zero-valued snapshot
//! instead of propagating the error.

use crate::{
    core::{habits, tracking},
    models::{HabitEntry, UserStats},
    store::RecordStore,
};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;
use tracing::warn;

/// Trailing window for completion rate and last activity.
pub const DEFAULT_STATS_WINDOW_DAYS: i64 = 30;

/// Lookback for the streak computation, independent of the stats window.
pub const STREAK_LOOKBACK_DAYS: i64 = 365;

/// Fraction of entries in the window that are completed, in [0, 1].
/// An empty window yields 0.0 - no data is not an error.
#[must_use]
pub fn completion_rate(entries: &[HabitEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }

    let completed = entries.iter().filter(|entry| entry.completed).count();
    #[allow(clippy::cast_precision_loss)]
    let rate = completed as f64 / entries.len() as f64;
    rate
}

/// Count of consecutive successful calendar days, walking backward from the
/// most recent date that has any entry.
///
/// A date is successful when at least one of its entries is completed. The
/// walk stops at the first day that is absent from the data or has no
/// successful entry - a gap day with zero entries terminates the streak
/// exactly like a day with only failed entries.
#[must_use]
pub fn current_streak(entries: &[HabitEntry]) -> u32 {
    let mut successful_by_day: BTreeMap<NaiveDate, bool> = BTreeMap::new();
    for entry in entries {
        let day = entry.date.date_naive();
        let slot = successful_by_day.entry(day).or_insert(false);
        *slot = *slot || entry.completed;
    }

    let Some((&latest, _)) = successful_by_day.last_key_value() else {
        return 0;
    };

    let mut streak = 0;
    let mut day = latest;
    while successful_by_day.get(&day).copied().unwrap_or(false) {
        streak += 1;
        let Some(previous) = day.pred_opt() else {
            break;
        };
        day = previous;
    }

    streak
}

/// The newest entry timestamp, or `None` for an empty slice.
#[must_use]
pub fn last_activity(entries: &[HabitEntry]) -> Option<DateTime<Utc>> {
    entries.iter().map(|entry| entry.date).max()
}

/// Produces the statistics snapshot for one user.
///
/// Total from the caller's perspective: store failures degrade each read to
/// an empty collection (logged, never propagated), which yields the
/// zero-valued snapshot.
pub async fn user_stats<S: RecordStore>(store: &S, user_id: &str, window_days: i64) -> UserStats {
    let habits = habits::user_habits(store, user_id).await.unwrap_or_else(|e| {
        warn!(error = %e, user_id, "habit read failed, degrading to empty");
        Vec::new()
    });

    let entries = tracking::user_entries(store, user_id, window_days)
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, user_id, "entry read failed, degrading to empty");
            Vec::new()
        });

    let streak_entries = tracking::user_entries(store, user_id, STREAK_LOOKBACK_DAYS)
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, user_id, "streak read failed, degrading to empty");
            Vec::new()
        });

    let total_habits = habits.len();

    UserStats {
        user_id: user_id.to_string(),
        total_habits,
        // No separate notion of "active" exists yet; every habit counts.
        // See DESIGN.md for the open product question.
        active_habits: total_habits,
        completion_rate: completion_rate(&entries),
        streak_days: current_streak(&streak_entries),
        last_activity: last_activity(&entries).unwrap_or_else(Utc::now),
    }
}
