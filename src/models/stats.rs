//! Derived per-user statistics snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate metrics for one user, recomputed from scratch on every request
/// and never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    /// User the snapshot belongs to
    pub user_id: String,
    /// Number of habits the user has created
    pub total_habits: usize,
    /// Number of active habits. Currently always equal to `total_habits`;
    /// see DESIGN.md for the open product question.
    pub active_habits: usize,
    /// Completed entries / total entries in the stats window, in [0, 1].
    /// 0.0 when the window contains no entries.
    pub completion_rate: f64,
    /// Consecutive calendar days (most recent backward) with at least one
    /// completed entry
    pub streak_days: u32,
    /// Timestamp of the newest entry in the stats window, or the moment of
    /// computation when the window is empty
    pub last_activity: DateTime<Utc>,
}

impl UserStats {
    /// The zero-valued snapshot returned when the record store is
    /// unreachable. `last_activity` is the current instant, matching the
    /// empty-window behavior.
    #[must_use]
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            total_habits: 0,
            active_habits: 0,
            completion_rate: 0.0,
            streak_days: 0,
            last_activity: Utc::now(),
        }
    }
}
