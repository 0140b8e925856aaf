//! Entry recording and window reads.
//!
//! Entries are append-only and immutable. Reads always fetch the full
//! collection and narrow to one user and a trailing window; rows with
//! malformed dates are skipped silently rather than failing the read.

use crate::{
    errors::{Error, Result},
    models::HabitEntry,
    store::{Collection, RecordStore},
};
use chrono::{Duration, Utc};

/// Status words a user may type that count as "completed".
const POSITIVE_STATUSES: [&str; 9] = [
    "done", "yes", "y", "completed", "complete", "finished", "ok", "true", "✅",
];

/// Interprets a free-text status ("done", "no", "skipped"...) as a
/// completed flag. Anything not in the positive list counts as not
/// completed.
#[must_use]
pub fn parse_status_text(status: &str) -> bool {
    let normalized = status.trim().to_lowercase();
    POSITIVE_STATUSES.contains(&normalized.as_str())
}

/// Appends one tracking entry. No duplicate check - a user may record the
/// same habit several times a day.
///
/// # Errors
/// Returns [`Error::InvalidInput`] if `rating` is outside 1-5, or a store
/// error if the append fails.
pub async fn add_entry<S: RecordStore>(store: &S, entry: &HabitEntry) -> Result<()> {
    if let Some(rating) = entry.rating {
        if !(1..=5).contains(&rating) {
            return Err(Error::InvalidInput {
                message: format!("rating must be between 1 and 5, got {rating}"),
            });
        }
    }

    store.append(Collection::Entries, entry.to_row()).await
}

/// Returns every entry for `user_id` recorded within the trailing `days`
/// window, oldest first as stored. Malformed rows are skipped.
///
/// # Errors
/// Returns an error if the store cannot be read.
pub async fn user_entries<S: RecordStore>(
    store: &S,
    user_id: &str,
    days: i64,
) -> Result<Vec<HabitEntry>> {
    let rows = store.read_all(Collection::Entries).await?;
    let cutoff = Utc::now() - Duration::days(days);

    Ok(rows
        .iter()
        .filter_map(|row| HabitEntry::from_row(row))
        .filter(|entry| entry.user_id == user_id && entry.date >= cutoff)
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_parse_status_text() {
        assert!(parse_status_text("done"));
        assert!(parse_status_text("  Yes "));
        assert!(parse_status_text("COMPLETED"));
        assert!(parse_status_text("✅"));

        assert!(!parse_status_text("no"));
        assert!(!parse_status_text("skipped"));
        assert!(!parse_status_text(""));
    }

    #[tokio::test]
    async fn test_add_entry_validates_rating() {
        let store = MemoryStore::new();

        let mut entry = HabitEntry::new("u1", "Reading", true);
        entry.rating = Some(6);
        let result = add_entry(&store, &entry).await;
        assert!(matches!(result, Err(Error::InvalidInput { .. })));

        entry.rating = Some(0);
        let result = add_entry(&store, &entry).await;
        assert!(matches!(result, Err(Error::InvalidInput { .. })));

        entry.rating = Some(3);
        assert!(add_entry(&store, &entry).await.is_ok());
    }

    #[tokio::test]
    async fn test_user_entries_window_and_owner_filter() -> Result<()> {
        let store = MemoryStore::new();

        add_entry(&store, &entry_days_ago("u1", "Reading", 2, true)).await?;
        add_entry(&store, &entry_days_ago("u1", "Reading", 45, true)).await?;
        add_entry(&store, &entry_days_ago("u2", "Running", 1, true)).await?;

        let entries = user_entries(&store, "u1", 30).await?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].habit_name, "Reading");

        // The wider window picks up the old entry too
        let entries = user_entries(&store, "u1", 365).await?;
        assert_eq!(entries.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_user_entries_skips_malformed_rows() -> Result<()> {
        let store = MemoryStore::new();
        add_entry(&store, &entry_days_ago("u1", "Reading", 1, true)).await?;

        // A row with an unparseable date sits alongside the good one
        let mut bad = HabitEntry::new("u1", "Reading", true).to_row();
        bad[3] = "yesterday-ish".to_string();
        store.append(Collection::Entries, bad).await?;

        let entries = user_entries(&store, "u1", 30).await?;
        assert_eq!(entries.len(), 1);
        Ok(())
    }
}
