//! Habit business logic - creation, validation, and lookup.
//!
//! A habit is unique per (user_id, lower-cased name). The uniqueness check
//! reads the full collection and then appends without any lock, so two
//! near-simultaneous creations can both pass the check and produce a
//! duplicate. That race is an accepted limitation of the append-only store,
//! demonstrated (not fixed) in the tests below.

use crate::{
    errors::{Error, Result},
    models::Habit,
    store::{Collection, RecordStore},
};

const MIN_NAME_LENGTH: usize = 2;
const MAX_NAME_LENGTH: usize = 50;
const FORBIDDEN_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Validates a habit name: trimmed length within bounds, no path or shell
/// metacharacters.
///
/// # Errors
/// Returns [`Error::InvalidInput`] describing the first failed rule.
pub fn validate_habit_name(name: &str) -> Result<()> {
    let trimmed = name.trim();

    if trimmed.len() < MIN_NAME_LENGTH {
        return Err(Error::InvalidInput {
            message: format!("habit name must be at least {MIN_NAME_LENGTH} characters"),
        });
    }

    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(Error::InvalidInput {
            message: format!("habit name must be at most {MAX_NAME_LENGTH} characters"),
        });
    }

    if trimmed.contains(FORBIDDEN_CHARS) {
        return Err(Error::InvalidInput {
            message: "habit name contains forbidden characters".to_string(),
        });
    }

    Ok(())
}

/// Creates a habit, unless the user already has one with the same name
/// (case-insensitive).
///
/// Returns `Ok(true)` if the habit was appended, `Ok(false)` if a duplicate
/// already exists.
///
/// # Errors
/// Returns [`Error::InvalidInput`] for a bad name, or a store error if the
/// collection cannot be read or written.
pub async fn create_habit<S: RecordStore>(store: &S, habit: &Habit) -> Result<bool> {
    validate_habit_name(&habit.name)?;

    let wanted = habit.name.trim().to_lowercase();
    let rows = store.read_all(Collection::Habits).await?;

    let exists = rows
        .iter()
        .filter_map(|row| Habit::from_row(row))
        .any(|existing| existing.user_id == habit.user_id && existing.name.to_lowercase() == wanted);

    if exists {
        return Ok(false);
    }

    let mut record = habit.clone();
    record.name = habit.name.trim().to_string();
    store.append(Collection::Habits, record.to_row()).await?;
    Ok(true)
}

/// Returns every habit belonging to `user_id`, in insertion order.
/// Malformed rows are skipped.
///
/// # Errors
/// Returns an error if the store cannot be read.
pub async fn user_habits<S: RecordStore>(store: &S, user_id: &str) -> Result<Vec<Habit>> {
    let rows = store.read_all(Collection::Habits).await?;

    Ok(rows
        .iter()
        .filter_map(|row| Habit::from_row(row))
        .filter(|habit| habit.user_id == user_id)
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_validate_habit_name() {
        assert!(validate_habit_name("Morning run").is_ok());
        assert!(validate_habit_name("  ok  ").is_ok());

        assert!(validate_habit_name("x").is_err());
        assert!(validate_habit_name(&"x".repeat(51)).is_err());
        assert!(validate_habit_name("read/write").is_err());
        assert!(validate_habit_name("what?").is_err());
    }

    #[tokio::test]
    async fn test_create_habit_rejects_duplicate_case_insensitive() -> Result<()> {
        let store = MemoryStore::new();

        assert!(create_habit(&store, &Habit::new("u1", "Morning Run")).await?);
        assert!(!create_habit(&store, &Habit::new("u1", "morning run")).await?);

        // Same name for a different user is fine
        assert!(create_habit(&store, &Habit::new("u2", "Morning Run")).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_habit_trims_name() -> Result<()> {
        let store = MemoryStore::new();
        create_habit(&store, &Habit::new("u1", "  Reading  ")).await?;

        let habits = user_habits(&store, "u1").await?;
        assert_eq!(habits[0].name, "Reading");
        Ok(())
    }

    #[tokio::test]
    async fn test_user_habits_filters_by_owner() -> Result<()> {
        let store = MemoryStore::new();
        create_habit(&store, &Habit::new("u1", "Reading")).await?;
        create_habit(&store, &Habit::new("u2", "Running")).await?;

        let habits = user_habits(&store, "u1").await?;
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].name, "Reading");
        Ok(())
    }

    /// The duplicate check is read-then-append with no lock. A store whose
    /// reads lag its writes (two callers racing) lets both creations pass
    /// the existence check - the accepted limitation, on record.
    #[tokio::test]
    async fn test_duplicate_check_races_under_stale_reads() -> Result<()> {
        let store = StaleReadStore::new();

        assert!(create_habit(&store, &Habit::new("u1", "Reading")).await?);
        assert!(create_habit(&store, &Habit::new("u1", "Reading")).await?);

        // Both appends landed: the collection now holds a duplicate.
        assert_eq!(store.appended_count(Collection::Habits), 2);
        Ok(())
    }
}
