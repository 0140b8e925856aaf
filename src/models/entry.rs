//! Habit entry model - one completion record for a habit on a given date.
//!
//! Entries are append-only and immutable once written. `habit_name` is a
//! free-text reference, not a foreign key - the store never validates it
//! against the habits collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single tracking record: did the user complete a habit at some instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HabitEntry {
    /// Owner's user ID
    pub user_id: String,
    /// Name of the habit this entry refers to (free text, unvalidated)
    pub habit_name: String,
    /// Whether the habit was completed
    pub completed: bool,
    /// When the entry was recorded
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
    /// Optional free-text notes
    pub notes: Option<String>,
    /// Optional self-rating, 1-5 (validated on create, not on read)
    pub rating: Option<u8>,
}

impl HabitEntry {
    /// Creates an entry recorded now.
    #[must_use]
    pub fn new(user_id: impl Into<String>, habit_name: impl Into<String>, completed: bool) -> Self {
        Self {
            user_id: user_id.into(),
            habit_name: habit_name.into(),
            completed,
            date: Utc::now(),
            notes: None,
            rating: None,
        }
    }

    /// Serializes this entry into an ordered row of cells matching the
    /// `entries` collection header.
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.user_id.clone(),
            self.habit_name.clone(),
            self.completed.to_string(),
            self.date.to_rfc3339(),
            self.notes.clone().unwrap_or_default(),
            self.rating.map(|r| r.to_string()).unwrap_or_default(),
        ]
    }

    /// Parses a stored row back into an entry.
    ///
    /// Returns `None` when the date cell is missing or unparseable - the
    /// date is required for every window and streak computation, so rows
    /// without one are skipped rather than surfaced as errors.
    #[must_use]
    pub fn from_row(row: &[String]) -> Option<Self> {
        let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or_default();

        let user_id = cell(0);
        let habit_name = cell(1);
        if user_id.is_empty() || habit_name.is_empty() {
            return None;
        }

        let date = DateTime::parse_from_rfc3339(cell(3))
            .ok()?
            .with_timezone(&Utc);

        let notes = cell(4);

        Some(Self {
            user_id: user_id.to_string(),
            habit_name: habit_name.to_string(),
            completed: cell(2).eq_ignore_ascii_case("true"),
            date,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
            rating: cell(5).parse().ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_row_round_trip() {
        let mut entry = HabitEntry::new("12345", "Morning run", true);
        entry.notes = Some("felt great".to_string());
        entry.rating = Some(4);

        let parsed = HabitEntry::from_row(&entry.to_row()).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_completed_parse_is_case_insensitive() {
        let mut row = HabitEntry::new("12345", "Read", true).to_row();
        row[2] = "True".to_string();
        assert!(HabitEntry::from_row(&row).unwrap().completed);

        row[2] = "FALSE".to_string();
        assert!(!HabitEntry::from_row(&row).unwrap().completed);
    }

    #[test]
    fn test_from_row_bad_date_is_skipped() {
        let mut row = HabitEntry::new("12345", "Read", true).to_row();
        row[3] = "2024-13-45".to_string();
        assert!(HabitEntry::from_row(&row).is_none());
    }

    #[test]
    fn test_from_row_short_row_without_rating() {
        // Trailing empty cells are dropped by the spreadsheet service
        let row: Vec<String> = HabitEntry::new("12345", "Read", false).to_row()[..4].to_vec();
        let parsed = HabitEntry::from_row(&row).unwrap();
        assert_eq!(parsed.rating, None);
        assert_eq!(parsed.notes, None);
    }
}
