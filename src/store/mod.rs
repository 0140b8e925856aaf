//! Record store abstraction - append-only access to the three collections
//! (users, habits, entries) held in an external spreadsheet-like service.
//!
//! The store exposes exactly two operations per collection: append one row,
//! or read every row. There is no update, delete, filter, or pagination -
//! callers always receive the full collection and narrow it themselves.
//! The production implementation is [`SheetsStore`]; tests substitute an
//! in-memory implementation through the [`RecordStore`] trait.

pub mod sheets;

pub use sheets::SheetsStore;

use crate::errors::Result;

/// One stored row: an ordered list of string cells.
pub type Row = Vec<String>;

/// The three record collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Registered users
    Users,
    /// Habits created by users
    Habits,
    /// Habit tracking entries
    Entries,
}

impl Collection {
    /// All collections, in initialization order.
    pub const ALL: [Self; 3] = [Self::Users, Self::Habits, Self::Entries];

    /// Worksheet title for this collection.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Habits => "habits",
            Self::Entries => "entries",
        }
    }

    /// Header row written when the worksheet is first created.
    #[must_use]
    pub const fn header(self) -> &'static [&'static str] {
        match self {
            Self::Users => &[
                "user_id",
                "username",
                "first_name",
                "last_name",
                "joined_at",
                "is_active",
            ],
            Self::Habits => &[
                "user_id",
                "name",
                "description",
                "target_frequency",
                "created_at",
            ],
            Self::Entries => &["user_id", "habit_name", "completed", "date", "notes", "rating"],
        }
    }
}

/// Append-and-read-all access to the record collections.
///
/// Implementations must expose append semantics only - no update or delete.
/// `read_all` returns the data rows; the header row is never included.
#[allow(async_fn_in_trait)]
pub trait RecordStore: Send + Sync {
    /// Appends one row to the end of a collection.
    async fn append(&self, collection: Collection, row: Row) -> Result<()>;

    /// Reads every data row of a collection. Full-collection read on every
    /// call - there is no incremental query.
    async fn read_all(&self, collection: Collection) -> Result<Vec<Row>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_titles() {
        assert_eq!(Collection::Users.title(), "users");
        assert_eq!(Collection::Habits.title(), "habits");
        assert_eq!(Collection::Entries.title(), "entries");
    }

    #[test]
    fn test_headers_match_row_widths() {
        assert_eq!(Collection::Users.header().len(), 6);
        assert_eq!(Collection::Habits.header().len(), 5);
        assert_eq!(Collection::Entries.header().len(), 6);
    }
}
