//! Shared test utilities for HabitFlow.
//!
//! This module provides substitute implementations of the two external
//! services (record store, text backend) plus helper builders for entries
//! with controlled dates.

use crate::{
    ai::TextGenerator,
    core::{habits::create_habit, tracking::add_entry},
    errors::{Error, Result},
    models::{Habit, HabitEntry},
    store::{Collection, RecordStore, Row},
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory record store with real append-and-read-all semantics.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<HashMap<Collection, Vec<Row>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    async fn append(&self, collection: Collection, row: Row) -> Result<()> {
        self.rows
            .lock()
            .expect("store lock poisoned")
            .entry(collection)
            .or_default()
            .push(row);
        Ok(())
    }

    async fn read_all(&self, collection: Collection) -> Result<Vec<Row>> {
        Ok(self
            .rows
            .lock()
            .expect("store lock poisoned")
            .get(&collection)
            .cloned()
            .unwrap_or_default())
    }
}

/// Store whose every operation fails, for exercising the degrade-to-empty
/// policy.
#[derive(Debug, Default)]
pub struct FailingStore;

impl RecordStore for FailingStore {
    async fn append(&self, _collection: Collection, _row: Row) -> Result<()> {
        Err(Error::Store {
            message: "record store unreachable".to_string(),
        })
    }

    async fn read_all(&self, _collection: Collection) -> Result<Vec<Row>> {
        Err(Error::Store {
            message: "record store unreachable".to_string(),
        })
    }
}

/// Store that accepts appends but always reads back empty, modeling the
/// window in which a second writer's read does not yet see the first
/// writer's append. Lets tests demonstrate the read-then-append duplicate
/// race deterministically.
#[derive(Debug, Default)]
pub struct StaleReadStore {
    appended: Mutex<HashMap<Collection, Vec<Row>>>,
}

impl StaleReadStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows appended to a collection so far.
    #[must_use]
    pub fn appended_count(&self, collection: Collection) -> usize {
        self.appended
            .lock()
            .expect("store lock poisoned")
            .get(&collection)
            .map_or(0, Vec::len)
    }
}

impl RecordStore for StaleReadStore {
    async fn append(&self, collection: Collection, row: Row) -> Result<()> {
        self.appended
            .lock()
            .expect("store lock poisoned")
            .entry(collection)
            .or_default()
            .push(row);
        Ok(())
    }

    async fn read_all(&self, _collection: Collection) -> Result<Vec<Row>> {
        Ok(Vec::new())
    }
}

/// Scripted text generator that records how many times it was called.
#[derive(Debug)]
pub struct MockGenerator {
    response: Option<String>,
    calls: AtomicUsize,
}

impl MockGenerator {
    /// Generator that always returns `text`.
    #[must_use]
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Generator whose every call fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `complete` calls so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextGenerator for MockGenerator {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone().ok_or_else(|| Error::Ai {
            message: "backend unreachable".to_string(),
        })
    }
}

/// Builds an entry dated `days` days before now.
#[must_use]
pub fn entry_days_ago(user_id: &str, habit_name: &str, days: i64, completed: bool) -> HabitEntry {
    let mut entry = HabitEntry::new(user_id, habit_name, completed);
    entry.date = Utc::now() - Duration::days(days);
    entry
}

/// Builds an entry at noon UTC on a specific calendar date.
#[must_use]
pub fn entry_on_date(
    user_id: &str,
    habit_name: &str,
    date: NaiveDate,
    completed: bool,
) -> HabitEntry {
    let mut entry = HabitEntry::new(user_id, habit_name, completed);
    let noon = date.and_hms_opt(12, 0, 0).expect("valid time");
    entry.date = Utc.from_utc_datetime(&noon);
    entry
}

/// Sets up a store with one habit and a few recent entries for `user_id`.
/// The standard fixture for insight pipeline tests.
pub async fn seeded_store(user_id: &str) -> Result<MemoryStore> {
    let store = MemoryStore::new();
    create_habit(&store, &Habit::new(user_id, "Run")).await?;
    add_entry(&store, &entry_days_ago(user_id, "Run", 0, true)).await?;
    add_entry(&store, &entry_days_ago(user_id, "Run", 1, true)).await?;
    add_entry(&store, &entry_days_ago(user_id, "Run", 2, false)).await?;
    Ok(store)
}
