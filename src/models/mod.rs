//! Domain model definitions for the record store collections and the
//! derived/ephemeral types computed from them.
//!
//! `User`, `Habit`, and `HabitEntry` map to rows in the spreadsheet-backed
//! record store; `UserStats` and `AiInsight` are computed on every request
//! and never persisted.

pub mod entry;
pub mod habit;
pub mod insight;
pub mod stats;
pub mod user;

pub use entry::HabitEntry;
pub use habit::{Habit, TargetFrequency};
pub use insight::{AiInsight, InsightCategory};
pub use stats::UserStats;
pub use user::User;
