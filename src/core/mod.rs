//! Core business logic - framework-agnostic operations over the record
//! store and the text backend.
//!
//! Everything in here is generic over the [`crate::store::RecordStore`] and
//! [`crate::ai::TextGenerator`] traits so the logic can be exercised with
//! substitute implementations. Clients are constructed once at startup and
//! passed in as parameters - never held as ambient or global state.

/// Habit creation and lookup
pub mod habits;
/// Insight pipeline and habit recommendations
pub mod insights;
/// Presentation helpers shared by both front ends
pub mod report;
/// Statistics engine - completion rate, streaks, activity
pub mod stats;
/// Entry recording and window reads
pub mod tracking;
/// User registration
pub mod users;
