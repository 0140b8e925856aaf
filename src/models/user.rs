//! User model - one row per registered chat user.
//!
//! Users are created on first interaction and never deleted. The `user_id`
//! is the chat platform's user ID rendered as a string and is unique across
//! the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user of the habit tracker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Chat platform user ID, unique across the store
    pub user_id: String,
    /// Platform username, if the user has one
    pub username: Option<String>,
    /// First name as reported by the platform
    pub first_name: Option<String>,
    /// Last name as reported by the platform
    pub last_name: Option<String>,
    /// When the user first interacted with the bot
    #[serde(default = "Utc::now")]
    pub joined_at: DateTime<Utc>,
    /// Whether the user is considered active
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl User {
    /// Creates a user joined now with no optional names set.
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: None,
            first_name: None,
            last_name: None,
            joined_at: Utc::now(),
            is_active: true,
        }
    }

    /// Serializes this user into an ordered row of cells matching the
    /// `users` collection header.
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.user_id.clone(),
            self.username.clone().unwrap_or_default(),
            self.first_name.clone().unwrap_or_default(),
            self.last_name.clone().unwrap_or_default(),
            self.joined_at.to_rfc3339(),
            self.is_active.to_string(),
        ]
    }

    /// Parses a stored row back into a user.
    ///
    /// Returns `None` for malformed rows (missing ID or unparseable join
    /// date); callers skip such rows rather than failing the read.
    #[must_use]
    pub fn from_row(row: &[String]) -> Option<Self> {
        let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or_default();

        let user_id = cell(0);
        if user_id.is_empty() {
            return None;
        }

        let joined_at = DateTime::parse_from_rfc3339(cell(4))
            .ok()?
            .with_timezone(&Utc);

        let optional = |s: &str| (!s.is_empty()).then(|| s.to_string());

        Some(Self {
            user_id: user_id.to_string(),
            username: optional(cell(1)),
            first_name: optional(cell(2)),
            last_name: optional(cell(3)),
            joined_at,
            is_active: cell(5).eq_ignore_ascii_case("true"),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_row_round_trip() {
        let mut user = User::new("12345");
        user.username = Some("sam".to_string());

        let parsed = User::from_row(&user.to_row()).unwrap();
        assert_eq!(parsed, user);
    }

    #[test]
    fn test_from_row_missing_id_is_skipped() {
        let row = vec![
            String::new(),
            "sam".to_string(),
            String::new(),
            String::new(),
            Utc::now().to_rfc3339(),
            "true".to_string(),
        ];
        assert!(User::from_row(&row).is_none());
    }

    #[test]
    fn test_from_row_bad_date_is_skipped() {
        let row = vec![
            "12345".to_string(),
            String::new(),
            String::new(),
            String::new(),
            "not-a-date".to_string(),
            "true".to_string(),
        ];
        assert!(User::from_row(&row).is_none());
    }
}
