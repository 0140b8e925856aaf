//! Habit model - one row per habit a user is tracking.
//!
//! A habit is identified by the (user_id, lower-cased name) pair. Habits are
//! created explicitly and have no update or delete lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How often a habit is meant to be performed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFrequency {
    /// Once per day
    #[default]
    Daily,
    /// Once per week
    Weekly,
    /// Once per month
    Monthly,
}

impl TargetFrequency {
    /// Wire form used in stored rows and API payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Parses the wire form, falling back to `Daily` for anything
    /// unrecognized. Stored rows are untrusted input; an unknown frequency
    /// is not worth dropping the whole habit over.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            _ => Self::Daily,
        }
    }
}

/// A habit a user is tracking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Owner's user ID
    pub user_id: String,
    /// Human-readable habit name (e.g., "Morning run")
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Target frequency for this habit
    #[serde(default)]
    pub target_frequency: TargetFrequency,
    /// When the habit was created
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Creates a daily habit owned by `user_id`, created now.
    #[must_use]
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            description: None,
            target_frequency: TargetFrequency::Daily,
            created_at: Utc::now(),
        }
    }

    /// Serializes this habit into an ordered row of cells matching the
    /// `habits` collection header.
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.user_id.clone(),
            self.name.clone(),
            self.description.clone().unwrap_or_default(),
            self.target_frequency.as_str().to_string(),
            self.created_at.to_rfc3339(),
        ]
    }

    /// Parses a stored row back into a habit, returning `None` for
    /// malformed rows.
    #[must_use]
    pub fn from_row(row: &[String]) -> Option<Self> {
        let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or_default();

        let user_id = cell(0);
        let name = cell(1);
        if user_id.is_empty() || name.is_empty() {
            return None;
        }

        let created_at = DateTime::parse_from_rfc3339(cell(4))
            .ok()?
            .with_timezone(&Utc);

        let description = cell(2);

        Some(Self {
            user_id: user_id.to_string(),
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            target_frequency: TargetFrequency::parse(cell(3)),
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_frequency_parse_known_values() {
        assert_eq!(TargetFrequency::parse("daily"), TargetFrequency::Daily);
        assert_eq!(TargetFrequency::parse("Weekly"), TargetFrequency::Weekly);
        assert_eq!(TargetFrequency::parse(" monthly "), TargetFrequency::Monthly);
    }

    #[test]
    fn test_frequency_parse_unknown_falls_back_to_daily() {
        assert_eq!(TargetFrequency::parse("fortnightly"), TargetFrequency::Daily);
        assert_eq!(TargetFrequency::parse(""), TargetFrequency::Daily);
    }

    #[test]
    fn test_row_round_trip() {
        let mut habit = Habit::new("12345", "Morning run");
        habit.description = Some("5km before work".to_string());
        habit.target_frequency = TargetFrequency::Weekly;

        let parsed = Habit::from_row(&habit.to_row()).unwrap();
        assert_eq!(parsed, habit);
    }

    #[test]
    fn test_from_row_missing_name_is_skipped() {
        let row = vec![
            "12345".to_string(),
            String::new(),
            String::new(),
            "daily".to_string(),
            Utc::now().to_rfc3339(),
        ];
        assert!(Habit::from_row(&row).is_none());
    }
}
