//! AI insight model - short generated text with a category and confidence.
//!
//! Insights are ephemeral: the pipeline builds them per request and returns
//! them straight to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of a generated insight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    /// Encouragement to keep going
    #[default]
    Motivation,
    /// Concrete suggestion to do better
    Improvement,
    /// Observation about the user's data
    Pattern,
    /// Recognition of something accomplished
    Achievement,
}

impl InsightCategory {
    /// Wire form used in API payloads and backend output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Motivation => "motivation",
            Self::Improvement => "improvement",
            Self::Pattern => "pattern",
            Self::Achievement => "achievement",
        }
    }

    /// Parses backend output, defaulting to `Motivation` for anything
    /// missing or unrecognized. Backend output is untrusted free text.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "improvement" => Self::Improvement,
            "pattern" => Self::Pattern,
            "achievement" => Self::Achievement,
            _ => Self::Motivation,
        }
    }
}

/// One generated insight, returned directly to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiInsight {
    /// User the insight was generated for
    pub user_id: String,
    /// The insight text itself
    pub insight: String,
    /// Classification of the insight
    pub category: InsightCategory,
    /// Backend-reported confidence, clamped to [0, 1]
    pub confidence: f64,
    /// When the insight was generated
    pub generated_at: DateTime<Utc>,
}

impl AiInsight {
    /// Builds an insight generated now, clamping `confidence` into [0, 1].
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        insight: impl Into<String>,
        category: InsightCategory,
        confidence: f64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            insight: insight.into(),
            category,
            confidence: confidence.clamp(0.0, 1.0),
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_known_values() {
        assert_eq!(InsightCategory::parse("pattern"), InsightCategory::Pattern);
        assert_eq!(
            InsightCategory::parse("Achievement"),
            InsightCategory::Achievement
        );
        assert_eq!(
            InsightCategory::parse("improvement"),
            InsightCategory::Improvement
        );
    }

    #[test]
    fn test_category_parse_unknown_falls_back_to_motivation() {
        assert_eq!(InsightCategory::parse("wisdom"), InsightCategory::Motivation);
        assert_eq!(InsightCategory::parse(""), InsightCategory::Motivation);
    }

    #[test]
    fn test_confidence_is_clamped() {
        let too_high = AiInsight::new("u", "x", InsightCategory::Motivation, 1.7);
        assert!((too_high.confidence - 1.0).abs() < f64::EPSILON);

        let too_low = AiInsight::new("u", "x", InsightCategory::Motivation, -0.3);
        assert!(too_low.confidence.abs() < f64::EPSILON);
    }
}
