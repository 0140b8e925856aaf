//! Presentation helpers shared by both front ends.
//!
//! These functions turn computed values into user-facing strings - progress
//! bars, streak messages, insight lists. They are framework-agnostic; the
//! bot and the HTTP API both format with them.

use crate::models::{AiInsight, InsightCategory};

/// Renders a completion rate (0.0-1.0) as a text progress bar like
/// `[████████░░] 80.0%`.
#[must_use]
pub fn completion_bar(rate: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped = rate.clamp(0.0, 1.0);

    // Cast safety: clamped ∈ [0, 1], length is small (10-20).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = (clamped * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    format!(
        "[{}{}] {:.1}%",
        "█".repeat(filled),
        "░".repeat(empty),
        rate * 100.0
    )
}

/// Motivational message tier for a streak length.
#[must_use]
pub fn streak_message(streak_days: u32) -> String {
    match streak_days {
        0 => "🌱 Time to start a new streak!".to_string(),
        1 => "🎯 First day done! Keep it up.".to_string(),
        2..=6 => format!("🔥 {streak_days} days in a row. You're doing great!"),
        7..=29 => format!("💪 {streak_days} day streak. You're unstoppable!"),
        _ => format!("🏆 {streak_days} consecutive days. You're a legend!"),
    }
}

/// Emoji matching a completion-rate band.
#[must_use]
pub fn motivational_emoji(completion_rate: f64) -> &'static str {
    if completion_rate >= 0.9 {
        "🏆"
    } else if completion_rate >= 0.7 {
        "🔥"
    } else if completion_rate >= 0.5 {
        "💪"
    } else if completion_rate >= 0.3 {
        "🌱"
    } else {
        "🚀"
    }
}

/// Emoji for an insight category.
#[must_use]
pub const fn category_emoji(category: InsightCategory) -> &'static str {
    match category {
        InsightCategory::Motivation => "💪",
        InsightCategory::Improvement => "📈",
        InsightCategory::Pattern => "🔍",
        InsightCategory::Achievement => "🏆",
    }
}

/// Truncates text to `max_length` characters, appending an ellipsis when
/// anything was cut.
#[must_use]
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_length.saturating_sub(3)).collect();
    format!("{cut}...")
}

/// Formats an insight list as a numbered message block.
#[must_use]
pub fn format_insights(insights: &[AiInsight]) -> String {
    if insights.is_empty() {
        return "🤖 No insights available right now.".to_string();
    }

    let mut formatted = "🧠 **Personalized insights:**\n\n".to_string();
    for (i, insight) in insights.iter().enumerate() {
        formatted.push_str(&format!(
            "{} **{}.** {}\n\n",
            category_emoji(insight.category),
            i + 1,
            insight.insight
        ));
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_bar_full() {
        assert_eq!(completion_bar(1.0, Some(10)), "[██████████] 100.0%");
    }

    #[test]
    fn test_completion_bar_half() {
        assert_eq!(completion_bar(0.5, Some(10)), "[█████░░░░░] 50.0%");
    }

    #[test]
    fn test_completion_bar_zero() {
        assert_eq!(completion_bar(0.0, Some(10)), "[░░░░░░░░░░] 0.0%");
    }

    #[test]
    fn test_streak_message_tiers() {
        assert!(streak_message(0).contains("new streak"));
        assert!(streak_message(1).contains("First day"));
        assert!(streak_message(5).contains("5 days"));
        assert!(streak_message(10).contains("10 day streak"));
        assert!(streak_message(40).contains("legend"));
    }

    #[test]
    fn test_motivational_emoji_bands() {
        assert_eq!(motivational_emoji(0.95), "🏆");
        assert_eq!(motivational_emoji(0.75), "🔥");
        assert_eq!(motivational_emoji(0.55), "💪");
        assert_eq!(motivational_emoji(0.35), "🌱");
        assert_eq!(motivational_emoji(0.1), "🚀");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a longer sentence", 10), "a longe...");
    }

    #[test]
    fn test_format_insights_empty() {
        assert!(format_insights(&[]).contains("No insights"));
    }

    #[test]
    fn test_format_insights_numbered_with_category_emoji() {
        let insights = vec![
            AiInsight::new("u1", "Nice streak", InsightCategory::Achievement, 0.9),
            AiInsight::new("u1", "Try mornings", InsightCategory::Improvement, 0.8),
        ];

        let formatted = format_insights(&insights);
        assert!(formatted.contains("🏆 **1.** Nice streak"));
        assert!(formatted.contains("📈 **2.** Try mornings"));
    }
}
