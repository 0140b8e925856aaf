//! Insight pipeline - assembles a context summary from the user's data,
//! asks the text backend for structured insights, and defensively parses
//! whatever comes back.
//!
//! The one contract worth stating up front: `generate_insights` and
//! `habit_recommendation` never fail and never return nothing. Every
//! failure - store unreachable, backend unreachable, unparseable output -
//! is absorbed into a usable, if canned, result.

use crate::{
    ai::TextGenerator,
    core::{habits, stats, tracking},
    models::{AiInsight, HabitEntry, InsightCategory, UserStats},
    store::RecordStore,
};
use chrono::Datelike;
use serde::Deserialize;
use tracing::warn;

/// Returned when the user has no entries yet; generation is skipped.
const NO_DATA_INSIGHT: &str =
    "Start logging your habits to unlock personalized insights! 🚀";

/// Returned when the backend call itself fails.
const BACKEND_DOWN_INSIGHT: &str =
    "Keep going! Every day you log your habits is a step toward a better you. 🌟";

/// Recommendation for a user with no habits; the backend is not called.
const STARTER_RECOMMENDATION: &str =
    "Start with simple habits like drinking 8 glasses of water a day or walking for 10 minutes. 💧🚶";

/// Recommendation when the backend call fails.
const FALLBACK_RECOMMENDATION: &str =
    "Consider adding a mindfulness habit like 5 minutes of daily meditation. 🧘";

/// Confidence assigned when the backend omits one or returns something
/// that is not a number.
const DEFAULT_CONFIDENCE: f64 = 0.7;

/// Which weekdays work best and worst for the user, by completed-entry
/// count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeeklyPattern {
    /// Weekday with the most completed entries
    pub best_day: &'static str,
    /// Weekday with the fewest completed entries (among weekdays that have
    /// at least one)
    pub hardest_day: &'static str,
}

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Groups completed entries by weekday and reports the best and hardest
/// days. Returns `None` when no entry in the slice is completed. Ties go to
/// the earlier weekday (Monday first).
#[must_use]
pub fn weekly_pattern(entries: &[HabitEntry]) -> Option<WeeklyPattern> {
    let mut completed_per_weekday = [0u32; 7];
    for entry in entries.iter().filter(|entry| entry.completed) {
        completed_per_weekday[entry.date.weekday().num_days_from_monday() as usize] += 1;
    }

    let mut best: Option<(usize, u32)> = None;
    let mut hardest: Option<(usize, u32)> = None;
    for (index, &count) in completed_per_weekday.iter().enumerate() {
        if count == 0 {
            continue;
        }
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((index, count));
        }
        if hardest.is_none_or(|(_, c)| count < c) {
            hardest = Some((index, count));
        }
    }

    Some(WeeklyPattern {
        best_day: WEEKDAY_NAMES[best?.0],
        hardest_day: WEEKDAY_NAMES[hardest?.0],
    })
}

/// Serializes the user's situation into the natural-language block handed
/// to the backend.
fn build_context(
    habit_names: &[String],
    entries: &[HabitEntry],
    user_stats: &UserStats,
    window_days: i64,
) -> String {
    let completed_count = entries.iter().filter(|entry| entry.completed).count();

    let pattern = weekly_pattern(entries).map_or_else(
        || "Not enough data".to_string(),
        |p| format!("Best day: {}, Hardest day: {}", p.best_day, p.hardest_day),
    );

    format!(
        "User data (last {window_days} days):\n\
         - Habits: {}\n\
         - Total entries: {}\n\
         - Completed entries: {completed_count}\n\
         - Success rate: {:.1}%\n\
         - Current streak: {} days\n\
         - Weekly pattern: {pattern}",
        habit_names.join(", "),
        entries.len(),
        user_stats.completion_rate * 100.0,
        user_stats.streak_days,
    )
}

fn insights_prompt(context: &str) -> String {
    format!(
        "You are an expert habit coach who helps people improve their routines.\n\
         Analyze the user's habit data and provide 3-4 useful, motivating, actionable insights.\n\
         Each insight must be specific, personal, and based on the observed patterns.\n\
         Always keep a positive and constructive tone. Use appropriate emojis.\n\
         \n\
         {context}\n\
         \n\
         Respond ONLY with a valid JSON array in this format:\n\
         [\n\
             {{\n\
                 \"insight\": \"specific and motivating insight message\",\n\
                 \"category\": \"motivation\",\n\
                 \"confidence\": 0.8\n\
             }}\n\
         ]\n\
         \n\
         Valid categories: motivation, improvement, pattern, achievement"
    )
}

/// Removes a Markdown code fence the backend may have wrapped around its
/// JSON output (` ```json ... ``` ` or bare ` ``` ... ``` `).
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") up to the end of the opening line.
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end()
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim()
}

/// One element of the backend's JSON array, before any defaulting.
#[derive(Debug, Deserialize)]
struct RawInsight {
    #[serde(default)]
    insight: String,
    category: Option<String>,
    confidence: Option<serde_json::Value>,
}

/// Parses the backend output into insights. `None` means the output was not
/// a usable JSON array and the caller should fall back to wrapping the raw
/// text.
fn parse_insights(user_id: &str, text: &str) -> Option<Vec<AiInsight>> {
    let cleaned = strip_code_fences(text);
    let raw: Vec<RawInsight> = serde_json::from_str(cleaned).ok()?;
    if raw.is_empty() {
        return None;
    }

    Some(
        raw.into_iter()
            .map(|item| {
                let category = item
                    .category
                    .as_deref()
                    .map_or(InsightCategory::Motivation, InsightCategory::parse);

                let confidence = item
                    .confidence
                    .as_ref()
                    .and_then(|value| {
                        value
                            .as_f64()
                            .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
                    })
                    .unwrap_or(DEFAULT_CONFIDENCE);

                AiInsight::new(user_id, item.insight, category, confidence)
            })
            .collect(),
    )
}

/// Produces an ordered, never-empty sequence of insights for one user.
///
/// Store failures degrade the reads to empty collections, which routes to
/// the no-data branch; backend failures produce a canned insight. No path
/// returns an error or an empty sequence.
pub async fn generate_insights<S: RecordStore, G: TextGenerator>(
    store: &S,
    generator: &G,
    user_id: &str,
    window_days: i64,
) -> Vec<AiInsight> {
    let habit_list = habits::user_habits(store, user_id).await.unwrap_or_else(|e| {
        warn!(error = %e, user_id, "habit read failed, degrading to empty");
        Vec::new()
    });

    let entries = tracking::user_entries(store, user_id, window_days)
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, user_id, "entry read failed, degrading to empty");
            Vec::new()
        });

    if entries.is_empty() {
        return vec![AiInsight::new(
            user_id,
            NO_DATA_INSIGHT,
            InsightCategory::Motivation,
            1.0,
        )];
    }

    let user_stats = stats::user_stats(store, user_id, window_days).await;
    let habit_names: Vec<String> = habit_list.into_iter().map(|habit| habit.name).collect();

    let context = build_context(&habit_names, &entries, &user_stats, window_days);
    let prompt = insights_prompt(&context);

    match generator.complete(&prompt).await {
        Ok(text) => parse_insights(user_id, &text).unwrap_or_else(|| {
            // Not valid structured output - keep the text rather than
            // discarding it.
            vec![AiInsight::new(
                user_id,
                strip_code_fences(&text),
                InsightCategory::Motivation,
                DEFAULT_CONFIDENCE,
            )]
        }),
        Err(e) => {
            warn!(error = %e, user_id, "insight generation failed");
            vec![AiInsight::new(
                user_id,
                BACKEND_DOWN_INSIGHT,
                InsightCategory::Motivation,
                0.5,
            )]
        }
    }
}

fn recommendation_prompt(habit_names: &[String]) -> String {
    format!(
        "The user already has these habits: {}.\n\
         \n\
         Recommend 1-2 new habits that complement them well.\n\
         Keep the answer short and motivating (2 lines at most).\n\
         Include appropriate emojis.",
        habit_names.join(", ")
    )
}

/// Suggests one complementary new habit as free text.
///
/// An empty habit list short-circuits to a fixed starter suggestion without
/// calling the backend; a backend failure yields a different fixed
/// suggestion. Never fails.
pub async fn habit_recommendation<G: TextGenerator>(
    generator: &G,
    habit_names: &[String],
) -> String {
    if habit_names.is_empty() {
        return STARTER_RECOMMENDATION.to_string();
    }

    match generator.complete(&recommendation_prompt(habit_names)).await {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!(error = %e, "recommendation failed");
            FALLBACK_RECOMMENDATION.to_string()
        }
    }
}
