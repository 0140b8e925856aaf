//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggests the invoking user's own habit names as they type, so `/track`
//! does not depend on spelling a habit exactly.

use crate::{bot::BotData, core::habits, errors::Error};

/// Provides autocomplete suggestions for habit names.
///
/// Queries the store for the author's habits and returns up to 25 names
/// matching the partial input, sorted alphabetically. Store failures yield
/// an empty suggestion list - autocomplete is never worth an error.
pub async fn autocomplete_habit_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let user_id = ctx.author().id.to_string();

    let Ok(habit_list) = habits::user_habits(ctx.data().store.as_ref(), &user_id).await else {
        return Vec::new();
    };

    let partial_lower = partial.to_lowercase();

    let mut matching: Vec<String> = habit_list
        .into_iter()
        .map(|habit| habit.name)
        .filter(|name| name.to_lowercase().contains(&partial_lower))
        .take(25) // Discord autocomplete limit
        .collect();

    matching.sort();
    matching
}
