//! Tracking Discord command - `track`.
//!
//! Records one entry for a habit. The status is free text ("done", "no",
//! "skipped"...) interpreted by the same word list everywhere, so typing
//! `/track Reading done` works the way users expect.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::tracking,
        errors::{Error, Result},
        models::HabitEntry,
    };

    /// Records progress on a habit.
    ///
    /// The habit name is not validated against your habit list - entries
    /// are free-standing records. An optional 1-5 rating and notes can be
    /// attached.
    #[poise::command(slash_command, prefix_command)]
    pub async fn track(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the habit"]
        #[autocomplete = "autocomplete::autocomplete_habit_name"]
        habit_name: String,
        #[description = "Status: done, yes, no, skipped..."] status: String,
        #[description = "Optional notes"] notes: Option<String>,
        #[description = "Optional rating from 1 to 5"] rating: Option<u32>,
    ) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        let completed = tracking::parse_status_text(&status);

        let rating = match rating {
            Some(r) if !(1..=5).contains(&r) => {
                ctx.say("❌ Rating must be between 1 and 5").await?;
                return Ok(());
            }
            Some(r) => u8::try_from(r).ok(),
            None => None,
        };

        let mut entry = HabitEntry::new(user_id, habit_name.clone(), completed);
        entry.notes = notes.or_else(|| Some(format!("Status: {status}")));
        entry.rating = rating;

        tracking::add_entry(ctx.data().store.as_ref(), &entry).await?;

        let emoji = if completed { "✅" } else { "❌" };
        ctx.say(format!(
            "{emoji} **{habit_name}** recorded as '{status}'\n\n\
             📊 Use `/stats` to see your overall progress\n\
             🧠 Use `/insights` for AI analysis"
        ))
        .await?;

        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
