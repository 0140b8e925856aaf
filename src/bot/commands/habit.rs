//! Habit Discord commands - `add_habit` and `habits`.
//!
//! This module contains commands that create habits in the record store and
//! list the ones a user already has.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::habits,
        errors::{Error, Result},
        models::{Habit, TargetFrequency},
    };

    /// Creates a new habit for the command author.
    ///
    /// Habit names are unique per user (case-insensitive). Frequency
    /// defaults to daily; unknown values also fall back to daily.
    #[poise::command(slash_command, prefix_command)]
    pub async fn add_habit(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the habit (e.g., \"Morning run\")"] name: String,
        #[description = "Optional description"] description: Option<String>,
        #[description = "Target frequency: daily, weekly, or monthly"] frequency: Option<String>,
    ) -> Result<()> {
        let user_id = ctx.author().id.to_string();

        let mut habit = Habit::new(user_id, name.clone());
        habit.description = description;
        habit.target_frequency = frequency
            .as_deref()
            .map_or(TargetFrequency::Daily, TargetFrequency::parse);

        match habits::create_habit(ctx.data().store.as_ref(), &habit).await {
            Ok(true) => {
                ctx.say(format!(
                    "✅ Habit '{name}' created!\n\n\
                     Record your progress with `/track {name} done`."
                ))
                .await?;
            }
            Ok(false) => {
                ctx.say(format!(
                    "❌ You already have a habit called '{name}'. Use `/habits` to see your list."
                ))
                .await?;
            }
            Err(Error::InvalidInput { message }) => {
                ctx.say(format!("❌ {message}")).await?;
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }

    /// Lists the command author's habits.
    #[poise::command(slash_command, prefix_command)]
    pub async fn habits(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        let habit_list = habits::user_habits(ctx.data().store.as_ref(), &user_id).await?;

        if habit_list.is_empty() {
            ctx.say(
                "📝 You don't have any habits yet.\n\n\
                 Create your first one with `/add_habit <name>`.",
            )
            .await?;
            return Ok(());
        }

        let mut text = "🎯 **Your current habits:**\n\n".to_string();
        for (i, habit) in habit_list.iter().enumerate() {
            text.push_str(&format!("{}. **{}**\n", i + 1, habit.name));
            if let Some(description) = &habit.description {
                text.push_str(&format!("   📄 {description}\n"));
            }
            text.push_str(&format!(
                "   📅 Frequency: {}\n\n",
                habit.target_frequency.as_str()
            ));
        }
        text.push_str("💡 Use `/track <habit> <status>` to record your progress");

        ctx.say(text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
