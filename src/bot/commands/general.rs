//! General Discord commands - start, ping, help.
//! This module contains the onboarding command plus simple utility commands
//! that provide basic bot functionality and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::users,
        errors::{Error, Result},
        models::User,
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Registers the user and shows a welcome message.
    ///
    /// Users are created on their first interaction and never deleted;
    /// calling this again is harmless.
    #[poise::command(slash_command, prefix_command)]
    pub async fn start(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let author = ctx.author();

        let mut user = User::new(author.id.to_string());
        user.username = Some(author.name.clone());
        user.first_name = author.global_name.clone();

        users::create_user(ctx.data().store.as_ref(), &user).await?;

        let name = author.global_name.as_deref().unwrap_or(&author.name);
        ctx.say(format!(
            "🌟 Hi {name}! Welcome to HabitFlow.\n\n\
            I'm your personal assistant for habit tracking. I can help you:\n\n\
            🎯 Create and follow your habits\n\
            📊 Analyze your progress\n\
            🤖 Give you personalized AI insights\n\n\
            **Main commands:**\n\
            `/add_habit` - Add a new habit\n\
            `/habits` - View your current habits\n\
            `/track` - Record progress on a habit\n\
            `/stats` - View your statistics\n\
            `/insights` - Get AI analysis\n\
            `/help` - See all commands\n\n\
            Let's start your journey to better habits! 🚀"
        ))
        .await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**HabitFlow Help**\n\
        Here is a summary of all available commands.\n\n\
        **Habit Commands**\n\
        • `/add_habit <name> [description] [frequency]` - Creates a new habit.\n\
        • `/habits` - Lists your current habits.\n\n\
        **Tracking Commands**\n\
        • `/track <habit> <status> [notes] [rating]` - Records progress.\n\
        \u{2007}Status examples: done, yes, no, skipped.\n\n\
        **Analysis Commands**\n\
        • `/stats` - Your statistics for the last 30 days.\n\
        • `/insights` - Personalized AI analysis of your habits.\n\
        • `/recommend` - AI suggestion for a complementary new habit.\n\n\
        **Utility Commands**\n\
        • `/start` - Register and see the welcome guide.\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
