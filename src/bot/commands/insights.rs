//! Analysis Discord commands - `stats`, `insights`, and `recommend`.
//!
//! These commands sit on the two derived read surfaces. Both surfaces are
//! total functions: a store or backend failure shows up as degraded content
//! (zeroed stats, canned insight text), never as a command error.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::{habits, insights, report, stats},
        errors::{Error, Result},
    };

    /// Shows the author's statistics for the configured window.
    #[poise::command(slash_command, prefix_command)]
    pub async fn stats(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let user_id = ctx.author().id.to_string();
        let window_days = data.config.stats_window_days;

        let user_stats = stats::user_stats(data.store.as_ref(), &user_id, window_days).await;

        let text = format!(
            "📊 **Your statistics (last {window_days} days)**\n\n\
             🎯 Total habits: **{}**\n\
             ✅ Active habits: **{}**\n\
             📈 Success rate: **{}**\n\
             🔥 {}\n\
             🕐 Last activity: **{}**\n\n\
             {} Keep logging - every entry counts.\n\n\
             💡 Use `/insights` for personalized AI analysis",
            user_stats.total_habits,
            user_stats.active_habits,
            report::completion_bar(user_stats.completion_rate, None),
            report::streak_message(user_stats.streak_days),
            user_stats.last_activity.format("%d/%m/%Y"),
            report::motivational_emoji(user_stats.completion_rate),
        );

        ctx.say(text).await?;
        Ok(())
    }

    /// Runs the AI insight pipeline for the author and shows the results.
    ///
    /// A new-habit recommendation is appended when they have habits.
    #[poise::command(slash_command, prefix_command)]
    pub async fn insights(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let user_id = ctx.author().id.to_string();

        // The backend call can take a few seconds; keep the interaction alive.
        ctx.defer().await?;

        let generated = insights::generate_insights(
            data.store.as_ref(),
            data.ai.as_ref(),
            &user_id,
            data.config.stats_window_days,
        )
        .await;

        let mut text = report::format_insights(&generated);

        let habit_names: Vec<String> = habits::user_habits(data.store.as_ref(), &user_id)
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|habit| habit.name)
            .collect();

        if !habit_names.is_empty() {
            let recommendation =
                insights::habit_recommendation(data.ai.as_ref(), &habit_names).await;
            text.push_str(&format!(
                "🎯 **New habit recommendation:**\n{recommendation}"
            ));
        }

        ctx.say(text).await?;
        Ok(())
    }

    /// Asks the AI backend for one complementary new habit.
    #[poise::command(slash_command, prefix_command)]
    pub async fn recommend(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let user_id = ctx.author().id.to_string();

        ctx.defer().await?;

        let habit_names: Vec<String> = habits::user_habits(data.store.as_ref(), &user_id)
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|habit| habit.name)
            .collect();

        let recommendation = insights::habit_recommendation(data.ai.as_ref(), &habit_names).await;

        ctx.say(format!("🎯 **Recommendation:**\n{recommendation}"))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
