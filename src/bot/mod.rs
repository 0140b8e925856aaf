//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the HabitFlow application,
//! including all slash commands, autocomplete handlers, and bot context
//! management.

/// Discord command implementations (habits, tracking, insights, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;

use crate::{ai::GeminiClient, config::AppConfig, errors::Error, store::SheetsStore};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::info;

/// Shared data available to all bot commands: the two external-service
/// clients, constructed once at startup, and the resolved configuration.
pub struct BotData {
    /// Record store client for all collection reads and appends
    pub store: Arc<SheetsStore>,
    /// Generative-text backend client
    pub ai: Arc<GeminiClient>,
    /// Resolved application configuration
    pub config: Arc<AppConfig>,
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            panic!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                tracing::error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {e}");
            }
        }
    }
}

/// Runs the Discord bot until the client exits.
///
/// # Errors
/// Returns an error if the client cannot be built or the gateway connection
/// fails.
pub async fn run_bot(token: String, data: BotData) -> Result<(), serenity::Error> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::ping(),
                commands::help(),
                commands::start(),
                commands::add_habit(),
                commands::habits(),
                commands::track(),
                commands::stats(),
                commands::insights::insights(),
                commands::recommend(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await?;

    info!("Starting bot client...");
    client.start().await
}
