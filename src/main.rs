use dotenvy::dotenv;
use habitflow::ai::GeminiClient;
use habitflow::errors::{Error, Result};
use habitflow::store::SheetsStore;
use habitflow::{api, bot, config};
use std::{env, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Initialize the record store (creates missing worksheets)
    let store = SheetsStore::new(&app_config.spreadsheet_id, &app_config.sheets_token)?;
    store
        .initialize()
        .await
        .inspect(|_| info!("Record store initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize record store: {}", e))?;

    // 5. Build the AI client
    let ai = GeminiClient::new(&app_config.gemini_api_key, &app_config.gemini_model)?;

    let config = Arc::new(app_config);
    let store = Arc::new(store);
    let ai = Arc::new(ai);

    // 6. Run the HTTP API alongside the bot
    let api_state = api::ApiState {
        store: Arc::clone(&store),
        ai: Arc::clone(&ai),
        config: Arc::clone(&config),
    };
    let api_addr = format!("{}:{}", config.api_host, config.api_port);
    tokio::spawn(async move {
        if let Err(e) = api::serve(api_addr, api_state).await {
            error!("HTTP API server exited: {}", e);
        }
    });

    // 7. Run the bot
    // DISCORD_BOT_TOKEN is loaded here, directly before use, not stored in AppConfig
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, bot::BotData { store, ai, config })
        .await
        .map_err(Error::from)?;

    Ok(())
}
