use dotenvy::dotenv;
use poise::serenity_prelude as serenity;
use std::{env, sync::Arc};
use tower_companion::{
    bot,
    config::{app, database},
    errors::{Error, Result},
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the bot configuration
    let app_config = app::load_default_config()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;
    info!("Successfully processed application configuration.");

    // 4. Connect to the database and make sure the tables exist
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Optional guild for fast command registration during development
    let dev_guild = match env::var("DEV_GUILD_ID") {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(id) => Some(serenity::GuildId::new(id)),
            Err(e) => {
                warn!("Ignoring invalid DEV_GUILD_ID {raw:?}: {e}");
                None
            }
        },
        Err(_) => None,
    };

    // 6. Run the bot
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, db, Arc::new(app_config), dev_guild).await
}
