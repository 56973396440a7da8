use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler, config::Config, error::AppError, service::resolver::SpotifyResolver,
};

/// Builds the Discord client with the bot's event handler.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `resolver` - Track resolver shared by all message events
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Token is malformed or client setup failed
pub async fn init_bot(config: &Config, resolver: SpotifyResolver) -> Result<Client, AppError> {
    // Configure gateway intents - what events the bot will receive
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler::new(resolver))
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Connects to the gateway and processes events until Ctrl+C is received, then
/// shuts down all shards and returns.
///
/// # Arguments
/// - `client` - Client created by `init_bot`
///
/// # Returns
/// - `Ok(())` - The bot was shut down
/// - `Err(AppError)` - Gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }

        tracing::info!("Shutting down Discord bot");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Starting Discord bot (press ctrl+c to exit)");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
