mod bot;
mod config;
mod error;
mod model;
mod service;
mod startup;

use dioxus_logger::tracing;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

/// Loads configuration, verifies credentials and runs the bot until interrupted.
async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    tracing::info!("Starting up");

    let resolver = startup::setup_resolver(&config).await?;
    let client = bot::start::init_bot(&config, resolver).await?;

    bot::start::start_bot(client).await?;

    tracing::info!("Discord bot stopped");

    Ok(())
}
