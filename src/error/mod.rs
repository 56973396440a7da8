//! Error types for the bot.
//!
//! Errors are split by concern. Startup errors (`ConfigError`, `AuthError`, serenity
//! client errors) converge on `AppError` and terminate the process before any event
//! is handled. Per-message errors (`ResolveError`, `PlatformError`) never leave the
//! message handler: they are logged and the handler degrades to doing less.

pub mod auth;
pub mod config;
pub mod platform;
pub mod resolve;

use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError};

/// Top-level application error type.
///
/// Aggregates the errors that can abort startup. Every variant is fatal; the bot
/// exits with the error's message rather than running half-configured.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while loading environment variables.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Spotify client credentials could not be exchanged for an access token.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord client error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
