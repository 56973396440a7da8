use crate::error::{config::ConfigError, AppError};

const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

pub struct Config {
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub discord_token: String,

    pub spotify_token_url: String,
    pub spotify_api_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Reads the three secrets the bot needs. Endpoint URLs are fixed.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables are set
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is missing,
    ///   named in the error
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            spotify_client_id: require_env("SPOTIFY_CLIENT_ID")?,
            spotify_client_secret: require_env("SPOTIFY_CLIENT_SECRET")?,
            discord_token: require_env("DISCORD_TOKEN")?,
            spotify_token_url: SPOTIFY_TOKEN_URL.to_string(),
            spotify_api_url: SPOTIFY_API_URL.to_string(),
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
