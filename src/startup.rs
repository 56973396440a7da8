//! Construction of the clients the bot depends on.
//!
//! Everything here runs once in `main` before the Discord client starts. Failures
//! are returned as `AppError` so a misconfigured bot never connects to the gateway.

use oauth2::{basic::BasicClient, ClientId, ClientSecret, EndpointNotSet, EndpointSet, TokenUrl};

use crate::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::{
        apple_music::AppleMusicClient, resolver::SpotifyResolver, spotify::SpotifyClient,
    },
};

/// Type alias for the OAuth2 client configured for Spotify's client credentials flow.
///
/// Only the token endpoint is set; the bot never sends users through an
/// authorization page.
pub(crate) type SpotifyOAuthClient =
    BasicClient<EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Creates the HTTP client used for Apple Music pages and Spotify API requests.
///
/// Uses reqwest defaults (redirects followed, no request timeout); per-message
/// deadlines are applied by the callers.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("atos/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Creates the HTTP client used for OAuth2 token requests.
///
/// Redirects are disabled, as oauth2 requires, so the token endpoint cannot
/// bounce credentials to another host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_oauth_http_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Creates the OAuth2 client for Spotify's client credentials flow.
///
/// # Arguments
/// - `config` - Application configuration containing the Spotify credentials
///
/// # Returns
/// - `Ok(SpotifyOAuthClient)` - Client with the token endpoint set
/// - `Err(AppError::ConfigErr(InvalidEndpoint))` - Token URL failed to parse
pub fn setup_oauth_client(config: &Config) -> Result<SpotifyOAuthClient, AppError> {
    let token_url = TokenUrl::new(config.spotify_token_url.clone()).map_err(|e| {
        ConfigError::InvalidEndpoint {
            url: config.spotify_token_url.clone(),
            source: e,
        }
    })?;

    let client = BasicClient::new(ClientId::new(config.spotify_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.spotify_client_secret.clone()))
        .set_token_uri(token_url);

    Ok(client)
}

/// Builds the track resolver and verifies the Spotify credentials.
///
/// Fetches the first access token eagerly so invalid credentials stop the bot at
/// startup instead of surfacing as a search error on every message.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(SpotifyResolver)` - Resolver with a valid Spotify token cached
/// - `Err(AppError::AuthErr)` - Spotify rejected the credentials
/// - `Err(AppError)` - Client construction failed
pub async fn setup_resolver(config: &Config) -> Result<SpotifyResolver, AppError> {
    let http_client = setup_reqwest_client()?;
    let oauth_http_client = setup_oauth_http_client()?;
    let oauth_client = setup_oauth_client(config)?;

    let spotify = SpotifyClient::new(
        http_client.clone(),
        oauth_http_client,
        oauth_client,
        config.spotify_api_url.clone(),
    );
    spotify.refresh_token().await?;

    Ok(SpotifyResolver::new(
        AppleMusicClient::new(http_client),
        spotify,
    ))
}
