//! Spotify Web API track search.
//!
//! Authenticates with the client credentials flow through the oauth2 crate and
//! queries `GET /v1/search` for tracks. The access token is cached and replaced
//! shortly before it expires; the first token is fetched at startup so bad
//! credentials are caught before the bot connects.

use std::time::Duration;

use dioxus_logger::tracing;
use oauth2::TokenResponse;
use serde::Deserialize;
use serenity::async_trait;
use tokio::{sync::RwLock, time::Instant};

use crate::{
    error::{auth::AuthError, resolve::ResolveError},
    startup::SpotifyOAuthClient,
};

/// Lifetime assumed when the token response omits `expires_in`.
const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(3600);

/// A cached token is replaced once it is this close to expiring.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Searches a music catalogue for tracks matching a free-text query.
#[async_trait]
pub trait TrackSearch: Send + Sync {
    /// Returns the IDs of matching tracks, best match first.
    ///
    /// A response without any track results yields an empty list.
    async fn search_tracks(&self, query: &str) -> Result<Vec<String>, ResolveError>;
}

/// Body of a `GET /v1/search?type=track` response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    /// Absent when the search returned no track section at all.
    pub tracks: Option<TrackPage>,
}

/// One page of track results. Only the first page is ever read.
#[derive(Debug, Deserialize)]
pub(crate) struct TrackPage {
    #[serde(default)]
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackItem {
    /// Null for local files, which have no Spotify URL.
    pub id: Option<String>,
}

impl SearchResponse {
    /// Collects the track IDs of the first result page in order.
    pub fn into_track_ids(self) -> Vec<String> {
        self.tracks
            .map(|page| page.items.into_iter().filter_map(|track| track.id).collect())
            .unwrap_or_default()
    }
}

struct CachedToken {
    secret: String,
    expires_at: Instant,
}

/// Spotify Web API client authenticated with client credentials.
pub struct SpotifyClient {
    /// HTTP client for API requests.
    http_client: reqwest::Client,
    /// Non-redirecting HTTP client for token requests.
    oauth_http_client: reqwest::Client,
    oauth_client: SpotifyOAuthClient,
    /// Base URL of the Web API, without a trailing slash.
    api_url: String,
    token: RwLock<Option<CachedToken>>,
}

impl SpotifyClient {
    /// Creates a new client without a token.
    ///
    /// # Arguments
    /// - `http_client` - Client for API requests
    /// - `oauth_http_client` - Client for token requests, must not follow redirects
    /// - `oauth_client` - OAuth2 client with Spotify's token endpoint
    /// - `api_url` - Web API base URL
    ///
    /// # Returns
    /// - `SpotifyClient` - Client that fetches a token on first use
    pub fn new(
        http_client: reqwest::Client,
        oauth_http_client: reqwest::Client,
        oauth_client: SpotifyOAuthClient,
        api_url: String,
    ) -> Self {
        Self {
            http_client,
            oauth_http_client,
            oauth_client,
            api_url,
            token: RwLock::new(None),
        }
    }

    /// Requests a new access token and caches it.
    ///
    /// # Returns
    /// - `Ok(String)` - The new access token
    /// - `Err(AuthError::TokenRequest)` - Spotify rejected the credentials or
    ///   could not be reached
    pub async fn refresh_token(&self) -> Result<String, AuthError> {
        let response = self
            .oauth_client
            .exchange_client_credentials()
            .request_async(&self.oauth_http_client)
            .await
            .map_err(|e| AuthError::TokenRequest(e.to_string()))?;

        let secret = response.access_token().secret().clone();
        let lifetime = response.expires_in().unwrap_or(DEFAULT_TOKEN_LIFETIME);

        // Lifetimes too large to represent fall back to the default one
        let now = Instant::now();
        let expires_at = now
            .checked_add(lifetime.saturating_sub(TOKEN_EXPIRY_MARGIN))
            .unwrap_or_else(|| now + DEFAULT_TOKEN_LIFETIME.saturating_sub(TOKEN_EXPIRY_MARGIN));

        *self.token.write().await = Some(CachedToken {
            secret: secret.clone(),
            expires_at,
        });

        tracing::info!(
            "Obtained Spotify access token valid for {} seconds",
            lifetime.as_secs()
        );

        Ok(secret)
    }

    /// Returns the cached token, refreshing it if it is missing or about to expire.
    async fn access_token(&self) -> Result<String, AuthError> {
        if let Some(token) = self.token.read().await.as_ref() {
            if Instant::now() < token.expires_at {
                return Ok(token.secret.clone());
            }
        }

        self.refresh_token().await
    }
}

#[async_trait]
impl TrackSearch for SpotifyClient {
    /// Searches Spotify for tracks matching the query.
    ///
    /// # Arguments
    /// - `query` - Free-text search query, sent as-is
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Track IDs from the first result page
    /// - `Err(ResolveError::Search)` - Token, transport, status or body error
    async fn search_tracks(&self, query: &str) -> Result<Vec<String>, ResolveError> {
        let token = self
            .access_token()
            .await
            .map_err(|e| ResolveError::Search(e.to_string()))?;

        let response = self
            .http_client
            .get(format!("{}/search", self.api_url))
            .query(&[("q", query), ("type", "track")])
            .bearer_auth(token)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| ResolveError::Search(e.to_string()))?;

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ResolveError::Search(e.to_string()))?;

        Ok(body.into_track_ids())
    }
}
