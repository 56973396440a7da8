use thiserror::Error;

/// Errors from the Spotify client credentials flow.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The token endpoint rejected the request or could not be reached.
    ///
    /// At startup this usually means `SPOTIFY_CLIENT_ID` or `SPOTIFY_CLIENT_SECRET`
    /// is wrong. The underlying oauth2 error is flattened to its message since its
    /// type is generic over the HTTP client.
    #[error("Failed to obtain Spotify access token: {0}")]
    TokenRequest(String),
}
