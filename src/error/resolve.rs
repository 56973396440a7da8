use thiserror::Error;

/// Errors that can occur while resolving one Apple Music link to Spotify tracks.
///
/// These are caught per link by the message rewriter, logged, and the link is
/// left untouched. They never abort processing of the other links in a message.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The caller passed an unusable argument, such as an empty URL.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The page request failed, returned a non-success status, or ran past the
    /// message deadline.
    ///
    /// Carries the status text (e.g. `404 Not Found`) or the transport error.
    #[error("Network error: {0}")]
    Network(String),

    /// The page client was asked to fetch a URL outside Apple Music.
    #[error("Unexpected host '{host}' in {url}")]
    UnexpectedHost {
        /// The host found in the URL, empty if it had none
        host: String,
        /// The full URL that was rejected
        url: String,
    },

    /// The link is not a valid URL.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The Spotify search failed or exceeded its time budget.
    #[error("Search error: {0}")]
    Search(String),
}

impl From<url::ParseError> for ResolveError {
    fn from(err: url::ParseError) -> Self {
        ResolveError::Parse(err.to_string())
    }
}
