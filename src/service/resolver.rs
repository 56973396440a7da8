//! Resolution of one Apple Music link to candidate Spotify track URLs.

use std::time::Duration;

use dioxus_logger::tracing;
use once_cell::sync::Lazy;
use regex::Regex;
use serenity::async_trait;
use tokio::time::{timeout_at, Instant};
use url::Url;

use crate::{
    error::resolve::ResolveError,
    model::track::spotify_track_url,
    service::{
        apple_music::{AppleMusicClient, PageSource, APPLE_MUSIC_HOST},
        spotify::{SpotifyClient, TrackSearch},
    },
};

/// Time budget for a single search call, further capped by the message deadline.
pub const SEARCH_BUDGET: Duration = Duration::from_secs(1);

/// Separators and suffixes Apple Music adds to titles that hurt search results.
static TITLE_NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"( - |single| by | & |, )").expect("title noise pattern is valid")
});

/// Turns an Apple Music link into Spotify track URLs.
#[async_trait]
pub trait TrackResolver: Send + Sync {
    /// Resolves `url` to candidate Spotify track URLs, best match first.
    ///
    /// Network calls made on behalf of the resolution must finish by `deadline`.
    async fn resolve(&self, url: &str, deadline: Instant) -> Result<Vec<String>, ResolveError>;
}

/// Resolver that reads a page title and searches for it.
pub struct Resolver<P, S> {
    pub(crate) pages: P,
    pub(crate) search: S,
}

/// The resolver the bot runs with: Apple Music pages searched on Spotify.
pub type SpotifyResolver = Resolver<AppleMusicClient, SpotifyClient>;

impl<P, S> Resolver<P, S> {
    pub fn new(pages: P, search: S) -> Self {
        Self { pages, search }
    }
}

#[async_trait]
impl<P: PageSource, S: TrackSearch> TrackResolver for Resolver<P, S> {
    /// Resolves an Apple Music link to Spotify track URLs.
    ///
    /// Fetches the page, normalizes its `og:title` into a query and searches for
    /// tracks. A page without a title is searched with an empty query. The search
    /// runs under `SEARCH_BUDGET` or the message deadline, whichever ends first.
    ///
    /// # Arguments
    /// - `url` - Apple Music URL as found in the message
    /// - `deadline` - Message-wide deadline
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Spotify track URLs in search order; empty if the URL
    ///   is not on `music.apple.com` or the search found no tracks
    /// - `Err(ResolveError::InvalidInput)` - Empty URL
    /// - `Err(ResolveError::Parse)` - URL could not be parsed
    /// - `Err(ResolveError::Network)` - Page request failed or ran out of time
    /// - `Err(ResolveError::Search)` - Search failed or ran out of time
    async fn resolve(&self, url: &str, deadline: Instant) -> Result<Vec<String>, ResolveError> {
        if url.is_empty() {
            return Err(ResolveError::InvalidInput(
                "Apple Music URL is required".to_string(),
            ));
        }

        tracing::info!("Resolving Apple Music URL {}", url);

        let page_url = Url::parse(url)?;
        if page_url.host_str() != Some(APPLE_MUSIC_HOST) {
            tracing::debug!("Ignoring {}: host is not {}", url, APPLE_MUSIC_HOST);
            return Ok(Vec::new());
        }

        let title = timeout_at(deadline, self.pages.fetch_title(&page_url))
            .await
            .map_err(|_| {
                ResolveError::Network(format!("request for {} exceeded the message deadline", url))
            })??;

        let query = normalize_title(&title);

        let search_deadline = deadline.min(Instant::now() + SEARCH_BUDGET);
        let track_ids = timeout_at(search_deadline, self.search.search_tracks(&query))
            .await
            .map_err(|_| ResolveError::Search(format!("search for {:?} timed out", query)))??;

        Ok(track_ids.iter().map(|id| spotify_track_url(id)).collect())
    }
}

/// Normalizes a page title into a search query.
///
/// Lowercases the title, then replaces every match of ` - `, `single`, ` by `,
/// ` & ` and `, ` with a single space in one left-to-right pass. Whitespace is
/// not collapsed or trimmed afterwards.
///
/// # Arguments
/// - `title` - Title as scraped from the page
///
/// # Returns
/// - `String` - Search query
pub fn normalize_title(title: &str) -> String {
    TITLE_NOISE
        .replace_all(&title.to_lowercase(), " ")
        .into_owned()
}
