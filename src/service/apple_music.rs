//! Apple Music page scraping.
//!
//! Apple Music pages are rendered client-side, but the server-rendered `<head>`
//! carries Open Graph metadata. The `og:title` tag holds a display title such as
//! `Song Title - Single by Artist Name`, which is all the bot needs to build a
//! search query.

use dioxus_logger::tracing;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serenity::async_trait;
use url::Url;

use crate::error::resolve::ResolveError;

/// The only host the page client will fetch from.
pub const APPLE_MUSIC_HOST: &str = "music.apple.com";

/// Matches Open Graph title tags.
static OG_TITLE: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[property="og:title"]"#).expect("og:title selector is valid")
});

/// Source of page titles for Apple Music URLs.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches the page at `url` and returns its `og:title`.
    ///
    /// Returns an empty string when the page has no title tag.
    async fn fetch_title(&self, url: &Url) -> Result<String, ResolveError>;
}

/// Fetches Apple Music pages over HTTP.
pub struct AppleMusicClient {
    http_client: reqwest::Client,
}

impl AppleMusicClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl PageSource for AppleMusicClient {
    /// Downloads an Apple Music page and extracts its `og:title`.
    ///
    /// # Arguments
    /// - `url` - Apple Music page URL
    ///
    /// # Returns
    /// - `Ok(String)` - The title, or an empty string if the page has none
    /// - `Err(ResolveError::UnexpectedHost)` - URL host is not `music.apple.com`
    /// - `Err(ResolveError::Network)` - Transport failure or non-2xx status
    async fn fetch_title(&self, url: &Url) -> Result<String, ResolveError> {
        if url.host_str() != Some(APPLE_MUSIC_HOST) {
            return Err(ResolveError::UnexpectedHost {
                host: url.host_str().unwrap_or_default().to_string(),
                url: url.to_string(),
            });
        }

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ResolveError::Network(e.to_string()))?;

        let title = read_title(response).await?;
        tracing::debug!("Apple Music page {} has title {:?}", url, title);

        Ok(title)
    }
}

/// Reads the `og:title` from a page response.
///
/// # Arguments
/// - `response` - Response to the page request
///
/// # Returns
/// - `Ok(String)` - The title, or an empty string if the page has none
/// - `Err(ResolveError::Network)` - Non-2xx status, carrying the status text, or
///   the body could not be read
async fn read_title(response: reqwest::Response) -> Result<String, ResolveError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ResolveError::Network(status.to_string()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ResolveError::Network(e.to_string()))?;

    Ok(extract_og_title(&body).unwrap_or_default())
}

/// Extracts the `og:title` of an HTML document.
///
/// Only the first `<meta property="og:title">` in document order is considered,
/// even if it lacks a `content` attribute and a later one has it.
///
/// # Returns
/// - `Some(String)` - Content of the first title tag
/// - `None` - No title tag, or the first one has no `content`
pub fn extract_og_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    document
        .select(&OG_TITLE)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
}
