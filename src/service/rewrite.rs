use dioxus_logger::tracing;
use tokio::time::Instant;

use crate::{
    model::outcome::Rewrite,
    service::{link::extract_apple_music_links, resolver::TrackResolver},
};

/// Replaces Apple Music links in message content with their best Spotify match.
///
/// Links are resolved one at a time in order of appearance, all sharing the
/// message deadline. A link that fails to resolve or has no candidates is logged
/// and left as-is. For every other link, all literal occurrences in the content
/// are replaced with the first candidate.
///
/// # Arguments
/// - `content` - Original message content
/// - `resolver` - Link resolver
/// - `deadline` - Message-wide deadline passed to each resolution
///
/// # Returns
/// - `Rewrite` - New content and whether any link was replaced
pub async fn rewrite_links<R>(content: &str, resolver: &R, deadline: Instant) -> Rewrite
where
    R: TrackResolver + ?Sized,
{
    let mut rewritten = content.to_string();
    let mut changed = false;

    for link in extract_apple_music_links(content) {
        let candidates = match resolver.resolve(link, deadline).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!("Error getting Spotify matches for {}: {}", link, e);
                continue;
            }
        };

        let Some(best) = candidates.first() else {
            tracing::info!("No Spotify matches for {}", link);
            continue;
        };

        rewritten = rewritten.replace(link, best);
        changed = true;
    }

    Rewrite {
        content: rewritten,
        changed,
    }
}
