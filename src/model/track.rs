/// Prefix of a canonical Spotify track URL.
pub const SPOTIFY_TRACK_URL_PREFIX: &str = "https://open.spotify.com/track/";

/// Builds the canonical Spotify URL for a track ID.
///
/// # Arguments
/// - `track_id` - Opaque Spotify track ID
///
/// # Returns
/// - `String` - URL of the form `https://open.spotify.com/track/<track_id>`
pub fn spotify_track_url(track_id: &str) -> String {
    format!("{}{}", SPOTIFY_TRACK_URL_PREFIX, track_id)
}
