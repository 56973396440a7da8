//! Spotify Web API response fixtures.
//!
//! Mirrors the subset of `GET /v1/search?type=track` the bot deserializes. Track
//! objects carry a few extra fields so deserialization is tested against the
//! presence of data the bot ignores.

/// Creates a search response containing one track per ID, in order.
///
/// # Arguments
/// - `track_ids` - Spotify track IDs
///
/// # Returns
/// - `serde_json::Value` - Search response JSON
pub fn search_response(track_ids: &[&str]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = track_ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id,
                "name": format!("Track {}", id),
                "uri": format!("spotify:track:{}", id),
                "is_local": false,
                "artists": [{ "id": "artist", "name": "Artist Name" }],
            })
        })
        .collect();

    serde_json::json!({
        "tracks": {
            "href": "https://api.spotify.com/v1/search",
            "limit": 20,
            "offset": 0,
            "total": items.len(),
            "next": null,
            "previous": null,
            "items": items,
        }
    })
}

/// Creates a search response with no `tracks` section.
///
/// # Returns
/// - `serde_json::Value` - Search response JSON
pub fn search_response_without_tracks() -> serde_json::Value {
    serde_json::json!({})
}

/// Creates a search response with a local file track, which has a null ID.
///
/// # Arguments
/// - `track_id` - ID of the regular track listed after the local one
///
/// # Returns
/// - `serde_json::Value` - Search response JSON
pub fn search_response_with_local_track(track_id: &str) -> serde_json::Value {
    serde_json::json!({
        "tracks": {
            "items": [
                { "id": null, "name": "Local File", "is_local": true },
                { "id": track_id, "name": "Track", "is_local": false },
            ]
        }
    })
}
