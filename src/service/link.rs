use once_cell::sync::Lazy;
use regex::Regex;

/// Matches an Apple Music URL up to the next whitespace.
static APPLE_MUSIC_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https://music\.apple\.com/\S+").expect("Apple Music URL pattern is valid")
});

/// Reports whether the text contains at least one Apple Music URL.
///
/// Every message on every channel the bot can see passes through this check, so
/// it avoids allocating.
pub fn contains_apple_music_link(text: &str) -> bool {
    APPLE_MUSIC_URL.is_match(text)
}

/// Extracts all Apple Music URLs from the text.
///
/// # Arguments
/// - `text` - Arbitrary message content
///
/// # Returns
/// - `Vec<&str>` - Matching substrings in order of appearance, duplicates
///   included; empty if there are none
pub fn extract_apple_music_links(text: &str) -> Vec<&str> {
    APPLE_MUSIC_URL.find_iter(text).map(|m| m.as_str()).collect()
}
