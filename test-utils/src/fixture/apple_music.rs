//! Apple Music page fixtures.
//!
//! Apple Music serves a large client-rendered document; the only part the bot
//! reads is the Open Graph metadata in `<head>`. These fixtures keep that shape.

/// Default title used by [`page`].
pub const DEFAULT_TITLE: &str = "Artist Name - Song Title - Single";

/// Creates an Apple Music page with the default `og:title`.
///
/// # Returns
/// - `String` - HTML document containing `DEFAULT_TITLE` as its `og:title`
pub fn page() -> String {
    page_with_title(DEFAULT_TITLE)
}

/// Creates an Apple Music page whose `og:title` is the given title.
///
/// The page also carries the neighbouring Open Graph tags Apple Music emits so
/// selectors are exercised against realistic markup.
///
/// # Arguments
/// - `title` - Value for the `content` attribute of `<meta property="og:title">`
///
/// # Returns
/// - `String` - HTML document
pub fn page_with_title(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en-US">
<head>
<meta charset="utf-8">
<title>{title} - Apple Music</title>
<meta property="og:site_name" content="Apple Music">
<meta property="og:title" content="{title}">
<meta property="og:type" content="music.album">
<meta property="og:url" content="https://music.apple.com/us/album/x/123">
</head>
<body><div id="app"></div></body>
</html>"#
    )
}

/// Creates an Apple Music page with two `og:title` tags.
///
/// # Arguments
/// - `first` - Title of the first tag in document order
/// - `second` - Title of the second tag
///
/// # Returns
/// - `String` - HTML document
pub fn page_with_titles(first: &str, second: &str) -> String {
    format!(
        r#"<html><head>
<meta property="og:title" content="{first}">
<meta property="og:title" content="{second}">
</head><body></body></html>"#
    )
}

/// Creates an Apple Music page without any `og:title` tag.
///
/// # Returns
/// - `String` - HTML document
pub fn page_without_title() -> String {
    r#"<html><head><meta property="og:site_name" content="Apple Music"></head><body></body></html>"#
        .to_string()
}
