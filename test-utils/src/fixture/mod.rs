//! Test fixtures providing canned responses from external services.
//!
//! The bot scrapes Apple Music pages and queries the Spotify search API. These
//! fixtures build the bodies those services return so parsing and resolution can
//! be tested without network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let html = fixture::apple_music::page_with_title("Artist - Song - Single");
//! let json = fixture::spotify::search_response(&["abc", "def"]);
//! ```

pub mod apple_music;
pub mod spotify;
