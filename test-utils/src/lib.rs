//! Atos Test Utils
//!
//! Provides shared testing utilities for the atos bot. The bot never talks to a
//! database, so the helpers here focus on the two things its tests need: Serenity
//! objects shaped like real gateway payloads, and canned responses from the
//! services the bot scrapes and queries.
//!
//! # Overview
//!
//! - **serenity**: Factories for Serenity `Message` and `User` structs, built by
//!   deserializing JSON the way Discord delivers it
//! - **fixture**: Apple Music HTML pages and Spotify search responses
//! - **http**: A local stub HTTP server for driving the real Spotify and Apple
//!   Music clients
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{fixture, serenity::create_test_message};
//!
//! #[tokio::test]
//! async fn test_rewrite() {
//!     let message = create_test_message(1, 2, 3, "https://music.apple.com/us/album/x/1");
//!     let page = fixture::apple_music::page_with_title("Song - Single");
//!     // Feed the message and page through fakes...
//! }
//! ```

pub mod fixture;
pub mod http;
pub mod serenity;
