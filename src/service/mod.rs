//! Business logic for turning Apple Music links into Spotify links.
//!
//! The services are layered leaves-first:
//!
//! - **link** - Finds Apple Music URLs in message text
//! - **apple_music** - Fetches an Apple Music page and reads its `og:title`
//! - **spotify** - Searches Spotify for tracks using a client credentials token
//! - **resolver** - Combines the two clients into one link → candidates lookup
//! - **rewrite** - Substitutes resolved links into message content
//! - **discord** - Deletes and posts messages through Discord's HTTP API
//! - **message** - Runs the whole pipeline for one incoming message
//!
//! Collaborators that reach the network sit behind traits (`PageSource`,
//! `TrackSearch`, `TrackResolver`, `MessageChannel`) so every step can be tested
//! without a live connection.

pub mod apple_music;
pub mod discord;
pub mod link;
pub mod message;
pub mod resolver;
pub mod rewrite;
pub mod spotify;

#[cfg(test)]
mod test;
