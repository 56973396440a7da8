//! Discord bot integration.
//!
//! This module connects the rewrite pipeline to Discord. The bot listens for new
//! messages, hands each one to the service layer, and lets the service delete and
//! repost through the event context's HTTP client.
//!
//! The bot runs on the main tokio task and blocks until it is interrupted with
//! Ctrl+C, at which point all shards are shut down.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `MESSAGE_CONTENT` - Read the content of those messages (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application. The bot also needs the
//! Manage Messages permission in every channel where it should replace messages.

pub mod handler;
pub mod start;
