//! Per-message rewrite pipeline.
//!
//! Ties link extraction, resolution and rewriting together for one incoming
//! message and, when something changed, swaps the original message for the
//! rewritten one. The function takes its collaborators explicitly so it can be
//! driven without a gateway connection.

use std::{future::Future, time::Duration};

use dioxus_logger::tracing;
use tokio::time::{timeout_at, Instant};

use crate::{
    error::platform::PlatformError,
    model::{message::IncomingMessage, outcome::MessageOutcome},
    service::{
        discord::MessageChannel, link::contains_apple_music_link, resolver::TrackResolver,
        rewrite::rewrite_links,
    },
};

/// Time budget for handling one message, from first resolution to repost.
pub const MESSAGE_BUDGET: Duration = Duration::from_secs(5);

/// Handles one incoming message.
///
/// Messages without an Apple Music link return immediately. Otherwise the links
/// are resolved and rewritten under a `MESSAGE_BUDGET` deadline. If at least one
/// link was replaced, the original message is deleted and the rewritten content
/// is posted to the same channel, prefixed with a mention of the author. If the
/// delete fails nothing is posted, so the content never appears twice.
///
/// Errors are logged, never returned: the only feedback chat users get is the
/// rewritten message appearing or the original staying put.
///
/// # Arguments
/// - `message` - The incoming message
/// - `resolver` - Resolves Apple Music links to Spotify URLs
/// - `channel` - Deletes and posts messages
///
/// # Returns
/// - `MessageOutcome` - Terminal state reached
pub async fn process_message<R, C>(
    message: &IncomingMessage,
    resolver: &R,
    channel: &C,
) -> MessageOutcome
where
    R: TrackResolver + ?Sized,
    C: MessageChannel + ?Sized,
{
    if !contains_apple_music_link(&message.content) {
        return MessageOutcome::NoLinks;
    }

    let deadline = Instant::now() + MESSAGE_BUDGET;

    let rewrite = rewrite_links(&message.content, resolver, deadline).await;
    if !rewrite.changed {
        return MessageOutcome::Unchanged;
    }

    let deleted = within_deadline(
        deadline,
        "delete message",
        channel.delete_message(message.channel_id, message.message_id),
    )
    .await;
    if let Err(e) = deleted {
        tracing::error!("Error deleting message: {}", e);
        return MessageOutcome::DeleteFailed;
    }

    let content = replacement_content(&message.author_mention, &rewrite.content);
    let posted = within_deadline(
        deadline,
        "create message",
        channel.create_message(message.channel_id, content),
    )
    .await;
    if let Err(e) = posted {
        tracing::error!("Error posting rewritten message: {}", e);
        return MessageOutcome::PostFailed;
    }

    MessageOutcome::Reposted
}

/// Formats the replacement message attributed to the original author.
pub fn replacement_content(author_mention: &str, content: &str) -> String {
    format!("[{}] {}", author_mention, content)
}

/// Runs a platform call, failing with `PlatformError::Timeout` past the deadline.
async fn within_deadline<F>(
    deadline: Instant,
    operation: &'static str,
    call: F,
) -> Result<(), PlatformError>
where
    F: Future<Output = Result<(), PlatformError>>,
{
    timeout_at(deadline, call)
        .await
        .map_err(|_| PlatformError::Timeout { operation })?
}
