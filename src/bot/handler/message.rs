use dioxus_logger::tracing;
use serenity::all::{Context, Message};

use crate::{
    model::{message::IncomingMessage, outcome::MessageOutcome},
    service::{discord::DiscordChannel, message::process_message, resolver::TrackResolver},
};

/// Handle message creation in a channel
///
/// Runs the rewrite pipeline with Discord's HTTP API as the message channel.
/// Every message the bot can see passes through here, including its own reposts;
/// those no longer contain resolvable Apple Music links, so they end as no-ops.
///
/// # Arguments
/// - `resolver` - Track resolver owned by the event handler
/// - `ctx` - Discord context providing the HTTP client
/// - `message` - The created message
pub async fn handle_message<R>(resolver: &R, ctx: Context, message: Message)
where
    R: TrackResolver + ?Sized,
{
    let incoming = IncomingMessage::from(&message);
    let channel = DiscordChannel::new(&ctx.http);

    let outcome = process_message(&incoming, resolver, &channel).await;

    match outcome {
        MessageOutcome::NoLinks => {}
        MessageOutcome::Reposted => tracing::info!(
            "Replaced message {} in channel {} with Spotify links",
            incoming.message_id,
            incoming.channel_id
        ),
        outcome => tracing::debug!(
            "Message {} in channel {} left in place: {:?}",
            incoming.message_id,
            incoming.channel_id,
            outcome
        ),
    }
}
