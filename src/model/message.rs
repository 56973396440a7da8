use serenity::all::{ChannelId, Mentionable, Message, MessageId};

/// A chat message as seen by the rewrite pipeline.
///
/// Carries only what the pipeline reads: where the message lives, who wrote it,
/// and its text. Built from a Serenity `Message` at the edge of the bot layer so
/// the services never depend on gateway payload types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Mention string for the author, e.g. `<@1234>`.
    pub author_mention: String,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub content: String,
}

impl From<&Message> for IncomingMessage {
    fn from(message: &Message) -> Self {
        Self {
            author_mention: message.author.mention().to_string(),
            channel_id: message.channel_id,
            message_id: message.id,
            content: message.content.clone(),
        }
    }
}
