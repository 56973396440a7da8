use serenity::{
    all::{ChannelId, CreateMessage, MessageId},
    async_trait,
    http::Http,
};

use crate::error::platform::PlatformError;

/// Chat platform operations needed to replace a message.
#[async_trait]
pub trait MessageChannel: Send + Sync {
    /// Deletes a message.
    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), PlatformError>;

    /// Posts a plain text message.
    async fn create_message(
        &self,
        channel_id: ChannelId,
        content: String,
    ) -> Result<(), PlatformError>;
}

/// `MessageChannel` backed by Discord's HTTP API.
///
/// Borrows the HTTP client from the event context, so one is created per event.
pub struct DiscordChannel<'a> {
    http: &'a Http,
}

impl<'a> DiscordChannel<'a> {
    pub fn new(http: &'a Http) -> Self {
        Self { http }
    }
}

#[async_trait]
impl MessageChannel for DiscordChannel<'_> {
    /// Deletes a message with no audit log reason.
    ///
    /// Requires the Manage Messages permission unless the bot authored the message.
    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), PlatformError> {
        self.http
            .delete_message(channel_id, message_id, None)
            .await
            .map_err(|e| PlatformError::Delete {
                channel_id: channel_id.get(),
                message_id: message_id.get(),
                reason: e.to_string(),
            })
    }

    async fn create_message(
        &self,
        channel_id: ChannelId,
        content: String,
    ) -> Result<(), PlatformError> {
        let message = CreateMessage::new().content(content);

        channel_id
            .send_message(self.http, message)
            .await
            .map(|_| ())
            .map_err(|e| PlatformError::Create {
                channel_id: channel_id.get(),
                reason: e.to_string(),
            })
    }
}
