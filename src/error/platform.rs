use thiserror::Error;

/// Errors from Discord API calls made while replacing a message.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The original message could not be deleted.
    ///
    /// The replacement is not posted, so the channel never shows the content twice.
    #[error("Failed to delete message {message_id} in channel {channel_id}: {reason}")]
    Delete {
        channel_id: u64,
        message_id: u64,
        reason: String,
    },

    /// The replacement message could not be posted.
    #[error("Failed to create message in channel {channel_id}: {reason}")]
    Create { channel_id: u64, reason: String },

    /// The call did not complete before the message deadline.
    #[error("Discord {operation} call exceeded the message deadline")]
    Timeout { operation: &'static str },
}
