//! Test factory for creating Serenity Message objects.
//!
//! Messages are the only gateway payload the bot reacts to. The factory produces
//! a plain guild text message with no attachments, embeds or mentions, which is
//! what the bot sees when a user pastes a link into a channel.

use serenity::all::Message;

use super::user::user_json;

/// Creates a test Serenity Message with customizable fields.
///
/// Creates a Message object by deserializing JSON with the provided values. The
/// author is created with the username `test-user`. All other fields are set to
/// defaults for a regular (type 0) message that was never edited.
///
/// # Arguments
/// - `channel_id` - Discord channel ID the message was posted in
/// - `message_id` - Discord message ID
/// - `author_id` - Discord user ID of the author
/// - `content` - Text content of the message
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::message::create_test_message;
///
/// let message = create_test_message(10, 20, 30, "hello");
/// assert_eq!(message.channel_id.get(), 10);
/// assert_eq!(message.content, "hello");
/// ```
pub fn create_test_message(
    channel_id: u64,
    message_id: u64,
    author_id: u64,
    content: &str,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": "100000000000000000",
        "author": user_json(author_id, "test-user"),
        "content": content,
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "pinned": false,
        "type": 0,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
