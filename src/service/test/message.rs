use super::*;
use crate::{model::outcome::MessageOutcome, service::message::process_message};

const LINK: &str = "https://music.apple.com/us/album/x/123";
const SPOTIFY: &str = "https://open.spotify.com/track/abc";

/// Tests the common case of a message without links.
///
/// Expected: NoLinks with no resolver or platform calls
#[tokio::test]
async fn message_without_links_is_ignored() {
    let resolver = FakeResolver::new();
    let channel = RecordingChannel::new();

    let outcome = process_message(&incoming("good morning"), &resolver, &channel).await;

    assert_eq!(outcome, MessageOutcome::NoLinks);
    assert!(resolver.calls().is_empty());
    assert!(channel.calls().is_empty());
}

/// Tests the full rewrite of a message with one resolvable link.
///
/// Verifies the original is deleted and the replacement, attributed to the
/// author, is posted to the same channel.
///
/// Expected: Reposted with a delete followed by a create
#[tokio::test]
async fn resolved_link_is_reposted() {
    let resolver = FakeResolver::new().with(LINK, &[SPOTIFY]);
    let channel = RecordingChannel::new();
    let message = incoming(&format!("check this out {} cool", LINK));

    let outcome = process_message(&message, &resolver, &channel).await;

    assert_eq!(outcome, MessageOutcome::Reposted);
    assert_eq!(
        channel.calls(),
        vec![
            ChannelCall::Delete(ChannelId::new(10), MessageId::new(20)),
            ChannelCall::Create(
                ChannelId::new(10),
                "[<@30>] check this out https://open.spotify.com/track/abc cool".to_string()
            ),
        ]
    );
}

/// Tests that nothing is touched when no link resolves.
///
/// Expected: Unchanged with no platform calls
#[tokio::test]
async fn unresolved_links_make_no_platform_calls() {
    let resolver = FakeResolver::new().failing(LINK);
    let channel = RecordingChannel::new();
    let message = incoming(&format!("{} and https://music.apple.com/us/album/y/9", LINK));

    let outcome = process_message(&message, &resolver, &channel).await;

    assert_eq!(outcome, MessageOutcome::Unchanged);
    assert_eq!(resolver.calls().len(), 2);
    assert!(channel.calls().is_empty());
}

/// Tests that a failed delete prevents the repost.
///
/// Expected: DeleteFailed with only the delete attempted
#[tokio::test]
async fn failed_delete_skips_post() {
    let resolver = FakeResolver::new().with(LINK, &[SPOTIFY]);
    let channel = RecordingChannel::failing_delete();

    let outcome = process_message(&incoming(LINK), &resolver, &channel).await;

    assert_eq!(outcome, MessageOutcome::DeleteFailed);
    assert_eq!(
        channel.calls(),
        vec![ChannelCall::Delete(ChannelId::new(10), MessageId::new(20))]
    );
}

/// Tests that a failed post is reported after the original was deleted.
///
/// Expected: PostFailed with both calls attempted
#[tokio::test]
async fn failed_post_is_reported() {
    let resolver = FakeResolver::new().with(LINK, &[SPOTIFY]);
    let channel = RecordingChannel::failing_create();

    let outcome = process_message(&incoming(LINK), &resolver, &channel).await;

    assert_eq!(outcome, MessageOutcome::PostFailed);
    assert_eq!(channel.calls().len(), 2);
}

/// Tests that a delete running past the message deadline counts as failed.
///
/// Expected: DeleteFailed with no create attempted
#[tokio::test(start_paused = true)]
async fn slow_delete_exceeds_deadline() {
    let resolver = FakeResolver::new().with(LINK, &[SPOTIFY]);
    let channel = RecordingChannel::new().delayed(Duration::from_secs(10));

    let outcome = process_message(&incoming(LINK), &resolver, &channel).await;

    assert_eq!(outcome, MessageOutcome::DeleteFailed);
    assert_eq!(channel.calls().len(), 1);
}

/// Tests a message where only some links resolve.
///
/// Expected: Reposted with the unresolved link left in place
#[tokio::test]
async fn partially_resolved_message_keeps_other_links() {
    let other = "https://music.apple.com/us/album/y/9";
    let resolver = FakeResolver::new().with(LINK, &[SPOTIFY]).failing(other);
    let channel = RecordingChannel::new();

    let outcome =
        process_message(&incoming(&format!("{} {}", LINK, other)), &resolver, &channel).await;

    assert_eq!(outcome, MessageOutcome::Reposted);
    assert_eq!(
        channel.calls()[1],
        ChannelCall::Create(
            ChannelId::new(10),
            format!("[<@30>] {} {}", SPOTIFY, other)
        )
    );
}

/// Tests the replacement message format.
#[test]
fn replacement_content_prefixes_author() {
    assert_eq!(
        crate::service::message::replacement_content("<@1>", "hi"),
        "[<@1>] hi"
    );
}
