use super::*;
use crate::service::rewrite::rewrite_links;

const LINK_A: &str = "https://music.apple.com/us/album/a/1";
const LINK_B: &str = "https://music.apple.com/us/album/b/2";

/// Tests that content without links is returned untouched.
///
/// Expected: Unchanged content, changed false, no resolver calls
#[tokio::test]
async fn leaves_plain_text_alone() {
    let resolver = FakeResolver::new();

    let rewrite = rewrite_links("nothing to see here", &resolver, far_deadline()).await;

    assert_eq!(rewrite.content, "nothing to see here");
    assert!(!rewrite.changed);
    assert!(resolver.calls().is_empty());
}

/// Tests that only the best candidate is used.
///
/// Expected: Link replaced with the first candidate, second candidate absent
#[tokio::test]
async fn replaces_with_first_candidate_only() {
    let resolver = FakeResolver::new().with(
        LINK_A,
        &[
            "https://open.spotify.com/track/first",
            "https://open.spotify.com/track/second",
        ],
    );
    let content = format!("listen {} now", LINK_A);

    let rewrite = rewrite_links(&content, &resolver, far_deadline()).await;

    assert_eq!(rewrite.content, "listen https://open.spotify.com/track/first now");
    assert!(!rewrite.content.contains("second"));
    assert!(rewrite.changed);
}

/// Tests that every occurrence of a resolved link is replaced.
///
/// The extractor reports the duplicate too, so the resolver is asked twice.
///
/// Expected: Both occurrences replaced
#[tokio::test]
async fn replaces_all_occurrences() {
    let resolver = FakeResolver::new().with(LINK_A, &["https://open.spotify.com/track/abc"]);
    let content = format!("{} and again {}", LINK_A, LINK_A);

    let rewrite = rewrite_links(&content, &resolver, far_deadline()).await;

    assert_eq!(
        rewrite.content,
        "https://open.spotify.com/track/abc and again https://open.spotify.com/track/abc"
    );
    assert!(rewrite.changed);
    assert_eq!(resolver.calls(), vec![LINK_A, LINK_A]);
}

/// Tests that a link without candidates does not count as a change.
///
/// Expected: Content unchanged, changed false
#[tokio::test]
async fn empty_candidates_leave_link() {
    let resolver = FakeResolver::new();
    let content = format!("hey {}", LINK_A);

    let rewrite = rewrite_links(&content, &resolver, far_deadline()).await;

    assert_eq!(rewrite.content, content);
    assert!(!rewrite.changed);
}

/// Tests that a failed link does not stop the others.
///
/// Expected: Failed link kept, later link replaced, both resolved in order
#[tokio::test]
async fn failed_link_is_skipped() {
    let resolver = FakeResolver::new()
        .failing(LINK_A)
        .with(LINK_B, &["https://open.spotify.com/track/bbb"]);
    let content = format!("{} {}", LINK_A, LINK_B);

    let rewrite = rewrite_links(&content, &resolver, far_deadline()).await;

    assert_eq!(
        rewrite.content,
        format!("{} https://open.spotify.com/track/bbb", LINK_A)
    );
    assert!(rewrite.changed);
    assert_eq!(resolver.calls(), vec![LINK_A, LINK_B]);
}
