/// Result of running the rewriter over a message's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Content with every resolved Apple Music link replaced.
    pub content: String,
    /// Whether at least one link had a Spotify candidate.
    pub changed: bool,
}

/// Terminal state reached while handling one message.
///
/// The handler never reports errors to chat users; this value exists so the
/// bot layer can log what happened and tests can assert on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOutcome {
    /// The message contains no Apple Music link.
    NoLinks,
    /// Links were found but none resolved to a Spotify track.
    Unchanged,
    /// The original message could not be deleted; nothing was posted.
    ///
    /// A delete that runs past the message deadline is also reported here, even
    /// though Discord may already have carried it out. In that case the original
    /// is gone and no replacement is posted.
    DeleteFailed,
    /// The original was deleted but the replacement could not be posted.
    ///
    /// Includes a post cut off by the message deadline. Either way the content
    /// of the original message is lost.
    PostFailed,
    /// The original was deleted and the rewritten message posted.
    Reposted,
}
