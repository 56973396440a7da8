//! Service layer tests.
//!
//! Network-facing collaborators are replaced by the fakes defined here. Fakes
//! record the calls they receive so tests can assert on what the pipeline did,
//! not only on what it returned.

use std::{collections::HashMap, sync::Mutex, time::Duration};

use serenity::{
    all::{ChannelId, MessageId},
    async_trait,
};
use tokio::time::Instant;
use url::Url;

use crate::{
    error::{platform::PlatformError, resolve::ResolveError},
    model::message::IncomingMessage,
    service::{
        apple_music::PageSource, discord::MessageChannel, resolver::TrackResolver,
        spotify::TrackSearch,
    },
};

mod message;
mod rewrite;

/// Page source returning a fixed title, optionally after a delay.
struct FakePages {
    result: Result<String, String>,
    delay: Duration,
    requested: Mutex<Vec<String>>,
}

impl FakePages {
    fn title(title: &str) -> Self {
        Self {
            result: Ok(title.to_string()),
            delay: Duration::ZERO,
            requested: Mutex::new(Vec::new()),
        }
    }

    fn failing(status: &str) -> Self {
        Self {
            result: Err(status.to_string()),
            ..Self::title("")
        }
    }

    fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for FakePages {
    async fn fetch_title(&self, url: &Url) -> Result<String, ResolveError> {
        self.requested.lock().unwrap().push(url.to_string());
        tokio::time::sleep(self.delay).await;
        self.result.clone().map_err(ResolveError::Network)
    }
}

/// Track search returning fixed IDs, optionally after a delay.
struct FakeSearch {
    result: Result<Vec<String>, String>,
    delay: Duration,
    queries: Mutex<Vec<String>>,
}

impl FakeSearch {
    fn ids(ids: &[&str]) -> Self {
        Self {
            result: Ok(ids.iter().map(|id| id.to_string()).collect()),
            delay: Duration::ZERO,
            queries: Mutex::new(Vec::new()),
        }
    }

    fn failing(reason: &str) -> Self {
        Self {
            result: Err(reason.to_string()),
            ..Self::ids(&[])
        }
    }

    fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl TrackSearch for FakeSearch {
    async fn search_tracks(&self, query: &str) -> Result<Vec<String>, ResolveError> {
        self.queries.lock().unwrap().push(query.to_string());
        tokio::time::sleep(self.delay).await;
        self.result.clone().map_err(ResolveError::Search)
    }
}

/// Resolver answering from a table of links, recording every call.
///
/// Links missing from the table resolve to an empty candidate list. Links mapped
/// to `None` fail with a network error.
#[derive(Default)]
struct FakeResolver {
    answers: HashMap<String, Option<Vec<String>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeResolver {
    fn new() -> Self {
        Self::default()
    }

    fn with(mut self, link: &str, candidates: &[&str]) -> Self {
        self.answers.insert(
            link.to_string(),
            Some(candidates.iter().map(|c| c.to_string()).collect()),
        );
        self
    }

    fn failing(mut self, link: &str) -> Self {
        self.answers.insert(link.to_string(), None);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TrackResolver for FakeResolver {
    async fn resolve(&self, url: &str, _deadline: Instant) -> Result<Vec<String>, ResolveError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.answers.get(url) {
            Some(Some(candidates)) => Ok(candidates.clone()),
            Some(None) => Err(ResolveError::Network("503 Service Unavailable".to_string())),
            None => Ok(Vec::new()),
        }
    }
}

/// A platform call received by `RecordingChannel`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ChannelCall {
    Delete(ChannelId, MessageId),
    Create(ChannelId, String),
}

/// Message channel recording calls, with switchable failures.
#[derive(Default)]
struct RecordingChannel {
    fail_delete: bool,
    fail_create: bool,
    delay: Duration,
    calls: Mutex<Vec<ChannelCall>>,
}

impl RecordingChannel {
    fn new() -> Self {
        Self::default()
    }

    fn failing_delete() -> Self {
        Self {
            fail_delete: true,
            ..Self::default()
        }
    }

    fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn calls(&self) -> Vec<ChannelCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageChannel for RecordingChannel {
    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), PlatformError> {
        self.calls
            .lock()
            .unwrap()
            .push(ChannelCall::Delete(channel_id, message_id));
        tokio::time::sleep(self.delay).await;
        if self.fail_delete {
            return Err(PlatformError::Delete {
                channel_id: channel_id.get(),
                message_id: message_id.get(),
                reason: "Missing Permissions".to_string(),
            });
        }
        Ok(())
    }

    async fn create_message(
        &self,
        channel_id: ChannelId,
        content: String,
    ) -> Result<(), PlatformError> {
        self.calls
            .lock()
            .unwrap()
            .push(ChannelCall::Create(channel_id, content));
        if self.fail_create {
            return Err(PlatformError::Create {
                channel_id: channel_id.get(),
                reason: "Missing Access".to_string(),
            });
        }
        Ok(())
    }
}

/// Builds an incoming message in channel 10 with ID 20 from user 30.
fn incoming(content: &str) -> IncomingMessage {
    IncomingMessage::from(&test_utils::serenity::create_test_message(
        10, 20, 30, content,
    ))
}

/// A deadline far enough away that fakes without delays never hit it.
fn far_deadline() -> Instant {
    Instant::now() + Duration::from_secs(60)
}
