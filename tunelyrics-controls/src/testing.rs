use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use tokio::sync::Notify;
use tunelyrics_models::{LyricsResult, SearchResponse, Track};

use crate::{
    Result,
    client::{Catalog, LyricsSource},
    error::Error,
};

pub(crate) fn song(name: &str) -> Track {
    Track {
        artist_name: Some("Tom Waits".into()),
        track_name: Some(name.into()),
        media_kind: Some("song".into()),
        ..Default::default()
    }
}

pub(crate) fn songs(prefix: &str, count: usize) -> SearchResponse {
    SearchResponse {
        result_count: count as i64,
        results: Some(
            (0..count)
                .map(|i| song(&format!("{prefix} {i}")))
                .collect(),
        ),
    }
}

/// Catalog answering from a fixed table. A query registered with `hold`
/// waits until `release` is called.
#[derive(Default)]
pub(crate) struct FakeCatalog {
    responses: HashMap<String, SearchResponse>,
    held_query: Option<String>,
    started: Notify,
    released: Notify,
    calls: AtomicUsize,
}

impl FakeCatalog {
    pub(crate) fn with(mut self, query: &str, response: SearchResponse) -> Self {
        self.responses.insert(query.to_string(), response);
        self
    }

    pub(crate) fn hold(mut self, query: &str) -> Self {
        self.held_query = Some(query.to_string());
        self
    }

    pub(crate) async fn wait_started(&self) {
        self.started.notified().await;
    }

    pub(crate) fn release(&self) {
        self.released.notify_one();
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn search_catalog(&self, query: &str) -> Result<SearchResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.held_query.as_deref() == Some(query) {
            self.started.notify_one();
            self.released.notified().await;
        }

        self.responses
            .get(query)
            .cloned()
            .ok_or_else(|| Error::from(tunelyrics_client::Error::DataUnavailable))
    }
}

pub(crate) struct FakeLyrics {
    reply: std::result::Result<LyricsResult, fn() -> tunelyrics_client::Error>,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, String)>>,
}

impl FakeLyrics {
    pub(crate) fn returning(result: LyricsResult) -> Self {
        Self {
            reply: Ok(result),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub(crate) fn failing(error: fn() -> tunelyrics_client::Error) -> Self {
        Self {
            reply: Err(error),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_request(&self) -> Option<(String, String)> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl LyricsSource for FakeLyrics {
    async fn fetch_lyrics(&self, track: &str, artist: &str) -> Result<LyricsResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((track.to_string(), artist.to_string()));

        match &self.reply {
            Ok(result) => Ok(result.clone()),
            Err(error) => Err(error().into()),
        }
    }
}
