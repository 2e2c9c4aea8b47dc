use tokio::sync::{RwLock, broadcast::Receiver};
use tracing::{debug, instrument};
use tunelyrics_models::Track;

use crate::{
    Result,
    client::{Catalog, LyricsSource},
    error::Error,
    lyrics::{LyricsOutcome, resolve_lyrics},
    notification::{Notification, NotificationBroadcast},
    pagination::{PaginatedResultStore, SelectionHandle, ViewState},
};

/// One search screen: the result store, the two remote collaborators and
/// the notification channel a front end shows alerts from.
///
/// Store mutations go through a single lock. The lock is never held while a
/// request is pending, so a newer search can start while an older one is
/// still waiting on the catalog.
#[derive(Debug)]
pub struct Session<C, L> {
    catalog: C,
    lyrics: L,
    store: RwLock<PaginatedResultStore>,
    broadcast: NotificationBroadcast,
}

impl<C, L> Session<C, L>
where
    C: Catalog,
    L: LyricsSource,
{
    pub fn new(catalog: C, lyrics: L, page_size: usize) -> Self {
        Self {
            catalog,
            lyrics,
            store: RwLock::new(PaginatedResultStore::new(page_size)),
            broadcast: NotificationBroadcast::new(),
        }
    }

    pub fn notifications(&self) -> Receiver<Notification> {
        self.broadcast.subscribe()
    }

    /// Runs a search and shows its first page. Returns `Ok(None)` when a
    /// newer search or a `clear` superseded this one while it was pending.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Option<ViewState>> {
        let generation = self.store.write().await.begin_search();

        match self.catalog.search_catalog(query).await {
            Ok(response) => {
                let view = self
                    .store
                    .write()
                    .await
                    .apply_search_for(generation, response);

                match &view {
                    Some(view) if view.is_empty => {
                        self.broadcast
                            .send_message(Notification::Info("No results".to_string()));
                    }
                    Some(_) => {}
                    None => debug!("search was superseded"),
                }

                Ok(view)
            }
            Err(error) => {
                if !self.store.read().await.is_current(generation) {
                    debug!("ignoring failure of superseded search: {error}");
                    return Ok(None);
                }

                self.broadcast
                    .send_message(Notification::Error(error.to_string()));
                Err(error)
            }
        }
    }

    pub async fn advance_if_at_end(&self, requested_index: usize) -> ViewState {
        self.store.write().await.advance_if_at_end(requested_index)
    }

    pub async fn view_state(&self) -> ViewState {
        self.store.read().await.view_state()
    }

    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    pub async fn select(&self, index: usize) -> Option<SelectionHandle> {
        self.store.write().await.select_visible(index)
    }

    pub async fn selected(&self) -> Option<Track> {
        self.store.read().await.selected().cloned()
    }

    pub async fn clear_selection(&self) {
        self.store.write().await.clear_selection();
    }

    /// Lyrics for the track `handle` points at. The handle must still be the
    /// active selection of the current search.
    pub async fn lyrics_for(&self, handle: &SelectionHandle) -> Result<LyricsOutcome> {
        if !self.store.read().await.holds(handle) {
            debug!("selection handle is stale");
            return Err(Error::StaleSelection);
        }

        self.lookup_lyrics(handle.track()).await
    }

    pub async fn lyrics_for_selection(&self) -> Result<LyricsOutcome> {
        let track = self.selected().await.ok_or(Error::NoSelection)?;

        self.lookup_lyrics(&track).await
    }

    async fn lookup_lyrics(&self, track: &Track) -> Result<LyricsOutcome> {
        match resolve_lyrics(track, &self.lyrics).await {
            Ok(outcome) => {
                if let LyricsOutcome::NotFound { error_message } = &outcome {
                    debug!("lyrics not found: {error_message}");
                    self.broadcast.send_message(Notification::Error(
                        "Could not locate lyrics for that song.".to_string(),
                    ));
                }
                Ok(outcome)
            }
            Err(error) => {
                self.broadcast
                    .send_message(Notification::Error(error.to_string()));
                Err(error)
            }
        }
    }
}
