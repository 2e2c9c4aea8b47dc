use tracing::{debug, instrument};
use tunelyrics_models::{SearchResponse, Track};

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Identifies one search. Responses carrying an older generation are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchGeneration(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionHandle {
    generation: SearchGeneration,
    track: Track,
}

impl SelectionHandle {
    pub fn track(&self) -> &Track {
        &self.track
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub visible_items: Vec<Track>,
    pub is_empty: bool,
    pub has_more: bool,
}

/// Holds every song from the latest search and a window over it that grows
/// by `page_size` each time the consumer reaches the last visible item.
///
/// `visible_count` never exceeds the number of matches and never shrinks
/// until the next search replaces the matches.
#[derive(Debug)]
pub struct PaginatedResultStore {
    all_matches: Vec<Track>,
    visible_count: usize,
    page_size: usize,
    selection: Option<Track>,
    generation: u64,
}

impl PaginatedResultStore {
    pub fn new(page_size: usize) -> Self {
        Self {
            all_matches: Vec::new(),
            visible_count: 0,
            page_size: page_size.max(1),
            selection: None,
            generation: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn total_matches(&self) -> usize {
        self.all_matches.len()
    }

    pub fn visible_items(&self) -> &[Track] {
        let end = self.visible_count.min(self.all_matches.len());
        &self.all_matches[..end]
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            visible_items: self.visible_items().to_vec(),
            is_empty: self.all_matches.is_empty(),
            has_more: self.visible_count < self.all_matches.len(),
        }
    }

    #[instrument(skip_all, fields(result_count = response.result_count))]
    pub fn apply_search(&mut self, response: SearchResponse) -> ViewState {
        let matches: Vec<Track> = response
            .results
            .unwrap_or_default()
            .into_iter()
            .filter(Track::is_song)
            .collect();

        debug!("{} songs in response", matches.len());

        self.visible_count = self.page_size.min(matches.len());
        self.all_matches = matches;
        self.selection = None;

        self.view_state()
    }

    /// Grows the window when `requested_index` is the last visible item and
    /// more matches remain. Any other index leaves the window as is.
    pub fn advance_if_at_end(&mut self, requested_index: usize) -> ViewState {
        let total = self.all_matches.len();
        let at_end = self.visible_count > 0 && requested_index == self.visible_count - 1;

        if at_end && self.visible_count < total {
            self.visible_count = (self.visible_count + self.page_size).min(total);
            debug!("showing {} of {} matches", self.visible_count, total);
        }

        self.view_state()
    }

    /// Drops the matches and invalidates any search still in flight.
    pub fn clear(&mut self) {
        self.begin_search();
        self.all_matches = Vec::new();
        self.visible_count = 0;
        self.selection = None;
    }

    pub fn begin_search(&mut self) -> SearchGeneration {
        self.generation = self.generation.wrapping_add(1);
        SearchGeneration(self.generation)
    }

    pub fn is_current(&self, generation: SearchGeneration) -> bool {
        generation.0 == self.generation
    }

    pub fn apply_search_for(
        &mut self,
        generation: SearchGeneration,
        response: SearchResponse,
    ) -> Option<ViewState> {
        if self.is_current(generation) {
            Some(self.apply_search(response))
        } else {
            debug!("discarding results of superseded search {:?}", generation);
            None
        }
    }

    pub fn select(&mut self, track: Track) -> SelectionHandle {
        self.selection = Some(track.clone());

        SelectionHandle {
            generation: SearchGeneration(self.generation),
            track,
        }
    }

    /// Selects the visible item at `index`. Out of window indices select nothing.
    pub fn select_visible(&mut self, index: usize) -> Option<SelectionHandle> {
        let track = self.visible_items().get(index)?.clone();
        Some(self.select(track))
    }

    pub fn selected(&self) -> Option<&Track> {
        self.selection.as_ref()
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// A handle stays valid until the next search, `clear`, or a different
    /// selection replaces it.
    pub fn holds(&self, handle: &SelectionHandle) -> bool {
        self.is_current(handle.generation) && self.selection.as_ref() == Some(&handle.track)
    }
}

impl Default for PaginatedResultStore {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
