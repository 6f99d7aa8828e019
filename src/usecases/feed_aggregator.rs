//! Movie feed: merge popular + trending pages -> dedupe by id -> sort by title -> replace or append.
//!
//! - Both upstream fetches of a round run concurrently; the first failure fails the round
//! - `items` is only mutated after a whole round succeeded
//! - In-flight flags are checked and set under a single write lock (single-flight guard)
//! - The lock is never held across an upstream call

use crate::domain::{FetchError, MovieSummary};
use crate::ports::{FavoritePort, PopularMoviesPort, StateObserver, TrendingMoviesPort};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Assumed per-source page size of the upstream API.
///
/// Only used to guess end-of-data: a round where BOTH sources return fewer items
/// than this ends pagination. The upstream gives no authoritative total, so sparse
/// result sets can end the feed early or cost one extra (empty) round.
pub const PAGE_SIZE: usize = 20;

/// Observable state of the feed. Mutated only by [`FeedAggregator`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    /// Unique by id. Each batch is title-sorted; batches are appended in load order.
    pub items: Vec<MovieSummary>,
    /// Next page to request (1-based).
    pub page: u32,
    pub has_more: bool,
    pub is_loading_initial: bool,
    pub is_loading_more: bool,
    /// Last failure description. Cleared at the start of every fetch attempt.
    pub last_error: Option<String>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            has_more: true,
            is_loading_initial: false,
            is_loading_more: false,
            last_error: None,
        }
    }
}

impl FeedState {
    /// True while any fetch round is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading_initial || self.is_loading_more
    }

    pub fn find(&self, movie_id: i64) -> Option<&MovieSummary> {
        self.items.iter().find(|m| m.id == movie_id)
    }
}

/// Success value of the load operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A merge round ran and contributed `added` movies.
    Loaded { added: usize },
    /// A precondition made the call a no-op; nothing was fetched.
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadKind {
    Initial,
    NextPage,
}

/// Merges two paginated upstream feeds into one duplicate-free list.
pub struct FeedAggregator {
    popular: Arc<dyn PopularMoviesPort>,
    trending: Arc<dyn TrendingMoviesPort>,
    favorites: Arc<dyn FavoritePort>,
    state: RwLock<FeedState>,
    observer: Option<Arc<dyn StateObserver<FeedState>>>,
}

impl FeedAggregator {
    pub fn new(
        popular: Arc<dyn PopularMoviesPort>,
        trending: Arc<dyn TrendingMoviesPort>,
        favorites: Arc<dyn FavoritePort>,
    ) -> Self {
        Self {
            popular,
            trending,
            favorites,
            state: RwLock::new(FeedState::default()),
            observer: None,
        }
    }

    /// Install the single observer notified after each state mutation.
    pub fn with_observer(mut self, observer: Arc<dyn StateObserver<FeedState>>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> FeedState {
        self.state.read().await.clone()
    }

    /// Load page 1 and replace the feed with it.
    ///
    /// No-op when the feed already holds items and the last attempt succeeded, or
    /// while another round is in flight. On failure the previous items are kept
    /// and pagination stops until the next successful initial load.
    pub async fn load_initial(&self) -> Result<LoadOutcome, FetchError> {
        self.load(LoadKind::Initial).await
    }

    /// Load the current page and append its batch to the feed.
    ///
    /// No-op when the end of data was reached or a round is already in flight.
    pub async fn load_next_page(&self) -> Result<LoadOutcome, FetchError> {
        self.load(LoadKind::NextPage).await
    }

    /// Invert a movie's favorite flag via the favorite port.
    ///
    /// The local flag flips only after the port confirmed. A movie not in the feed
    /// is still toggled upstream (its current flag is read from the port).
    pub async fn toggle_favorite(&self, movie_id: i64) -> Result<(), FetchError> {
        let current = self
            .state
            .read()
            .await
            .find(movie_id)
            .map(|m| m.is_favorite);

        let result = async {
            let flag = match current {
                Some(flag) => flag,
                None => self.favorites.is_favorite(movie_id).await?,
            };
            self.favorites.set_favorite(movie_id, !flag).await?;
            Ok::<bool, FetchError>(!flag)
        }
        .await
        .map_err(|e| e.context("Failed to toggle favorite"));

        {
            let mut state = self.state.write().await;
            match &result {
                Ok(new_flag) => {
                    if let Some(movie) = state.items.iter_mut().find(|m| m.id == movie_id) {
                        movie.is_favorite = *new_flag;
                    }
                }
                Err(e) => state.last_error = Some(e.to_string()),
            }
        }
        self.notify().await;

        match result {
            Ok(new_flag) => {
                info!(movie_id, is_favorite = new_flag, "favorite toggled");
                Ok(())
            }
            Err(e) => {
                warn!(movie_id, error = %e, "favorite toggle failed");
                Err(e)
            }
        }
    }

    /// Re-read one movie's favorite flag from the port into the feed.
    ///
    /// Used when another screen changed the flag. Movies not in the feed are
    /// ignored; a port failure leaves the feed and `last_error` untouched.
    pub async fn refresh_favorite(&self, movie_id: i64) -> Result<(), FetchError> {
        let flag = self.favorites.is_favorite(movie_id).await?;
        let changed = {
            let mut state = self.state.write().await;
            match state.items.iter_mut().find(|m| m.id == movie_id) {
                Some(movie) if movie.is_favorite != flag => {
                    movie.is_favorite = flag;
                    true
                }
                _ => false,
            }
        };
        if changed {
            debug!(movie_id, is_favorite = flag, "favorite refreshed");
            self.notify().await;
        }
        Ok(())
    }

    async fn load(&self, kind: LoadKind) -> Result<LoadOutcome, FetchError> {
        let Some(page) = self.begin(kind).await else {
            debug!(?kind, "load skipped");
            return Ok(LoadOutcome::Skipped);
        };
        self.notify().await;

        let fetched = tokio::try_join!(
            self.popular.fetch_popular(page),
            self.trending.fetch_trending(page)
        );

        let outcome = {
            let mut state = self.state.write().await;
            match kind {
                LoadKind::Initial => state.is_loading_initial = false,
                LoadKind::NextPage => state.is_loading_more = false,
            }
            match fetched {
                Ok((popular, trending)) => Ok(apply_round(&mut state, kind, popular, trending)),
                Err(e) => {
                    let e = e.context("Failed to load movies");
                    state.last_error = Some(e.to_string());
                    state.has_more = false;
                    Err(e)
                }
            }
        };
        self.notify().await;

        match &outcome {
            Ok(LoadOutcome::Loaded { added }) => info!(?kind, page, added, "feed round merged"),
            Ok(LoadOutcome::Skipped) => {}
            Err(e) => warn!(?kind, page, error = %e, "feed round failed"),
        }
        outcome
    }

    /// Check preconditions and mark the round in flight. Returns the page to fetch.
    async fn begin(&self, kind: LoadKind) -> Option<u32> {
        let mut state = self.state.write().await;
        if state.is_loading() {
            return None;
        }
        match kind {
            LoadKind::Initial => {
                if !state.items.is_empty() && state.last_error.is_none() {
                    return None;
                }
                state.is_loading_initial = true;
                state.page = 1;
                state.has_more = true;
            }
            LoadKind::NextPage => {
                if !state.has_more {
                    return None;
                }
                state.is_loading_more = true;
            }
        }
        state.last_error = None;
        Some(state.page)
    }

    async fn notify(&self) {
        if let Some(observer) = &self.observer {
            let snapshot = self.state.read().await.clone();
            observer.state_changed(&snapshot);
        }
    }
}

/// Merge a successful round into `state` and advance pagination.
fn apply_round(
    state: &mut FeedState,
    kind: LoadKind,
    popular: Vec<MovieSummary>,
    trending: Vec<MovieSummary>,
) -> LoadOutcome {
    let exhausted = popular.len() < PAGE_SIZE && trending.len() < PAGE_SIZE;

    let batch = match kind {
        LoadKind::Initial => merge_batch(HashSet::new(), popular, trending),
        LoadKind::NextPage => {
            let seen = state.items.iter().map(|m| m.id).collect();
            merge_batch(seen, popular, trending)
        }
    };
    let added = batch.len();

    match kind {
        LoadKind::Initial => state.items = batch,
        LoadKind::NextPage => state.items.extend(batch),
    }

    if exhausted {
        state.has_more = false;
    } else {
        state.page += 1;
    }
    LoadOutcome::Loaded { added }
}

/// Dedupe popular-then-trending against `seen`, then stable-sort by title.
///
/// Popular wins on id collision; equal titles keep popular-before-trending order.
pub fn merge_batch(
    mut seen: HashSet<i64>,
    popular: Vec<MovieSummary>,
    trending: Vec<MovieSummary>,
) -> Vec<MovieSummary> {
    let mut batch: Vec<MovieSummary> = popular
        .into_iter()
        .chain(trending)
        .filter(|m| seen.insert(m.id))
        .collect();
    batch.sort_by(|a, b| a.title.cmp(&b.title));
    batch
}
