//! Test doubles for the outbound ports.

use crate::domain::{FetchError, MovieDetail, MovieSummary};
use crate::ports::{
    FavoritePort, MovieDetailPort, NavigatorPort, PopularMoviesPort, Route, Sheet, StateObserver,
    Tab, TrendingMoviesPort,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

pub fn movie(id: i64, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        overview: String::new(),
        poster_path: None,
        backdrop_path: None,
        release_date: None,
        vote_average: 0.0,
        is_favorite: false,
    }
}

pub fn detail(id: i64, title: &str) -> MovieDetail {
    MovieDetail {
        summary: movie(id, title),
        tagline: None,
        runtime: Some(120),
        genres: vec!["Drama".to_string()],
        status: Some("Released".to_string()),
    }
}

/// Catalog serving scripted pages. Missing pages are empty.
#[derive(Default)]
pub struct ScriptedCatalog {
    popular: Mutex<HashMap<u32, Vec<MovieSummary>>>,
    trending: Mutex<HashMap<u32, Vec<MovieSummary>>>,
    details: Mutex<HashMap<i64, MovieDetail>>,
    failing: AtomicBool,
    calls: AtomicUsize,
    delay: Duration,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn set_popular(&self, page: u32, movies: Vec<MovieSummary>) {
        self.popular.lock().unwrap().insert(page, movies);
    }

    pub fn set_trending(&self, page: u32, movies: Vec<MovieSummary>) {
        self.trending.lock().unwrap().insert(page, movies);
    }

    pub fn set_detail(&self, detail: MovieDetail) {
        self.details.lock().unwrap().insert(detail.id(), detail);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of upstream calls served (popular, trending and detail).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn serve(
        &self,
        pages: &Mutex<HashMap<u32, Vec<MovieSummary>>>,
        page: u32,
    ) -> Result<Vec<MovieSummary>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(FetchError::new("upstream unavailable"));
        }
        Ok(pages.lock().unwrap().get(&page).cloned().unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl PopularMoviesPort for ScriptedCatalog {
    async fn fetch_popular(&self, page: u32) -> Result<Vec<MovieSummary>, FetchError> {
        self.serve(&self.popular, page).await
    }
}

#[async_trait::async_trait]
impl TrendingMoviesPort for ScriptedCatalog {
    async fn fetch_trending(&self, page: u32) -> Result<Vec<MovieSummary>, FetchError> {
        self.serve(&self.trending, page).await
    }
}

#[async_trait::async_trait]
impl MovieDetailPort for ScriptedCatalog {
    async fn fetch_detail(&self, movie_id: i64) -> Result<MovieDetail, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(FetchError::new("upstream unavailable"));
        }
        self.details
            .lock()
            .unwrap()
            .get(&movie_id)
            .cloned()
            .ok_or_else(|| FetchError::new(format!("movie {} not found", movie_id)))
    }
}

/// Favorite store recording every write.
#[derive(Default)]
pub struct FakeFavorites {
    flags: Mutex<HashMap<i64, bool>>,
    writes: Mutex<Vec<(i64, bool)>>,
    failing: AtomicBool,
}

impl FakeFavorites {
    pub fn preset(&self, movie_id: i64, is_favorite: bool) {
        self.flags.lock().unwrap().insert(movie_id, is_favorite);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn writes(&self) -> Vec<(i64, bool)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl FavoritePort for FakeFavorites {
    async fn set_favorite(&self, movie_id: i64, is_favorite: bool) -> Result<(), FetchError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(FetchError::new("favorites store unavailable"));
        }
        self.flags.lock().unwrap().insert(movie_id, is_favorite);
        self.writes.lock().unwrap().push((movie_id, is_favorite));
        Ok(())
    }

    async fn is_favorite(&self, movie_id: i64) -> Result<bool, FetchError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(FetchError::new("favorites store unavailable"));
        }
        Ok(self
            .flags
            .lock()
            .unwrap()
            .get(&movie_id)
            .copied()
            .unwrap_or(false))
    }
}

/// Navigation intent captured by [`RecordingNavigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCall {
    Navigate(Route, Tab, bool),
    Pop(Tab),
    Sheet(Sheet),
}

#[derive(Default)]
pub struct RecordingNavigator {
    calls: Mutex<Vec<NavCall>>,
}

impl RecordingNavigator {
    pub fn calls(&self) -> Vec<NavCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl NavigatorPort for RecordingNavigator {
    fn navigate(&self, route: Route, tab: Tab, hide_tab_bar: bool) {
        self.calls
            .lock()
            .unwrap()
            .push(NavCall::Navigate(route, tab, hide_tab_bar));
    }

    fn pop(&self, tab: Tab) {
        self.calls.lock().unwrap().push(NavCall::Pop(tab));
    }

    fn present_sheet(&self, sheet: Sheet) {
        self.calls.lock().unwrap().push(NavCall::Sheet(sheet));
    }
}

/// Observer keeping every snapshot it was handed.
pub struct RecordingObserver<S> {
    snapshots: Mutex<Vec<S>>,
}

impl<S> Default for RecordingObserver<S> {
    fn default() -> Self {
        Self {
            snapshots: Mutex::new(Vec::new()),
        }
    }
}

impl<S: Clone> RecordingObserver<S> {
    pub fn snapshots(&self) -> Vec<S> {
        self.snapshots.lock().unwrap().clone()
    }
}

impl<S: Clone + Send + Sync> StateObserver<S> for RecordingObserver<S> {
    fn state_changed(&self, state: &S) {
        self.snapshots.lock().unwrap().push(state.clone());
    }
}
