//! Detail screen: load one movie, toggle its favorite flag, navigate back.

use crate::domain::{FetchError, MovieDetail};
use crate::ports::{FavoritePort, MovieDetailPort, NavigatorPort, StateObserver, Tab};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Observable state of the detail screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    pub movie: Option<MovieDetail>,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

/// Movie detail screen for a single movie id.
pub struct MovieDetailService {
    movie_id: i64,
    details: Arc<dyn MovieDetailPort>,
    favorites: Arc<dyn FavoritePort>,
    navigator: Arc<dyn NavigatorPort>,
    state: RwLock<DetailState>,
    observer: Option<Arc<dyn StateObserver<DetailState>>>,
}

impl MovieDetailService {
    pub fn new(
        movie_id: i64,
        details: Arc<dyn MovieDetailPort>,
        favorites: Arc<dyn FavoritePort>,
        navigator: Arc<dyn NavigatorPort>,
    ) -> Self {
        Self {
            movie_id,
            details,
            favorites,
            navigator,
            state: RwLock::new(DetailState::default()),
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn StateObserver<DetailState>>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub async fn state(&self) -> DetailState {
        self.state.read().await.clone()
    }

    /// Fetch the detail. A failure keeps whatever movie was shown before.
    pub async fn load(&self) -> Result<(), FetchError> {
        {
            let mut state = self.state.write().await;
            state.is_loading = true;
            state.last_error = None;
        }
        self.notify().await;

        let result = self
            .details
            .fetch_detail(self.movie_id)
            .await
            .map_err(|e| e.context("Failed to load movie details"));

        let outcome = {
            let mut state = self.state.write().await;
            state.is_loading = false;
            match result {
                Ok(movie) => {
                    state.movie = Some(movie);
                    Ok(())
                }
                Err(e) => {
                    state.last_error = Some(e.to_string());
                    Err(e)
                }
            }
        };
        self.notify().await;

        if let Err(e) = &outcome {
            warn!(movie_id = self.movie_id, error = %e, "movie detail load failed");
        }
        outcome
    }

    pub async fn retry(&self) -> Result<(), FetchError> {
        self.load().await
    }

    /// Invert the loaded movie's favorite flag. No-op until a movie is loaded.
    pub async fn toggle_favorite(&self) -> Result<(), FetchError> {
        let Some(current) = self.state.read().await.movie.as_ref().map(|m| m.is_favorite())
        else {
            return Ok(());
        };

        let result = self
            .favorites
            .set_favorite(self.movie_id, !current)
            .await
            .map_err(|e| e.context("Failed to toggle favorite"));

        {
            let mut state = self.state.write().await;
            match &result {
                Ok(()) => {
                    if let Some(movie) = state.movie.as_mut() {
                        movie.summary.is_favorite = !current;
                    }
                }
                Err(e) => state.last_error = Some(e.to_string()),
            }
        }
        self.notify().await;

        match &result {
            Ok(()) => info!(movie_id = self.movie_id, is_favorite = !current, "favorite toggled"),
            Err(e) => warn!(movie_id = self.movie_id, error = %e, "favorite toggle failed"),
        }
        result
    }

    pub fn navigate_back(&self) {
        self.navigator.pop(Tab::Movies);
    }

    async fn notify(&self) {
        if let Some(observer) = &self.observer {
            let snapshot = self.state.read().await.clone();
            observer.state_changed(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{
        FakeFavorites, NavCall, RecordingNavigator, RecordingObserver, ScriptedCatalog, detail,
    };

    struct Fixture {
        catalog: Arc<ScriptedCatalog>,
        favorites: Arc<FakeFavorites>,
        navigator: Arc<RecordingNavigator>,
    }

    impl Fixture {
        fn new() -> Self {
            let catalog = Arc::new(ScriptedCatalog::new());
            catalog.set_detail(detail(7, "Se7en"));
            Self {
                catalog,
                favorites: Arc::new(FakeFavorites::default()),
                navigator: Arc::new(RecordingNavigator::default()),
            }
        }

        fn service(&self, movie_id: i64) -> MovieDetailService {
            MovieDetailService::new(
                movie_id,
                self.catalog.clone(),
                self.favorites.clone(),
                self.navigator.clone(),
            )
        }
    }

    #[tokio::test]
    async fn load_stores_movie() {
        let fx = Fixture::new();
        let observer: Arc<RecordingObserver<DetailState>> = Arc::new(RecordingObserver::default());
        let screen = fx.service(7).with_observer(observer.clone());

        screen.load().await.unwrap();

        let state = screen.state().await;
        assert_eq!(state.movie.unwrap().summary.title, "Se7en");
        assert!(!state.is_loading);
        let seen = observer.snapshots();
        assert!(seen[0].is_loading);
        assert!(!seen[seen.len() - 1].is_loading);
    }

    #[tokio::test]
    async fn failed_reload_keeps_previous_movie() {
        let fx = Fixture::new();
        let screen = fx.service(7);
        screen.load().await.unwrap();

        fx.catalog.set_failing(true);
        let err = screen.retry().await.unwrap_err();

        let state = screen.state().await;
        assert!(state.movie.is_some());
        assert_eq!(state.last_error, Some(err.to_string()));
        assert!(err.message().starts_with("Failed to load movie details"));
    }

    #[tokio::test]
    async fn toggle_before_load_is_noop() {
        let fx = Fixture::new();
        let screen = fx.service(7);

        screen.toggle_favorite().await.unwrap();

        assert!(fx.favorites.writes().is_empty());
    }

    #[tokio::test]
    async fn toggle_flips_after_confirmation() {
        let fx = Fixture::new();
        let screen = fx.service(7);
        screen.load().await.unwrap();

        screen.toggle_favorite().await.unwrap();
        assert!(screen.state().await.movie.unwrap().is_favorite());

        fx.favorites.set_failing(true);
        screen.toggle_favorite().await.unwrap_err();
        let state = screen.state().await;
        assert!(state.movie.unwrap().is_favorite());
        assert!(state.last_error.is_some());
        assert_eq!(fx.favorites.writes(), vec![(7, true)]);
    }

    #[test]
    fn navigate_back_pops_movies_tab() {
        let fx = Fixture::new();
        fx.service(7).navigate_back();
        assert_eq!(fx.navigator.calls(), vec![NavCall::Pop(Tab::Movies)]);
    }
}
