//! List screen controller: owns the feed, forwards navigation intents.

use crate::domain::FetchError;
use crate::ports::{NavigatorPort, Route, Sheet, Tab};
use crate::usecases::feed_aggregator::{FeedAggregator, FeedState, LoadOutcome};
use std::sync::Arc;
use tracing::info;

/// Movie list screen. Thin layer over [`FeedAggregator`] plus navigation.
pub struct MovieListService {
    feed: Arc<FeedAggregator>,
    navigator: Arc<dyn NavigatorPort>,
}

impl MovieListService {
    pub fn new(feed: Arc<FeedAggregator>, navigator: Arc<dyn NavigatorPort>) -> Self {
        Self { feed, navigator }
    }

    /// Screen appeared. Loads the first page unless the feed already has data.
    pub async fn open(&self) -> Result<LoadOutcome, FetchError> {
        self.feed.load_initial().await
    }

    pub async fn load_next_page(&self) -> Result<LoadOutcome, FetchError> {
        self.feed.load_next_page().await
    }

    /// Manual retry. Restarts pagination from page 1.
    pub async fn retry(&self) -> Result<LoadOutcome, FetchError> {
        info!("retrying movie list");
        self.feed.load_initial().await
    }

    pub async fn toggle_favorite(&self, movie_id: i64) -> Result<(), FetchError> {
        self.feed.toggle_favorite(movie_id).await
    }

    /// Returning from a screen that may have changed this movie's favorite flag.
    pub async fn refresh_favorite(&self, movie_id: i64) -> Result<(), FetchError> {
        self.feed.refresh_favorite(movie_id).await
    }

    pub async fn state(&self) -> FeedState {
        self.feed.state().await
    }

    pub fn navigate_to_movie_detail(&self, movie_id: i64) {
        self.navigator
            .navigate(Route::MovieDetail { movie_id }, Tab::Movies, false);
    }

    pub fn present_global_search(&self) {
        self.navigator.navigate(Route::Search, Tab::Movies, true);
    }

    pub fn show_search_sheet(&self) {
        self.navigator.present_sheet(Sheet::Search);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{
        FakeFavorites, NavCall, RecordingNavigator, ScriptedCatalog, movie,
    };

    fn service(
        catalog: &Arc<ScriptedCatalog>,
        navigator: &Arc<RecordingNavigator>,
    ) -> MovieListService {
        let favorites = Arc::new(FakeFavorites::default());
        let feed = Arc::new(FeedAggregator::new(
            catalog.clone(),
            catalog.clone(),
            favorites,
        ));
        MovieListService::new(feed, navigator.clone())
    }

    #[tokio::test]
    async fn open_twice_loads_once() {
        let catalog = Arc::new(ScriptedCatalog::new());
        catalog.set_popular(1, vec![movie(1, "Alien")]);
        let navigator = Arc::new(RecordingNavigator::default());
        let list = service(&catalog, &navigator);

        list.open().await.unwrap();
        let again = list.open().await.unwrap();

        assert_eq!(again, LoadOutcome::Skipped);
        assert_eq!(list.state().await.items.len(), 1);
        assert_eq!(catalog.calls(), 2);
    }

    #[tokio::test]
    async fn retry_after_failure_reloads() {
        let catalog = Arc::new(ScriptedCatalog::new());
        catalog.set_failing(true);
        let navigator = Arc::new(RecordingNavigator::default());
        let list = service(&catalog, &navigator);
        list.open().await.unwrap_err();
        assert!(list.state().await.last_error.is_some());

        catalog.set_failing(false);
        catalog.set_popular(1, vec![movie(1, "Alien")]);
        let outcome = list.retry().await.unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded { added: 1 });
        let state = list.state().await;
        assert_eq!(state.last_error, None);
        assert_eq!(state.items[0].title, "Alien");
    }

    #[tokio::test]
    async fn refresh_favorite_updates_list_entry() {
        let catalog = Arc::new(ScriptedCatalog::new());
        catalog.set_popular(1, vec![movie(1, "Alien")]);
        let navigator = Arc::new(RecordingNavigator::default());
        let favorites = Arc::new(FakeFavorites::default());
        let feed = Arc::new(FeedAggregator::new(
            catalog.clone(),
            catalog.clone(),
            favorites.clone(),
        ));
        let list = MovieListService::new(feed, navigator.clone());
        list.open().await.unwrap();

        favorites.preset(1, true);
        list.refresh_favorite(1).await.unwrap();

        assert!(list.state().await.items[0].is_favorite);
    }

    #[tokio::test]
    async fn navigation_intents_target_movies_tab() {
        let catalog = Arc::new(ScriptedCatalog::new());
        let navigator = Arc::new(RecordingNavigator::default());
        let list = service(&catalog, &navigator);

        list.navigate_to_movie_detail(42);
        list.present_global_search();
        list.show_search_sheet();

        assert_eq!(
            navigator.calls(),
            vec![
                NavCall::Navigate(Route::MovieDetail { movie_id: 42 }, Tab::Movies, false),
                NavCall::Navigate(Route::Search, Tab::Movies, true),
                NavCall::Sheet(Sheet::Search),
            ]
        );
    }
}
