//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{FetchError, MovieDetail, MovieSummary};

/// Popular movies use case. One page of results per call.
#[async_trait::async_trait]
pub trait PopularMoviesPort: Send + Sync {
    /// Fetch a page of popular movies. `page` is 1-based.
    ///
    /// Result order defines priority when merged with trending movies.
    async fn fetch_popular(&self, page: u32) -> Result<Vec<MovieSummary>, FetchError>;
}

/// Trending movies use case. Same contract as [`PopularMoviesPort`], lower priority on id collision.
#[async_trait::async_trait]
pub trait TrendingMoviesPort: Send + Sync {
    async fn fetch_trending(&self, page: u32) -> Result<Vec<MovieSummary>, FetchError>;
}

/// Movie detail use case.
#[async_trait::async_trait]
pub trait MovieDetailPort: Send + Sync {
    async fn fetch_detail(&self, movie_id: i64) -> Result<MovieDetail, FetchError>;
}

/// Favorite toggle use case. Persists the favorite flag of a single movie.
#[async_trait::async_trait]
pub trait FavoritePort: Send + Sync {
    /// Persist the new flag for `movie_id`.
    async fn set_favorite(&self, movie_id: i64, is_favorite: bool) -> Result<(), FetchError>;

    /// Current persisted flag. Movies never toggled are not favorites.
    async fn is_favorite(&self, movie_id: i64) -> Result<bool, FetchError>;
}
