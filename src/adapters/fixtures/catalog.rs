//! Deterministic in-memory catalog for development and testing.
//!
//! Popular and trending overlap on part of their ids so the feed's dedup path is
//! exercised, and both run out after a few pages so end-of-data is reachable.

use crate::domain::{FetchError, MovieDetail, MovieSummary};
use crate::ports::{FavoritePort, MovieDetailPort, PopularMoviesPort, TrendingMoviesPort};
use crate::usecases::PAGE_SIZE;
use chrono::NaiveDate;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const ADJECTIVES: &[&str] = &[
    "Silent", "Crimson", "Hidden", "Last", "Broken", "Golden", "Midnight", "Distant", "Wild",
    "Frozen",
];
const NOUNS: &[&str] = &[
    "Harbor", "Empire", "Garden", "Signal", "River", "Crown", "Orbit", "Canyon", "Mirror", "Tide",
];
const GENRES: &[&str] = &[
    "Action", "Drama", "Comedy", "Thriller", "Science Fiction", "Animation", "Romance",
];

/// Ids served by the popular feed: 55 movies, pages of 20/20/15.
const POPULAR_IDS: RangeInclusive<i64> = 1..=55;
/// Ids served by the trending feed: 47 movies, overlapping popular on 40..=55.
const TRENDING_IDS: RangeInclusive<i64> = 40..=86;

/// In-memory catalog with simulated latency.
pub struct FixtureCatalog {
    favorites: Arc<dyn FavoritePort>,
    /// Simulated network delay.
    delay: Duration,
}

impl FixtureCatalog {
    pub fn with_delay(favorites: Arc<dyn FavoritePort>, delay_ms: u64) -> Self {
        Self {
            favorites,
            delay: Duration::from_millis(delay_ms),
        }
    }

    async fn serve(
        &self,
        feed: &'static str,
        ids: RangeInclusive<i64>,
        page: u32,
    ) -> Result<Vec<MovieSummary>, FetchError> {
        if page == 0 {
            return Err(FetchError::new("page must be >= 1"));
        }
        info!(feed, page, "[FIXTURE] serving page");
        tokio::time::sleep(self.delay).await;

        let skip = (page as usize - 1) * PAGE_SIZE;
        let mut movies = Vec::new();
        for id in ids.skip(skip).take(PAGE_SIZE) {
            let is_favorite = self.favorites.is_favorite(id).await?;
            movies.push(fixture_movie(id, is_favorite));
        }
        Ok(movies)
    }
}

#[async_trait::async_trait]
impl PopularMoviesPort for FixtureCatalog {
    async fn fetch_popular(&self, page: u32) -> Result<Vec<MovieSummary>, FetchError> {
        self.serve("popular", POPULAR_IDS, page).await
    }
}

#[async_trait::async_trait]
impl TrendingMoviesPort for FixtureCatalog {
    async fn fetch_trending(&self, page: u32) -> Result<Vec<MovieSummary>, FetchError> {
        self.serve("trending", TRENDING_IDS, page).await
    }
}

#[async_trait::async_trait]
impl MovieDetailPort for FixtureCatalog {
    async fn fetch_detail(&self, movie_id: i64) -> Result<MovieDetail, FetchError> {
        if !POPULAR_IDS.contains(&movie_id) && !TRENDING_IDS.contains(&movie_id) {
            return Err(FetchError::new(format!("movie {} not found", movie_id)));
        }
        tokio::time::sleep(self.delay).await;
        let is_favorite = self.favorites.is_favorite(movie_id).await?;
        let summary = fixture_movie(movie_id, is_favorite);
        let slot = movie_id.unsigned_abs() as usize;
        Ok(MovieDetail {
            tagline: Some(format!("Every {} has a story.", NOUNS[slot % NOUNS.len()].to_lowercase())),
            runtime: Some(85 + (slot % 60) as u32),
            genres: vec![
                GENRES[slot % GENRES.len()].to_string(),
                GENRES[(slot + 3) % GENRES.len()].to_string(),
            ],
            status: Some("Released".to_string()),
            summary,
        })
    }
}

/// Build the fixture movie for `id`. Titles are unique for ids 1..=100.
fn fixture_movie(id: i64, is_favorite: bool) -> MovieSummary {
    let slot = (id.unsigned_abs() as usize).saturating_sub(1);
    let adjective = ADJECTIVES[slot % ADJECTIVES.len()];
    let noun = NOUNS[(slot / ADJECTIVES.len()) % NOUNS.len()];
    let year = 1980 + (slot % 45) as i32;
    let month = 1 + (slot % 12) as u32;
    MovieSummary {
        id,
        title: format!("The {} {}", adjective, noun),
        overview: format!(
            "A {} tale set around the {}.",
            adjective.to_lowercase(),
            noun.to_lowercase()
        ),
        poster_path: Some(format!("/fixture/{}.jpg", id)),
        backdrop_path: None,
        release_date: NaiveDate::from_ymd_opt(year, month, 1),
        vote_average: 5.0 + (slot % 50) as f64 / 10.0,
        is_favorite,
    }
}
