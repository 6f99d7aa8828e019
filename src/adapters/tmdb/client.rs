//! TMDB HTTP client. Implements PopularMoviesPort, TrendingMoviesPort and MovieDetailPort.
//!
//! Favorite flags are not known to TMDB; they are overlaid from the FavoritePort.

use super::dto::{DetailDto, PageDto, StatusDto};
use super::mapper;
use crate::domain::{FetchError, MovieDetail, MovieSummary};
use crate::ports::{FavoritePort, MovieDetailPort, PopularMoviesPort, TrendingMoviesPort};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const POPULAR_PATH: &str = "/movie/popular";
const TRENDING_PATH: &str = "/trending/movie/week";

/// TMDB v3 catalog.
///
/// Accepts either a v3 API key (sent as `api_key` query parameter) or a v4 read
/// access token (sent as a bearer token).
pub struct TmdbCatalog {
    client: Client,
    api_url: String,
    api_key: String,
    language: String,
    favorites: Arc<dyn FavoritePort>,
}

impl TmdbCatalog {
    /// Create a new TMDB catalog.
    ///
    /// # Arguments
    /// * `api_url` - API root (e.g., "https://api.themoviedb.org/3")
    /// * `api_key` - v3 key or v4 read access token
    /// * `language` - response language (e.g., "en-US")
    /// * `timeout` - per-request timeout
    /// * `favorites` - store used to mark favorites in results
    pub fn new(
        api_url: String,
        api_key: String,
        language: String,
        timeout: Duration,
        favorites: Arc<dyn FavoritePort>,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::new(format!("HTTP client init failed: {}", e)))?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            language,
            favorites,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        page: Option<u32>,
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.api_url, path);
        let mut request = self
            .client
            .get(&url)
            .query(&[("language", self.language.as_str())]);
        if let Some(page) = page {
            request = request.query(&[("page", page)]);
        }
        request = if is_read_access_token(&self.api_key) {
            request.bearer_auth(&self.api_key)
        } else {
            request.query(&[("api_key", self.api_key.as_str())])
        };

        debug!(path, ?page, "TMDB request");
        let response = request
            .send()
            .await
            .map_err(|e| FetchError::new(format!("TMDB request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<StatusDto>(&text)
                .ok()
                .and_then(|s| s.status_message)
                .unwrap_or_else(|| text.chars().take(200).collect());
            warn!(status = %status, path, "TMDB returned error");
            return Err(FetchError::new(format!(
                "TMDB error {}: {}",
                status, message
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::new(format!("Failed to parse TMDB response: {}", e)))
    }

    async fn fetch_page(&self, path: &str, page: u32) -> Result<Vec<MovieSummary>, FetchError> {
        let dto: PageDto = self.get_json(path, Some(page)).await?;
        debug!(
            path,
            page = dto.page,
            total_pages = ?dto.total_pages,
            count = dto.results.len(),
            "TMDB page received"
        );
        let mut movies = Vec::with_capacity(dto.results.len());
        for movie in dto.results {
            let is_favorite = self.favorites.is_favorite(movie.id).await?;
            movies.push(mapper::movie_to_domain(movie, is_favorite));
        }
        Ok(movies)
    }
}

#[async_trait::async_trait]
impl PopularMoviesPort for TmdbCatalog {
    async fn fetch_popular(&self, page: u32) -> Result<Vec<MovieSummary>, FetchError> {
        self.fetch_page(POPULAR_PATH, page).await
    }
}

#[async_trait::async_trait]
impl TrendingMoviesPort for TmdbCatalog {
    async fn fetch_trending(&self, page: u32) -> Result<Vec<MovieSummary>, FetchError> {
        self.fetch_page(TRENDING_PATH, page).await
    }
}

#[async_trait::async_trait]
impl MovieDetailPort for TmdbCatalog {
    async fn fetch_detail(&self, movie_id: i64) -> Result<MovieDetail, FetchError> {
        let dto: DetailDto = self
            .get_json(&format!("/movie/{}", movie_id), None)
            .await?;
        let is_favorite = self.favorites.is_favorite(movie_id).await?;
        Ok(mapper::detail_to_domain(dto, is_favorite))
    }
}

/// v4 read access tokens are JWTs; v3 keys are 32 hex chars.
fn is_read_access_token(key: &str) -> bool {
    key.starts_with("eyJ") && key.contains('.')
}
