//! Wire types of the TMDB v3 endpoints we call.

use serde::Deserialize;

/// Paged list response (`/movie/popular`, `/trending/movie/week`).
#[derive(Debug, Deserialize)]
pub struct PageDto {
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieDto>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct MovieDto {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// "YYYY-MM-DD", or "" when unknown.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

/// `/movie/{id}` response.
#[derive(Debug, Deserialize)]
pub struct DetailDto {
    #[serde(flatten)]
    pub movie: MovieDto,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<GenreDto>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenreDto {
    pub id: i64,
    pub name: String,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct StatusDto {
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub status_message: Option<String>,
}
