//! Domain entities. Pure data structures for the core business.
//!
//! No TMDB/HTTP types here — adapters map their DTOs into these.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A movie as shown in the list screen.
///
/// Only `id`, `title` and `is_favorite` carry meaning for the feed; the rest is
/// descriptive and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub vote_average: f64,
    pub is_favorite: bool,
}

impl MovieSummary {
    /// Release year for display, if the date is known.
    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.release_date.map(|d| d.year())
    }
}

/// A movie as shown in the detail screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub summary: MovieSummary,
    pub tagline: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    pub genres: Vec<String>,
    pub status: Option<String>,
}

impl MovieDetail {
    pub fn id(&self) -> i64 {
        self.summary.id
    }

    pub fn is_favorite(&self) -> bool {
        self.summary.is_favorite
    }
}
