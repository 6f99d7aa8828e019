//! Map TMDB DTOs to domain entities.

use super::dto::{DetailDto, MovieDto};
use crate::domain::{MovieDetail, MovieSummary};
use chrono::NaiveDate;

/// Map a list/detail movie to the domain summary. `is_favorite` comes from the favorites store.
pub fn movie_to_domain(dto: MovieDto, is_favorite: bool) -> MovieSummary {
    let title = dto
        .title
        .filter(|t| !t.trim().is_empty())
        .or(dto.original_title)
        .unwrap_or_else(|| "Untitled".to_string());
    MovieSummary {
        id: dto.id,
        title,
        overview: dto.overview.unwrap_or_default(),
        poster_path: dto.poster_path,
        backdrop_path: dto.backdrop_path,
        release_date: dto.release_date.as_deref().and_then(parse_release_date),
        vote_average: dto.vote_average.unwrap_or(0.0),
        is_favorite,
    }
}

pub fn detail_to_domain(dto: DetailDto, is_favorite: bool) -> MovieDetail {
    MovieDetail {
        summary: movie_to_domain(dto.movie, is_favorite),
        tagline: dto.tagline.filter(|t| !t.trim().is_empty()),
        // TMDB reports 0 for unknown runtimes
        runtime: dto.runtime.filter(|&r| r > 0),
        genres: dto.genres.into_iter().map(|g| g.name).collect(),
        status: dto.status,
    }
}

/// Parse TMDB's "YYYY-MM-DD"; empty or malformed dates become None.
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
