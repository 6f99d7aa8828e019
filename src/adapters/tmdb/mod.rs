//! TMDB adapter. Implements the catalog ports against The Movie Database v3 API.

pub mod client;
pub mod dto;
pub mod mapper;

pub use client::TmdbCatalog;
