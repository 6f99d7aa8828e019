//! Infrastructure adapters. Implement outbound ports and the inbound front-end.
//!
//! TMDB, offline fixtures, filesystem, terminal UI. Map errors to FetchError.

pub mod fixtures;
pub mod persistence;
pub mod tmdb;
pub mod ui;
