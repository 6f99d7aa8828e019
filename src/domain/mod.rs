//! Core domain layer. No external I/O dependencies.
//!
//! Entities and the single error kind live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{MovieDetail, MovieSummary};
pub use errors::FetchError;
