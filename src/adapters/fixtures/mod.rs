//! Offline catalog adapter. Implements the catalog ports without network access.

pub mod catalog;

pub use catalog::FixtureCatalog;
