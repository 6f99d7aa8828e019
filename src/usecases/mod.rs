//! Application use cases. Orchestrate domain logic via ports.

pub mod feed_aggregator;
pub mod movie_detail_service;
pub mod movie_list_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use feed_aggregator::{FeedAggregator, FeedState, LoadOutcome, PAGE_SIZE};
pub use movie_detail_service::{DetailState, MovieDetailService};
pub use movie_list_service::MovieListService;
