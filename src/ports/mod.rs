//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by UI/adapter into the application
//! - Outbound: Called by application into infrastructure

pub mod inbound;
pub mod navigator;
pub mod outbound;

pub use inbound::{InputPort, StateObserver};
pub use navigator::{NavigatorPort, Route, Sheet, Tab};
pub use outbound::{FavoritePort, MovieDetailPort, PopularMoviesPort, TrendingMoviesPort};
