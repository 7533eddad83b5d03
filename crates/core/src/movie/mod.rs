//! Canonical movie representation shared by the aggregator, the HTTP
//! surface and the client facade.

mod samples;
mod types;

pub use samples::sample_movies;
pub use types::{Movie, Platform, PriceCategory};
