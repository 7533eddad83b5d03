//! HTTP server for the Nollywatch aggregation API.
//!
//! Exposed as a library so integration tests can build the router
//! in-process with a mock upstream catalog.

pub mod api;
pub mod metrics;
pub mod state;
