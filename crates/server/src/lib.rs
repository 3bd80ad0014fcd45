//! HTTP server for the paperstack resource-sharing service.
//!
//! Exposed as a library so integration tests can build the router
//! in-process; the `paperstack` binary is a thin wrapper around these
//! modules.

pub mod api;
pub mod metrics;
pub mod state;
