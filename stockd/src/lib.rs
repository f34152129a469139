//! stockd
//!
//! HTTP service exposing the static stock catalog from `stockd-core` through
//! three read-only routes, plus a periodic self-ping against its own
//! health-check URL.
//!
//! - `config`: environment-derived settings (`PORT`, self-ping target).
//! - `http`: the axum router and request handlers.
//! - `pinger`: the cancellable self-ping background task.
//!
//! The binary entrypoint in `main.rs` only wires these together; everything is
//! exposed as a library so integration tests can boot the router on an
//! ephemeral port and drive it over real sockets.
#![warn(missing_docs)]

/// Environment-derived service configuration.
pub mod config;
/// Axum router, handlers, and the HTTP error mapping.
pub mod http;
/// Periodic self-ping task and its cancellable handle.
pub mod pinger;

pub use config::Config;
pub use http::router;
pub use pinger::PingHandle;
