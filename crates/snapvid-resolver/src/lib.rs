//! Client for the external video-resolution API.
//!
//! This crate issues the single outbound call that turns a validated video
//! URL into a set of downloadable media variants. One attempt per request:
//! no retry, no backoff, no timeout beyond the transport default.

pub mod client;
pub mod error;

pub use client::{ResolverClient, ResolverConfig};
pub use error::{ResolveError, ResolveResult};
