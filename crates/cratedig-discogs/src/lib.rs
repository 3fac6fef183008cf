//! HTTP client for the Discogs release endpoint.
//!
//! Wraps `reqwest` with Discogs-specific authentication (key/secret pair in
//! the `Authorization` header), the mandatory `User-Agent`, and typed error
//! handling. One attempt per call: no retry, no backoff, no caching.

mod client;
mod error;

pub use client::DiscogsClient;
pub use error::DiscogsError;
