//! HTTP transport module
//!
//! A thin wrapper over `reqwest` that issues exactly one attempt per call.
//! Page traversal treats the first failed request as fatal, so there is no
//! retry or backoff machinery here; a timeout applies to each individual
//! request.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
