//! Downloading task URLs.
//!
//! The runner talks to the network through the [`Fetcher`] trait so that
//! tests can substitute canned responses. [`HttpFetcher`] is the real
//! implementation.

pub mod http;

pub use http::{FetchResponse, HttpFetcher, DEFAULT_TIMEOUT};

use crate::error::Result;

/// Something that can download a URL as text.
pub trait Fetcher {
    /// Fetch `url`.
    ///
    /// Non-success statuses are returned as `HarvesterError::FetchFailed`.
    fn fetch(&self, url: &str) -> Result<FetchResponse>;
}
