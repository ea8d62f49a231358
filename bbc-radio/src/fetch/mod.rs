//! Page fetching.
//!
//! One GET per page, bounded by a timeout, failing on non-2xx statuses.
//! Pages come back as raw HTML plus the effective URL of the response so
//! that relative links can be made absolute during extraction.

mod client;
mod error;
mod mock;
mod page;

pub use client::{FetcherConfig, HttpFetcher, PageFetcher};
pub use error::FetchError;
pub use mock::StaticFetcher;
pub use page::Page;
