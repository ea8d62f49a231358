//! In-memory fetcher for testing without network access.
//!
//! Serves canned HTML bodies keyed by URL, as if they were live responses.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use url::Url;

use super::client::PageFetcher;
use super::error::FetchError;
use super::page::Page;

#[derive(Debug, Clone)]
enum Canned {
    Page { final_url: Url, body: String },
    Status(u16),
}

/// Fetcher that serves pages from memory.
///
/// Counts every fetch so tests can assert how many requests were made.
/// Clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, Canned>,
    calls: Arc<AtomicUsize>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    pub fn with_page(self, url: &Url, body: impl Into<String>) -> Self {
        self.with_redirect(url, url, body)
    }

    /// Serve `body` for `url` as though the server redirected to `final_url`.
    pub fn with_redirect(mut self, url: &Url, final_url: &Url, body: impl Into<String>) -> Self {
        self.pages.insert(
            url.to_string(),
            Canned::Page {
                final_url: final_url.clone(),
                body: body.into(),
            },
        );
        self
    }

    /// Answer `url` with an HTTP error status.
    pub fn with_status(mut self, url: &Url, status: u16) -> Self {
        self.pages.insert(url.to_string(), Canned::Status(status));
        self
    }

    /// Number of fetches performed so far, across all clones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &Url) -> Result<Page, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        // Give concurrent callers a chance to interleave.
        tokio::task::yield_now().await;

        match self.pages.get(url.as_str()) {
            Some(Canned::Page { final_url, body }) => Ok(Page::new(final_url.clone(), body.clone())),
            Some(Canned::Status(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(FetchError::NotFound {
                url: url.to_string(),
            }),
        }
    }
}
