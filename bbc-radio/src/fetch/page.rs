//! Fetched page and link resolution.

use url::Url;

/// A fetched HTML page.
///
/// `url` is the effective URL of the response (after redirects). Relative
/// links found in `body` resolve against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    url: Url,
    body: String,
}

impl Page {
    pub fn new(url: Url, body: impl Into<String>) -> Self {
        Self {
            url,
            body: body.into(),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Resolve an `href` as found in the page to an absolute URL.
    pub fn resolve(&self, href: &str) -> Result<Url, url::ParseError> {
        self.url.join(href)
    }
}
