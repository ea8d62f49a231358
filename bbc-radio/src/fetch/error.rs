//! Page fetch error types.

/// Errors that can occur while fetching a page.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request failed before a response arrived (DNS, TLS, connection reset)
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// No response within the configured timeout
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// Server answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// URL could not be parsed or joined
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// No canned page registered for this URL
    #[error("no page registered for {url}")]
    NotFound { url: String },
}

impl FetchError {
    /// Wrap a reqwest error, separating out timeouts.
    pub(crate) fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Request {
                url: url.to_string(),
                source,
            }
        }
    }

    /// HTTP status code, when the server got as far as answering.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
