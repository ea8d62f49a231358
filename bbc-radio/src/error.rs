//! Crate error types.
//!
//! Extraction errors mean the remote page no longer looks the way this crate
//! expects. They are kept apart from "not found" conditions and transport
//! failures so callers can tell a broken scraper from a bad request.

use crate::domain::InvalidDateError;
use crate::fetch::FetchError;

/// The page was fetched but its structure did not match expectations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    /// Stations listing yielded no stations at all
    #[error("no stations found on {url}")]
    NoStations { url: String },

    /// A station marker was missing its name or link
    #[error("{element} on {url} has no {attribute}")]
    MissingAttribute {
        url: String,
        element: &'static str,
        attribute: &'static str,
    },

    /// A station link could not be made absolute
    #[error("invalid link {href:?}: {reason}")]
    InvalidLink { href: String, reason: String },

    /// Schedule page had no JSON-LD block with an `@graph` array
    #[error("no JSON-LD schedule graph found on {url}")]
    NoScheduleGraph { url: String },

    /// A `@graph` entry had a recognised field of the wrong JSON type
    #[error("malformed programme at @graph[{index}] on {url}: {message}")]
    MalformedProgramme {
        url: String,
        index: usize,
        message: String,
    },
}

/// Errors returned by directory and schedule operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidDate(#[from] InvalidDateError),

    /// No station with this exact name in the directory
    #[error("station not found: {name}")]
    StationNotFound { name: String },

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
