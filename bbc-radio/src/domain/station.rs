//! Radio station type.

use std::fmt;

/// A named radio station and the base URL its dated schedules hang off.
///
/// No validation is performed; both fields may be any string. Two stations
/// are equal when both name and URL are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Station {
    name: String,
    url: String,
}

impl Station {
    /// Create a station from a display name and schedule base URL.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Display name, e.g. "BBC Radio 1".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Schedule base URL, without any date suffix.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.url)
    }
}
