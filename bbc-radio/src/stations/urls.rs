//! Ordered station name → schedule URL mapping.

/// Station names mapped to schedule base URLs, in listing order.
///
/// Inserting a name that is already present replaces its URL but keeps the
/// position where the name was first seen. Lookups are exact and
/// case-sensitive. Equality is order-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationUrls {
    entries: Vec<(String, String)>,
}

impl StationUrls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a station, returning the URL it replaced.
    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) -> Option<String> {
        let name = name.into();
        let url = url.into();

        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, url)),
            None => {
                self.entries.push((name, url));
                None
            }
        }
    }

    /// URL for an exact station name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, url)| url.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, url)` pairs in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, url)| (name.as_str(), url.as_str()))
    }

    /// Station names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for StationUrls
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut urls = StationUrls::new();
        for (name, url) in iter {
            urls.insert(name, url);
        }
        urls
    }
}

impl IntoIterator for StationUrls {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
