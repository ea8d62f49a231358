//! Station directory with lazy, fetch-once population.

use tokio::sync::OnceCell;
use tracing::debug;
use url::Url;

use crate::domain::Station;
use crate::error::{Error, ExtractionError};
use crate::fetch::{FetchError, PageFetcher};

use super::extract::extract_station_urls;
use super::urls::StationUrls;

/// Default listing page for station schedules.
pub const DEFAULT_STATIONS_URL: &str = "https://www.bbc.co.uk/sounds/schedules";

/// Directory of stations, keyed by display name.
///
/// The listing page is fetched on first use and the mapping cached for the
/// life of the directory. Concurrent first callers share a single fetch. A
/// failed fetch leaves the directory unpopulated, so a later call fetches
/// again.
#[derive(Debug)]
pub struct StationDirectory<F> {
    fetcher: F,
    stations_url: Url,
    urls: OnceCell<StationUrls>,
}

impl<F: PageFetcher> StationDirectory<F> {
    /// Create a directory that reads the default listing page.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            stations_url: default_stations_url(),
            urls: OnceCell::new(),
        }
    }

    /// Create a directory from a known mapping. It never fetches.
    ///
    /// The mapping must hold at least one station.
    pub fn from_urls(fetcher: F, urls: StationUrls) -> Result<Self, ExtractionError> {
        let stations_url = default_stations_url();
        if urls.is_empty() {
            return Err(ExtractionError::NoStations {
                url: stations_url.to_string(),
            });
        }

        Ok(Self {
            fetcher,
            stations_url,
            urls: OnceCell::new_with(Some(urls)),
        })
    }

    /// Read stations from a different listing page (for testing or mirrors).
    pub fn with_stations_url(mut self, url: &str) -> Result<Self, FetchError> {
        self.stations_url = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(self)
    }

    /// The listing page this directory reads.
    pub fn stations_url(&self) -> &Url {
        &self.stations_url
    }

    /// The fetcher, for building schedules with the same transport.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Whether the mapping has been populated yet.
    pub fn is_loaded(&self) -> bool {
        self.urls.initialized()
    }

    /// All stations in listing order.
    ///
    /// Returns an owned copy; changing it does not affect the directory.
    pub async fn urls(&self) -> Result<StationUrls, Error> {
        Ok(self.loaded().await?.clone())
    }

    /// Select a station by exact, case-sensitive name.
    pub async fn select(&self, name: &str) -> Result<Station, Error> {
        let urls = self.loaded().await?;
        let url = urls.get(name).ok_or_else(|| Error::StationNotFound {
            name: name.to_string(),
        })?;
        Ok(Station::new(name, url))
    }

    async fn loaded(&self) -> Result<&StationUrls, Error> {
        self.urls
            .get_or_try_init(|| async {
                debug!(url = %self.stations_url, "loading station directory");
                let page = self.fetcher.fetch(&self.stations_url).await?;
                Ok::<_, Error>(extract_station_urls(&page)?)
            })
            .await
    }
}

/// Two directories are equal when they read the same listing page and hold
/// the same loaded mapping. The fetcher is not compared.
impl<F> PartialEq for StationDirectory<F> {
    fn eq(&self, other: &Self) -> bool {
        self.stations_url == other.stations_url && self.urls.get() == other.urls.get()
    }
}

impl<F> Eq for StationDirectory<F> {}

fn default_stations_url() -> Url {
    // SAFETY: the constant is a well-formed absolute URL
    Url::parse(DEFAULT_STATIONS_URL).unwrap()
}
