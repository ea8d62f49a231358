//! A station's schedule for one day.

use std::fmt;

use tokio::sync::OnceCell;
use tracing::debug;
use url::Url;

use crate::domain::{InvalidDateError, Programme, ScheduleDate, Station};
use crate::error::Error;
use crate::fetch::{FetchError, PageFetcher};

use super::extract::extract_programmes;

/// Build the dated schedule URL for a station.
///
/// This is a plain string join: `{station url}/{YYYY}/{MM}/{DD}`.
pub fn schedule_url(station: &Station, date: &ScheduleDate) -> String {
    format!("{}/{}", station.url(), date.path_segments())
}

/// The programmes one station broadcasts on one date.
///
/// The date is validated at construction. Programmes are fetched on the
/// first call to [`Schedule::programmes`] and cached; concurrent first
/// callers share one fetch. The page for a date may include programmes
/// that start just after midnight on the following day.
#[derive(Debug)]
pub struct Schedule {
    station: Station,
    date: ScheduleDate,
    programmes: OnceCell<Vec<Programme>>,
}

impl Schedule {
    /// Create a schedule for `station` on `date` (`YYYY-MM-DD`).
    pub fn new(station: Station, date: &str) -> Result<Self, InvalidDateError> {
        Ok(Self {
            station,
            date: ScheduleDate::parse(date)?,
            programmes: OnceCell::new(),
        })
    }

    pub fn station(&self) -> &Station {
        &self.station
    }

    pub fn date(&self) -> &ScheduleDate {
        &self.date
    }

    /// The dated page this schedule reads.
    pub fn url(&self) -> String {
        schedule_url(&self.station, &self.date)
    }

    /// Whether programmes have been fetched yet.
    pub fn is_loaded(&self) -> bool {
        self.programmes.initialized()
    }

    /// Programmes in broadcast order.
    ///
    /// Returns an owned copy; changing it does not affect the cache.
    pub async fn programmes<F: PageFetcher>(&self, fetcher: &F) -> Result<Vec<Programme>, Error> {
        let programmes = self
            .programmes
            .get_or_try_init(|| async {
                let raw = self.url();
                let url = Url::parse(&raw).map_err(|e| FetchError::InvalidUrl {
                    url: raw.clone(),
                    reason: e.to_string(),
                })?;

                debug!(
                    station = %self.station.name(),
                    date = %self.date,
                    url = %url,
                    "loading schedule"
                );

                let page = fetcher.fetch(&url).await?;
                Ok::<_, Error>(extract_programmes(&page)?)
            })
            .await?;

        Ok(programmes.clone())
    }
}

impl PartialEq for Schedule {
    fn eq(&self, other: &Self) -> bool {
        self.station == other.station
            && self.date == other.date
            && self.programmes.get() == other.programmes.get()
    }
}

impl Eq for Schedule {}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Schedule station={:?} date={}>",
            self.station.name(),
            self.date
        )
    }
}
