//! Station listing.
//!
//! Scrapes the station name → schedule URL mapping from the schedules
//! listing page and serves lookups by name.

mod directory;
mod extract;
mod urls;

pub use directory::{DEFAULT_STATIONS_URL, StationDirectory};
pub use extract::extract_station_urls;
pub use urls::StationUrls;
