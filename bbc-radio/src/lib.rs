//! Unofficial client for BBC radio station schedules.
//!
//! Scrapes the public schedules pages: the station listing for a name → URL
//! directory, and each dated schedule page's JSON-LD for its programmes.
//!
//! ```no_run
//! use bbc_radio::fetch::{FetcherConfig, HttpFetcher};
//! use bbc_radio::schedule::Schedule;
//! use bbc_radio::stations::StationDirectory;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = StationDirectory::new(HttpFetcher::new(FetcherConfig::default())?);
//! let station = directory.select("BBC Radio 1").await?;
//! let schedule = Schedule::new(station, "2021-01-23")?;
//! for programme in schedule.programmes(directory.fetcher()).await? {
//!     println!("{:?} {:?}", programme.start_date(), programme.name());
//! }
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod error;
pub mod fetch;
pub mod schedule;
pub mod stations;

pub use error::{Error, ExtractionError};
