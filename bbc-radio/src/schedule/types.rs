//! JSON-LD shapes found in a schedule page's `@graph`.
//!
//! Only the fields that feed a [`Programme`] are modelled; everything else
//! in the structured data (images, broadcast service, `@type`) is ignored.

use serde::Deserialize;

use crate::domain::{Programme, ProgrammeField};

/// One `@graph` entry: a broadcast episode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEntry {
    pub publication: Option<Publication>,
    pub part_of_series: Option<Series>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub identifier: Option<String>,
    pub url: Option<String>,
}

/// The broadcast event carrying the start time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub start_date: Option<String>,
}

/// The series an episode belongs to.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Series {
    pub name: Option<String>,
}

impl From<GraphEntry> for Programme {
    fn from(entry: GraphEntry) -> Self {
        let start_date = entry.publication.and_then(|p| p.start_date);
        let series_name = entry.part_of_series.and_then(|s| s.name);

        Programme::builder()
            .set_opt(ProgrammeField::StartDate, start_date)
            .set_opt(ProgrammeField::SeriesName, series_name)
            .set_opt(ProgrammeField::Name, entry.name)
            .set_opt(ProgrammeField::Description, entry.description)
            .set_opt(ProgrammeField::Identifier, entry.identifier)
            .set_opt(ProgrammeField::Url, entry.url)
            .build()
    }
}
