//! Programme extraction from a schedule page's JSON-LD.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde_json::Value;
use tracing::{debug, trace};

use crate::domain::Programme;
use crate::error::ExtractionError;
use crate::fetch::Page;

use super::types::GraphEntry;

static JSON_LD: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"script[type="application/ld+json"]"#).expect("valid selector")
});

/// Extract the programmes listed on a schedule page, in `@graph` order.
///
/// The first JSON-LD block whose top level holds an `@graph` array is used.
/// Blocks that are not valid JSON or have no such array are skipped. A page
/// without any qualifying block is an error; an empty `@graph` is not.
pub fn extract_programmes(page: &Page) -> Result<Vec<Programme>, ExtractionError> {
    let graph = find_schedule_graph(page)?;

    let programmes = graph
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<GraphEntry>(entry)
                .map(Programme::from)
                .map_err(|e| ExtractionError::MalformedProgramme {
                    url: page.url().to_string(),
                    index,
                    message: e.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        url = %page.url(),
        programmes = programmes.len(),
        "extracted schedule"
    );

    Ok(programmes)
}

/// Find the `@graph` array of the first qualifying JSON-LD block.
fn find_schedule_graph(page: &Page) -> Result<Vec<Value>, ExtractionError> {
    let document = Html::parse_document(page.body());

    for (block, script) in document.select(&JSON_LD).enumerate() {
        let text: String = script.text().collect();

        let value: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                debug!(block, error = %e, "skipping unparseable JSON-LD block");
                continue;
            }
        };

        if let Value::Object(mut object) = value
            && let Some(Value::Array(entries)) = object.remove("@graph")
        {
            return Ok(entries);
        }

        trace!(block, "JSON-LD block has no @graph array");
    }

    Err(ExtractionError::NoScheduleGraph {
        url: page.url().to_string(),
    })
}
