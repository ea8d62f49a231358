//! Station extraction from the schedules listing page.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::error::ExtractionError;
use crate::fetch::Page;

use super::urls::StationUrls;

/// National and nations stations: a logo image wrapped in a link.
static NATIONAL_LOGOS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"img[class="station-logo"]"#).expect("valid selector"));

/// Local stations: plain text links inside the local-stations block.
static LOCAL_LINKS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div[class="local-stations"] li > a"#).expect("valid selector")
});

/// Extract the station name → URL mapping from a stations listing page.
///
/// National stations come first in document order, then local stations in
/// document order. Links are made absolute against the page URL. A name seen
/// twice keeps its first position and its last URL.
///
/// An empty result is an error: it means the listing layout has changed.
pub fn extract_station_urls(page: &Page) -> Result<StationUrls, ExtractionError> {
    let document = Html::parse_document(page.body());
    let mut urls = StationUrls::new();

    for logo in document.select(&NATIONAL_LOGOS) {
        let name = logo
            .value()
            .attr("alt")
            .ok_or_else(|| missing(page, "station logo", "alt text"))?;
        let href = logo
            .parent()
            .and_then(ElementRef::wrap)
            .and_then(|parent| parent.value().attr("href"))
            .ok_or_else(|| missing(page, "station logo", "enclosing link"))?;

        add(&mut urls, page, name, href)?;
    }

    let national = urls.len();

    for link in document.select(&LOCAL_LINKS) {
        // The name is the link's single direct text node.
        let texts: Vec<&str> = link
            .children()
            .filter_map(|node| node.value().as_text())
            .map(|text| &**text)
            .collect();
        let [name] = texts.as_slice() else {
            return Err(missing(page, "local station link", "text"));
        };
        if name.is_empty() {
            return Err(missing(page, "local station link", "text"));
        }
        let href = link
            .value()
            .attr("href")
            .ok_or_else(|| missing(page, "local station link", "href"))?;

        add(&mut urls, page, name, href)?;
    }

    if urls.is_empty() {
        return Err(ExtractionError::NoStations {
            url: page.url().to_string(),
        });
    }

    debug!(
        url = %page.url(),
        national,
        total = urls.len(),
        "extracted stations"
    );

    Ok(urls)
}

fn add(urls: &mut StationUrls, page: &Page, name: &str, href: &str) -> Result<(), ExtractionError> {
    let url = page
        .resolve(href)
        .map_err(|e| ExtractionError::InvalidLink {
            href: href.to_string(),
            reason: e.to_string(),
        })?;

    if let Some(previous) = urls.insert(name, url.as_str()) {
        warn!(
            station = %name,
            previous = %previous,
            current = %url,
            "duplicate station name, keeping the later link"
        );
    }
    Ok(())
}

fn missing(page: &Page, element: &'static str, attribute: &'static str) -> ExtractionError {
    ExtractionError::MissingAttribute {
        url: page.url().to_string(),
        element,
        attribute,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    const STATIONS_HTML: &str = include_str!("../../fixtures/stations.html");

    fn page(body: &str) -> Page {
        Page::new(
            Url::parse("https://www.bbc.co.uk/sounds/schedules").unwrap(),
            body,
        )
    }

    fn expected_stations() -> Vec<(&'static str, String)> {
        [
            ("BBC Radio 1", "p00fzl86"),
            ("BBC Radio 1Xtra", "p00fzl64"),
            ("BBC Radio 2", "p00fzl8v"),
            ("BBC Radio 3", "p00fzl8t"),
            ("BBC Radio 4", "p00fzl7j"),
            ("BBC Radio 4 Extra", "p00fzl7l"),
            ("BBC Radio 5 live", "p00fzl7g"),
            ("BBC Radio 5 live sports extra", "p00fzl7h"),
            ("BBC Radio 6 Music", "p00fzl65"),
            ("BBC Asian Network", "p00fzl68"),
            ("BBC World Service", "p00fzl9p"),
            ("BBC Radio Scotland", "p00fzl8d"),
            ("BBC Radio nan Gàidheal", "p00fzl81"),
            ("BBC Radio Ulster", "p00fzl8w"),
            ("BBC Radio Foyle", "p00fzl7m"),
            ("BBC Radio Wales", "p00fzl8y"),
            ("BBC Radio Cymru", "p00fzl7b"),
            ("BBC Radio Berkshire", "p00fzl74"),
            ("BBC Radio Bristol", "p00fzl75"),
            ("BBC Radio Cambridgeshire", "p00fzl76"),
            ("BBC Radio Cornwall", "p00fzl77"),
            ("BBC Coventry & Warwickshire", "p00fzl78"),
            ("BBC Radio Cumbria", "p00fzl79"),
            ("BBC Radio Derby", "p00fzl7c"),
            ("BBC Radio Devon", "p00fzl7d"),
            ("BBC Essex", "p00fzl7f"),
            ("BBC Radio Gloucestershire", "p00fzl7n"),
            ("BBC Radio Guernsey", "p00fzl7p"),
            ("BBC Hereford & Worcester", "p00fzl7q"),
            ("BBC Radio Humberside", "p00fzl7r"),
            ("BBC Radio Jersey", "p00fzl7s"),
            ("BBC Radio Kent", "p00fzl7t"),
            ("BBC Radio Lancashire", "p00fzl7v"),
            ("BBC Radio Leeds", "p00fzl7w"),
            ("BBC Radio Leicester", "p00fzl7x"),
            ("BBC Radio Lincolnshire", "p00fzl7y"),
            ("BBC Radio London", "p00fzl6f"),
            ("BBC Radio Manchester", "p00fzl7z"),
            ("BBC Radio Merseyside", "p00fzl80"),
            ("BBC Newcastle", "p00fzl82"),
            ("BBC Radio Norfolk", "p00fzl83"),
            ("BBC Radio Northampton", "p00fzl84"),
            ("BBC Radio Nottingham", "p00fzl85"),
            ("BBC Radio Oxford", "p00fzl8c"),
            ("BBC Radio Sheffield", "p00fzl8h"),
            ("BBC Radio Shropshire", "p00fzl8k"),
            ("BBC Radio Solent", "p00fzl8l"),
            ("BBC Somerset", "p00fzl8m"),
            ("BBC Radio Stoke", "p00fzl8n"),
            ("BBC Radio Suffolk", "p00fzl8p"),
            ("BBC Surrey", "p00fzl8q"),
            ("BBC Sussex", "p00fzl8r"),
            ("BBC Tees", "p00fzl93"),
            ("BBC Three Counties Radio", "p00fzl96"),
            ("BBC Wiltshire", "p00fzl8z"),
            ("BBC WM 95.6", "p00fzl9f"),
            ("BBC Radio York", "p00fzl90"),
        ]
        .into_iter()
        .map(|(name, pid)| (name, format!("https://www.bbc.co.uk/schedules/{pid}")))
        .collect()
    }

    #[test]
    fn extracts_fixture_stations_in_order() {
        let urls = extract_station_urls(&page(STATIONS_HTML)).unwrap();

        let actual: Vec<(&str, &str)> = urls.iter().collect();
        let expected = expected_stations();
        let expected: Vec<(&str, &str)> = expected
            .iter()
            .map(|(name, url)| (*name, url.as_str()))
            .collect();

        assert_eq!(actual, expected);
    }

    #[test]
    fn extraction_is_idempotent() {
        let first = extract_station_urls(&page(STATIONS_HTML)).unwrap();
        let second = extract_station_urls(&page(STATIONS_HTML)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn partial_class_match_is_not_a_station() {
        let urls = extract_station_urls(&page(STATIONS_HTML)).unwrap();
        assert!(!urls.contains("Listen live"));
        assert!(!urls.contains("Help"));
    }

    #[test]
    fn links_resolve_against_final_url() {
        let html = r#"<a href="p00fzl86"><img class="station-logo" alt="BBC Radio 1"></a>"#;
        let page = Page::new(Url::parse("https://mirror.example.org/schedules/").unwrap(), html);

        let urls = extract_station_urls(&page).unwrap();
        assert_eq!(
            urls.get("BBC Radio 1"),
            Some("https://mirror.example.org/schedules/p00fzl86")
        );
    }

    #[test]
    fn local_duplicate_overwrites_national() {
        let html = r#"
            <a href="/schedules/national"><img class="station-logo" alt="BBC Radio London"></a>
            <a href="/schedules/p00fzl86"><img class="station-logo" alt="BBC Radio 1"></a>
            <div class="local-stations"><ul>
                <li><a href="/schedules/local">BBC Radio London</a></li>
            </ul></div>
        "#;

        let urls = extract_station_urls(&page(html)).unwrap();
        let pairs: Vec<_> = urls.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("BBC Radio London", "https://www.bbc.co.uk/schedules/local"),
                ("BBC Radio 1", "https://www.bbc.co.uk/schedules/p00fzl86"),
            ]
        );
    }

    #[test]
    fn only_local_stations_is_fine() {
        let html = r#"<div class="local-stations"><ul><li><a href="/schedules/p00fzl90">BBC Radio York</a></li></ul></div>"#;
        let urls = extract_station_urls(&page(html)).unwrap();
        assert_eq!(urls.len(), 1);
    }

    #[test]
    fn empty_listing_is_an_error() {
        let err = extract_station_urls(&page("<html><body><p>Sorry</p></body></html>")).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::NoStations {
                url: "https://www.bbc.co.uk/sounds/schedules".to_string()
            }
        );
    }

    #[test]
    fn logo_without_alt_is_an_error() {
        let html = r#"<a href="/schedules/p00fzl86"><img class="station-logo"></a>"#;
        let err = extract_station_urls(&page(html)).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::MissingAttribute { attribute: "alt text", .. }
        ));
    }

    #[test]
    fn logo_without_link_is_an_error() {
        let html = r#"<div><img class="station-logo" alt="BBC Radio 1"></div>"#;
        let err = extract_station_urls(&page(html)).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::MissingAttribute { attribute: "enclosing link", .. }
        ));
    }

    #[test]
    fn local_name_ignores_nested_markup() {
        let html = r#"<div class="local-stations"><ul>
            <li><a href="/schedules/p00fzl90"><span>Listen: </span>BBC Radio York</a></li>
        </ul></div>"#;
        let urls = extract_station_urls(&page(html)).unwrap();

        let names: Vec<_> = urls.names().collect();
        assert_eq!(names, vec!["BBC Radio York"]);
        assert_eq!(
            urls.get("BBC Radio York"),
            Some("https://www.bbc.co.uk/schedules/p00fzl90")
        );
    }

    #[test]
    fn local_link_needs_exactly_one_text_node() {
        let html = r#"<div class="local-stations"><ul>
            <li><a href="/schedules/p00fzl90"><span>BBC Radio York</span></a></li>
        </ul></div>"#;
        let err = extract_station_urls(&page(html)).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::MissingAttribute { attribute: "text", .. }
        ));

        let html = r#"<div class="local-stations"><ul>
            <li><a href="/schedules/p00fzl90">BBC Radio<br>York</a></li>
        </ul></div>"#;
        let err = extract_station_urls(&page(html)).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::MissingAttribute { attribute: "text", .. }
        ));
    }

    #[test]
    fn local_link_without_href_is_an_error() {
        let html = r#"<div class="local-stations"><ul><li><a>BBC Radio York</a></li></ul></div>"#;
        let err = extract_station_urls(&page(html)).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::MissingAttribute { attribute: "href", .. }
        ));
    }
}
