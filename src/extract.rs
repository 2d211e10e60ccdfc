use std::fmt::Display;

use scraper::{ElementRef, Html};

use crate::config::Config;
use crate::gpx::{Gpx, Waypoint};
use crate::parse::route_page::{
    fallback_place_id, route_description, try_strict_extract, DescriptionError, FallbackError,
    RoutePatterns, StopError,
};
use crate::parse::{self, Error};
use crate::plus_code;
use crate::static_selector;

/// Something worth telling the user that did not stop the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    NoRoutePoints,
    StrictParseFailed {
        position: usize,
        total: usize,
        reason: StopError,
    },
    FallbackFailed {
        position: usize,
        reason: FallbackError,
    },
    UnusablePlaceId {
        position: usize,
        place_id: Option<String>,
    },
    IncompleteRoute {
        understood: usize,
        total: usize,
    },
    NoDescription(DescriptionError),
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRoutePoints => write!(f, "Found list, but no route points in it!"),
            Self::StrictParseFailed {
                position,
                total,
                reason,
            } => write!(
                f,
                "{reason}; failed to fully understand route point {position} (of {total}), falling back to URL-only"
            ),
            Self::FallbackFailed { position, reason } => write!(
                f,
                "Fallback failed to find map URL for point {position}: {reason}"
            ),
            Self::UnusablePlaceId { position, place_id } => write!(
                f,
                "Couldn't parse point {position}'s place ID '{}' as a full-length plus code",
                place_id.as_deref().unwrap_or("none")
            ),
            Self::IncompleteRoute { understood, total } => write!(
                f,
                "Route incomplete - only understood {understood} out of {total} points!"
            ),
            Self::NoDescription(reason) => write!(
                f,
                "Couldn't find route description ({reason}), continuing anyway"
            ),
        }
    }
}

/// What one pass over a route page produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteExtraction {
    pub waypoints: Vec<Waypoint>,
    pub description: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RouteExtraction {
    pub fn into_gpx(self, creator: &str) -> Gpx {
        let mut gpx = Gpx::new(creator);
        gpx.set_description(self.description);
        for waypoint in self.waypoints {
            gpx.push(waypoint);
        }
        gpx
    }
}

fn single_main(document: &Html) -> parse::Result<ElementRef<'_>> {
    static_selector!(MAIN_SELECTOR <- "main");
    MAIN_SELECTOR
        .select_single(document.root_element())
        .map_err(|found| {
            Error::html_parse_error(&format!(
                "expected exactly one <main> element, found {found}"
            ))
        })
}

fn route_list(main: ElementRef<'_>) -> parse::Result<ElementRef<'_>> {
    static_selector!(LIST_SELECTOR <- "ul");
    LIST_SELECTOR
        .select_single(main)
        .map_err(|found| Error::MissingRouteList { found })
}

/// Name and place id for the stop at `position` (1-based), by whichever method works.
fn locate_stop(
    item: ElementRef<'_>,
    position: usize,
    total: usize,
    patterns: &RoutePatterns,
    config: &Config,
    diagnostics: &mut Vec<Diagnostic>,
) -> (String, Option<String>) {
    match try_strict_extract(item, patterns) {
        Ok(stop) => {
            log::debug!("route point {position}: {}", stop.display_name);
            (stop.display_name, Some(stop.place_id))
        }
        Err(reason) => {
            diagnostics.push(Diagnostic::StrictParseFailed {
                position,
                total,
                reason,
            });
            let name = format!("Delivery no {position}");
            match fallback_place_id(item, &config.map_link_marker) {
                Ok(place_id) => (name, Some(place_id)),
                Err(reason) => {
                    diagnostics.push(Diagnostic::FallbackFailed { position, reason });
                    (name, None)
                }
            }
        }
    }
}

/// Pulls every recoverable stop, in route order, out of a saved route page.
///
/// Stops that cannot be located are skipped with a diagnostic. Only a page
/// without a usable `<main>`/`<ul>` or a broken built-in pattern is an error;
/// an empty result is for the caller to judge.
pub fn extract_route(document: &Html, config: &Config) -> parse::Result<RouteExtraction> {
    let patterns = RoutePatterns::new()?;
    let main = single_main(document)?;
    let list = route_list(main)?;

    // other children of the list, like <hr>, are separators
    let items: Vec<ElementRef> = list
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "li")
        .collect();
    let total = items.len();
    log::info!("found {total} route points");

    let mut diagnostics = Vec::new();
    if items.is_empty() {
        diagnostics.push(Diagnostic::NoRoutePoints);
    }

    let mut waypoints = Vec::with_capacity(total);
    for (index, item) in items.into_iter().enumerate() {
        let position = index + 1;
        let (name, place_id) =
            locate_stop(item, position, total, &patterns, config, &mut diagnostics);
        match place_id.as_deref().and_then(plus_code::decode) {
            Some(at) => waypoints.push(Waypoint::new(name, at)),
            None => diagnostics.push(Diagnostic::UnusablePlaceId { position, place_id }),
        }
    }
    if waypoints.len() != total {
        diagnostics.push(Diagnostic::IncompleteRoute {
            understood: waypoints.len(),
            total,
        });
    }

    // nothing will be written, so don't bother the user about the description
    let description = if waypoints.is_empty() {
        None
    } else {
        match route_description(main, &patterns) {
            Ok(description) => Some(description),
            Err(reason) => {
                diagnostics.push(Diagnostic::NoDescription(reason));
                None
            }
        }
    };

    Ok(RouteExtraction {
        waypoints,
        description,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn route_page() -> Html {
        let html = fs::read_to_string("./src/parse/html_examples/route_page/route.html").unwrap();
        Html::parse_document(&html)
    }

    fn names(extraction: &RouteExtraction) -> Vec<&str> {
        extraction
            .waypoints
            .iter()
            .map(|waypoint| waypoint.name.as_str())
            .collect()
    }

    #[test]
    fn test_extract_route_page() {
        let extraction = extract_route(&route_page(), &Config::default())
            .expect("The example html should be valid");
        assert_eq!(names(&extraction), ["Alex", "A B", "Delivery no 3"]);
        assert_eq!(
            extraction.description.as_deref(),
            Some("Deliveries for 04/09/2022 in Demo")
        );

        let alex = &extraction.waypoints[0];
        assert!((alex.latitude - 47.000_062_5).abs() < 1e-9);
        assert!((alex.longitude - 8.000_062_5).abs() < 1e-9);
    }

    #[test]
    fn test_route_page_diagnostics() {
        let extraction = extract_route(&route_page(), &Config::default()).unwrap();
        assert_eq!(
            extraction.diagnostics,
            vec![
                Diagnostic::StrictParseFailed {
                    position: 3,
                    total: 4,
                    reason: StopError::CodeMismatch {
                        text: "8FVC2222+22".into(),
                        url: Some("8FVC9999+99".into()),
                    },
                },
                Diagnostic::StrictParseFailed {
                    position: 4,
                    total: 4,
                    reason: StopError::Shape("list item"),
                },
                Diagnostic::FallbackFailed {
                    position: 4,
                    reason: FallbackError::NoMapLink,
                },
                Diagnostic::UnusablePlaceId {
                    position: 4,
                    place_id: None,
                },
                Diagnostic::IncompleteRoute {
                    understood: 3,
                    total: 4,
                },
            ]
        );
        let mismatch = extraction.diagnostics[0].to_string();
        assert!(mismatch.contains("8FVC2222+22") && mismatch.contains("8FVC9999+99"));
        assert!(mismatch.contains("route point 3 (of 4)"));
        // each diagnostic is one log line
        assert!(extraction
            .diagnostics
            .iter()
            .all(|diagnostic| !diagnostic.to_string().contains('\n')));
    }

    #[test]
    fn test_fallback_uses_configured_marker() {
        let config = Config {
            map_link_marker: "maps.example.org".into(),
            ..Config::default()
        };
        let extraction = extract_route(&route_page(), &config).unwrap();
        // the mismatching stop's google link no longer counts as a map link
        assert_eq!(names(&extraction), ["Alex", "A B"]);
        assert!(extraction.diagnostics.contains(&Diagnostic::FallbackFailed {
            position: 3,
            reason: FallbackError::NoMapLink,
        }));
    }

    #[test]
    fn test_unusable_fallback_place_id() {
        let html = Html::parse_document(
            r#"<main><ul><li><a href="https://www.google.com/maps/place/ChIJ2WrMN9MDDUsRpY9Doiq3aJk">Map</a></li></ul></main>"#,
        );
        let extraction = extract_route(&html, &Config::default()).unwrap();
        assert!(extraction.waypoints.is_empty());
        assert!(extraction.diagnostics.contains(&Diagnostic::UnusablePlaceId {
            position: 1,
            place_id: Some("ChIJ2WrMN9MDDUsRpY9Doiq3aJk".into()),
        }));
    }

    #[test]
    fn test_empty_route_list() {
        let html = Html::parse_document(
            "<main><div>CCK Deliveries</div><div><div><div>Route</div></div><ul>\n<hr>\n</ul><div></div></div></main>",
        );
        let extraction = extract_route(&html, &Config::default()).unwrap();
        assert!(extraction.waypoints.is_empty());
        assert_eq!(extraction.diagnostics, vec![Diagnostic::NoRoutePoints]);
        assert_eq!(extraction.description, None);
    }

    #[test]
    fn test_no_description_lookup_without_points() {
        // the description block is missing too, but only the lost stop is reported
        let html = Html::parse_document(
            r#"<main><ul><li><a href="https://example.com/">Map</a></li></ul></main>"#,
        );
        let extraction = extract_route(&html, &Config::default()).unwrap();
        assert!(extraction.waypoints.is_empty());
        assert_eq!(extraction.description, None);
        assert!(!extraction
            .diagnostics
            .iter()
            .any(|diagnostic| matches!(diagnostic, Diagnostic::NoDescription(_))));
    }

    #[test]
    fn test_missing_route_list() {
        let html = Html::parse_document(
            "<main><div>CCK Deliveries</div><div><noscript>Enable Javascript</noscript></div></main>",
        );
        let err = extract_route(&html, &Config::default()).unwrap_err();
        assert!(matches!(err, Error::MissingRouteList { found: 0 }));
        assert!(err.to_string().contains("Save Page As"));
    }

    #[test]
    fn test_several_lists() {
        let html = Html::parse_document("<main><ul></ul><ul></ul></main>");
        let err = extract_route(&html, &Config::default()).unwrap_err();
        assert!(matches!(err, Error::MissingRouteList { found: 2 }));
    }

    #[test]
    fn test_missing_main() {
        let html = Html::parse_document("<body><ul><li>x</li></ul></body>");
        let err = extract_route(&html, &Config::default()).unwrap_err();
        assert!(matches!(err, Error::HtmlParse(_)));
    }

    #[test]
    fn test_into_gpx_keeps_order_and_description() {
        let extraction = extract_route(&route_page(), &Config::default()).unwrap();
        let gpx = extraction.clone().into_gpx("cck_gpx");
        assert_eq!(gpx.waypoints(), extraction.waypoints.as_slice());
        let mut out = Vec::new();
        gpx.write(&mut out).unwrap();
        let xml = String::from_utf8(out).unwrap();
        assert!(xml.contains("<desc>Deliveries for 04/09/2022 in Demo</desc>"));
        assert!(xml.find("<name>Alex</name>").unwrap() < xml.find("<name>A B</name>").unwrap());
        // nothing but the display name leaks into the file
        assert!(!xml.contains("Example Street"));
        assert!(!xml.contains("01223123456"));
    }
}
