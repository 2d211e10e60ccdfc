use std::fmt::Display;

use scraper::ElementRef;

use super::map_link::place_id_from_map_url;
use crate::static_selector;

/// Why no place id could be scraped from a stop's links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackError {
    NoMapLink,
    MultipleMapLinks(usize),
    NotPlaceUrl(String),
}

impl Display for FallbackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMapLink => write!(f, "no map link found"),
            Self::MultipleMapLinks(count) => write!(f, "{count} map links found, expected one"),
            Self::NotPlaceUrl(href) => write!(f, "map link '{href}' doesn't name a place"),
        }
    }
}

impl std::error::Error for FallbackError {}

/// Looks anywhere under `item` for exactly one link whose href contains `marker`
/// and takes the place id from it.
pub fn fallback_place_id(item: ElementRef<'_>, marker: &str) -> Result<String, FallbackError> {
    static_selector!(LINK_SELECTOR <- "a[href]");
    let map_links: Vec<&str> = item
        .select(&LINK_SELECTOR)
        .filter_map(|link| link.value().attr("href"))
        .filter(|href| href.contains(marker))
        .collect();
    match map_links.as_slice() {
        [] => Err(FallbackError::NoMapLink),
        [href] => place_id_from_map_url(href)
            .ok_or_else(|| FallbackError::NotPlaceUrl((*href).to_owned())),
        links => Err(FallbackError::MultipleMapLinks(links.len())),
    }
}
