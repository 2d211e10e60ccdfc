use std::fmt::Display;

use scraper::ElementRef;
use tracing::{instrument, Level};

use super::display_name::display_name;
use super::map_link::place_id_from_map_url;
use super::patterns::RoutePatterns;
use super::telephone::telephone_from_href;
use crate::parse::{text_content, trimmed_text, ShapeMatch};
use crate::plus_code;

const NOT_HOME_BOILERPLATE: &str = "If no-one's home and you can't make contact: ";

/// Everything the strict parse recovers for one stop.
///
/// Only `display_name` and `place_id` end up in the output file. The rest is
/// read so that a layout change shows up as a parse failure instead of as a
/// wrong name, and is otherwise kept out of any file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryStop {
    pub full_name: String,
    pub display_name: String,
    pub place_id: String,
    pub address: String,
    pub portions: String,
    pub instructions: String,
    pub allergies: String,
    pub not_home: Option<String>,
    pub map_url: String,
    pub telephone: Option<String>,
}

/// Why the strict parse of one stop was abandoned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopError {
    Shape(&'static str),
    MissingBinding(&'static str),
    EmptyName,
    MissingPortions(String),
    MissingHref(&'static str),
    CodeMismatch { text: String, url: Option<String> },
    InvalidCode(String),
    ShortCode(String),
    BadTelephone(String),
}

impl Display for StopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shape(level) => write!(f, "{level} doesn't have the expected layout"),
            Self::MissingBinding(name) => write!(f, "no '{name}' element where expected"),
            Self::EmptyName => write!(f, "client name is empty"),
            Self::MissingPortions(found) => write!(
                f,
                "didn't find 'portion' where expected (found '{found}'); assuming lost"
            ),
            Self::MissingHref(link) => write!(f, "{link} has no href"),
            Self::CodeMismatch { text, url } => write!(
                f,
                "thought '{text}' was the plus code, but it doesn't match the map URL ('{}'); assuming lost",
                url.as_deref().unwrap_or("no place id")
            ),
            Self::InvalidCode(code) => write!(
                f,
                "thought '{code}' was the plus code, but it doesn't seem valid; assuming lost"
            ),
            Self::ShortCode(code) => write!(
                f,
                "thought '{code}' was the plus code, but it isn't a full-length code; assuming lost"
            ),
            Self::BadTelephone(href) => write!(f, "expecting tel: URL, got '{href}'; assuming lost"),
        }
    }
}

impl std::error::Error for StopError {}

fn bound<'a>(shape: &ShapeMatch<'a>, name: &'static str) -> Result<ElementRef<'a>, StopError> {
    shape.get(name).ok_or(StopError::MissingBinding(name))
}

fn href<'a>(link: ElementRef<'a>, label: &'static str) -> Result<&'a str, StopError> {
    link.value().attr("href").ok_or(StopError::MissingHref(label))
}

fn strip_not_home_boilerplate(text: &str) -> String {
    text.strip_prefix(NOT_HOME_BOILERPLATE)
        .unwrap_or(text)
        .trim()
        .to_owned()
}

/// Parses one `<li>` of the route list against the full known layout.
///
/// Any deviation fails the whole stop; the caller is expected to fall back to
/// [`fallback_place_id`](super::fallback_place_id).
#[instrument(skip_all, level = Level::TRACE)]
pub fn try_strict_extract(
    item: ElementRef<'_>,
    patterns: &RoutePatterns,
) -> Result<DeliveryStop, StopError> {
    let item_shape = patterns
        .stop_item
        .match_children(item)
        .ok_or(StopError::Shape("list item"))?;
    let body = patterns
        .stop_body
        .match_children(bound(&item_shape, "body")?)
        .ok_or(StopError::Shape("stop details"))?;

    let name_code = patterns
        .name_code
        .match_children(bound(&body, "name_code")?)
        .ok_or(StopError::Shape("name and plus code block"))?;
    let full_name = trimmed_text(bound(&name_code, "full_name")?);
    let display_name = display_name(&full_name).ok_or(StopError::EmptyName)?;
    let place_id = trimmed_text(bound(&name_code, "code")?);

    let address = trimmed_text(bound(&body, "address")?);
    // sanity check that we're looking at the portions block at all
    let portions = text_content(bound(&body, "portions")?);
    if !portions.contains("portion") {
        return Err(StopError::MissingPortions(portions));
    }
    let portions = portions.trim().to_owned();
    let instructions = trimmed_text(bound(&body, "instructions")?);
    let allergies = trimmed_text(bound(&body, "allergies")?);
    let not_home = body
        .get("not_home")
        .map(|p| strip_not_home_boilerplate(&trimmed_text(p)));

    let links = patterns
        .links
        .match_children(bound(&body, "links")?)
        .ok_or(StopError::Shape("links block"))?;
    let map_url = href(bound(&links, "map_link")?, "map link")?.to_owned();
    let url_place_id = place_id_from_map_url(&map_url);
    if url_place_id.as_deref() != Some(place_id.as_str()) {
        return Err(StopError::CodeMismatch {
            text: place_id,
            url: url_place_id,
        });
    }
    if !plus_code::is_valid(&place_id) {
        return Err(StopError::InvalidCode(place_id));
    }
    if !plus_code::is_full(&place_id) {
        return Err(StopError::ShortCode(place_id));
    }

    let telephone = links
        .get("call_link")
        .map(|link| {
            let target = href(link, "call link")?;
            telephone_from_href(target).ok_or_else(|| StopError::BadTelephone(target.to_owned()))
        })
        .transpose()?;

    Ok(DeliveryStop {
        full_name,
        display_name,
        place_id,
        address,
        portions,
        instructions,
        allergies,
        not_home,
        map_url,
        telephone,
    })
}
