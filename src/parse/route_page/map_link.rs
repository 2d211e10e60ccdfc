use percent_encoding::percent_decode_str;
use url::{ParseError, Url};

const PLACE_PATH_PREFIX: &str = "/maps/place/";

/// Pulls the place identifier out of a `/maps/place/<id>` map link.
///
/// Only the path is looked at; host, query and fragment are ignored. The id may
/// be a plus code or some proprietary place id, telling them apart is up to the
/// caller. Returns `None` if the link is not a place link.
pub fn place_id_from_map_url(href: &str) -> Option<String> {
    let url = match Url::parse(href) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse("https://www.google.com").ok()?;
            base.join(href).ok()?
        }
        Err(_) => return None,
    };
    let path = percent_decode_str(url.path()).decode_utf8_lossy();
    // trailing %20 has been seen in the wild
    path.trim_end()
        .strip_prefix(PLACE_PATH_PREFIX)
        .map(str::to_owned)
}
