use percent_encoding::percent_decode_str;
use url::Url;

const TEL_SCHEME_PREFIX: &str = "tel:";

/// The number carried by a `tel:` link, percent-decoded. `None` for any other scheme.
///
/// Digit-only payloads parse fine with `url`, the prefix strip only covers hrefs
/// that are not valid URLs at all.
pub fn telephone_from_href(href: &str) -> Option<String> {
    let raw = match Url::parse(href) {
        Ok(url) if url.scheme() == "tel" => url.path().to_owned(),
        Ok(_) => return None,
        Err(_) => href.trim().strip_prefix(TEL_SCHEME_PREFIX)?.to_owned(),
    };
    let number = percent_decode_str(&raw).decode_utf8_lossy();
    Some(number.trim().to_owned())
}
