use std::sync::OnceLock;

use regex::Regex;

/// Collapses every run of whitespace into a single space and trims both ends.
pub fn collapse_whitespace(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    re.replace_all(s.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("  Deliveries for\n 04/09/2022 \t in  Demo "),
            "Deliveries for 04/09/2022 in Demo"
        );
        assert_eq!(collapse_whitespace(" \n "), "");
    }
}
