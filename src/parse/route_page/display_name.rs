use std::sync::OnceLock;

use regex::Regex;

// two initials are enough to tell apart most stops on one route
const MAX_NAME_PARTS: usize = 2;

fn looks_like_initial(word: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^[A-Za-z]\.?$").expect("regex should be valid"));
    re.is_match(word)
}

/// Turns a client's full name into a less unique, first-name-ish label.
///
/// Leading initials are kept together with the word that follows them, so
/// "A B Smith" gives "A B" and "F. Bloggs Smith" gives "F. Bloggs". If the name
/// runs out while still gathering initials, the last word is itself cut down to
/// an initial ("F Bloggs" gives "F B."). Returns `None` for a blank name.
pub fn display_name(full_name: &str) -> Option<String> {
    let words: Vec<&str> = full_name.split_whitespace().collect();
    match words.as_slice() {
        [] => None,
        [only] => Some((*only).to_owned()),
        _ => {
            let mut parts = Vec::with_capacity(MAX_NAME_PARTS);
            for (index, word) in words.iter().take(MAX_NAME_PARTS).enumerate() {
                if index == words.len() - 1 {
                    let initial = word.chars().next().map(String::from).unwrap_or_default();
                    parts.push(format!("{initial}."));
                    break;
                }
                parts.push((*word).to_owned());
                if !looks_like_initial(word) {
                    break;
                }
            }
            Some(parts.join(" "))
        }
    }
}
