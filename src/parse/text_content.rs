use scraper::ElementRef;

/// All descendant text of `element`, concatenated in document order.
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// [`text_content`] with leading and trailing whitespace removed.
pub fn trimmed_text(element: ElementRef<'_>) -> String {
    let text = text_content(element);
    text.trim().to_owned()
}

/// true if the first text node directly under `element` contains `needle`.
///
/// Later text nodes don't count: in `<a>\n<i></i>Maps</a>` only the newline is searched.
pub fn first_text_contains(element: ElementRef<'_>, needle: &str) -> bool {
    element
        .children()
        .find_map(|node| node.value().as_text())
        .is_some_and(|text| text.contains(needle))
}
