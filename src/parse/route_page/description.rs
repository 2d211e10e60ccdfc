use std::fmt::Display;

use scraper::ElementRef;

use super::patterns::RoutePatterns;
use crate::parse::{collapse_whitespace, text_content};

/// Why the route description could not be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionError {
    ContentBlocks(usize),
    Shape,
    DescriptionDivs(usize),
    Empty,
}

impl Display for DescriptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContentBlocks(count) => {
                write!(f, "expected 2 <div> blocks under <main>, found {count}")
            }
            Self::Shape => write!(f, "route content doesn't have the expected layout"),
            Self::DescriptionDivs(count) => {
                write!(f, "expected 1 <div> in the description block, found {count}")
            }
            Self::Empty => write!(f, "route description is empty"),
        }
    }
}

impl std::error::Error for DescriptionError {}

fn child_divs(parent: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "div")
        .collect()
}

/// Finds the free-text description of the route ("Deliveries for 04/09/2022 in Demo").
pub fn route_description(
    main: ElementRef<'_>,
    patterns: &RoutePatterns,
) -> Result<String, DescriptionError> {
    let content = match child_divs(main).as_slice() {
        [_header, content] => *content,
        blocks => return Err(DescriptionError::ContentBlocks(blocks.len())),
    };
    let shape = patterns
        .route_content
        .match_children(content)
        .ok_or(DescriptionError::Shape)?;
    let block = shape.get("description").ok_or(DescriptionError::Shape)?;
    let description = match child_divs(block).as_slice() {
        [description] => collapse_whitespace(&text_content(*description)),
        divs => return Err(DescriptionError::DescriptionDivs(divs.len())),
    };
    if description.is_empty() {
        return Err(DescriptionError::Empty);
    }
    Ok(description)
}
