use std::collections::{HashMap, HashSet};

use scraper::{ElementRef, Node, Selector};

use super::error::PatternError;
use super::text_content::first_text_contains;

/// One position in a [`ShapePattern`]: what the child there must look like, and
/// optionally the name it is bound under in the resulting [`ShapeMatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    selector: &'static str,
    text_contains: Option<&'static str>,
    bind: Option<&'static str>,
    optional: bool,
}

impl Slot {
    /// `selector` is a CSS selector tested against the child itself, e.g. `"p"` or `"div:empty"`.
    pub const fn element(selector: &'static str) -> Self {
        Self {
            selector,
            text_contains: None,
            bind: None,
            optional: false,
        }
    }

    /// Also require the child's first own text node to contain `needle`.
    pub const fn containing_text(self, needle: &'static str) -> Self {
        Self {
            text_contains: Some(needle),
            ..self
        }
    }

    pub const fn bind(self, name: &'static str) -> Self {
        Self {
            bind: Some(name),
            ..self
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            optional: true,
            ..self
        }
    }
}

#[derive(Debug)]
struct CompiledSlot {
    slot: Slot,
    selector: Selector,
}

impl CompiledSlot {
    fn matches(&self, child: &ElementRef<'_>) -> bool {
        self.selector.matches(child)
            && self
                .slot
                .text_contains
                .map_or(true, |needle| first_text_contains(*child, needle))
    }
}

/// An ordered description of the element children a parent is expected to have.
///
/// At most one slot may be optional. Whether it takes part in a match is decided
/// purely by counting children, so a pattern never has to backtrack.
#[derive(Debug)]
pub struct ShapePattern {
    slots: Vec<CompiledSlot>,
    optional: Option<usize>,
}

impl ShapePattern {
    pub fn new(slots: &[Slot]) -> Result<Self, PatternError> {
        let optional_count = slots.iter().filter(|slot| slot.optional).count();
        if optional_count > 1 {
            return Err(PatternError::MultipleOptional {
                count: optional_count,
            });
        }

        let mut names = HashSet::new();
        let mut compiled = Vec::with_capacity(slots.len());
        for slot in slots {
            if let Some(name) = slot.bind {
                if !names.insert(name) {
                    return Err(PatternError::DuplicateBinding(name));
                }
            }
            let selector =
                Selector::parse(slot.selector).map_err(|e| PatternError::InvalidSelector {
                    selector: slot.selector,
                    reason: format!("{e:?}"),
                })?;
            compiled.push(CompiledSlot {
                slot: *slot,
                selector,
            });
        }

        Ok(Self {
            optional: slots.iter().position(|slot| slot.optional),
            slots: compiled,
        })
    }

    /// Matches the children of `parent` one-to-one against this pattern.
    ///
    /// Returns `None` if `parent` holds any non-blank text, if the child count fits
    /// neither the full nor the mandatory-only pattern, or if any child fails its slot.
    pub fn match_children<'a>(&self, parent: ElementRef<'a>) -> Option<ShapeMatch<'a>> {
        let children = element_children(parent)?;

        let skipped = match self.optional {
            None if children.len() == self.slots.len() => None,
            Some(index) if self.slots.len() == children.len() + 1 => Some(index),
            Some(_) if self.slots.len() == children.len() => None,
            _ => return None,
        };

        let active_slots = self
            .slots
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != skipped)
            .map(|(_, slot)| slot);

        let mut bound = HashMap::new();
        for (slot, child) in active_slots.zip(children) {
            if !slot.matches(&child) {
                return None;
            }
            if let Some(name) = slot.slot.bind {
                bound.insert(name, child);
            }
        }
        Some(ShapeMatch { bound })
    }
}

/// Whitespace that separates markup. A no-break space is content.
const LAYOUT_WHITESPACE: &[char] = &[' ', '\t', '\r', '\n'];

/// The element children of `parent` in document order, or `None` if there is any
/// text other than layout whitespace directly under it. Comments and the like are ignored.
fn element_children(parent: ElementRef<'_>) -> Option<Vec<ElementRef<'_>>> {
    let mut children = Vec::new();
    for node in parent.children() {
        match node.value() {
            Node::Text(text) if !text.trim_matches(LAYOUT_WHITESPACE).is_empty() => return None,
            Node::Element(_) => children.extend(ElementRef::wrap(node)),
            _ => {}
        }
    }
    Some(children)
}

/// Children bound by a successful [`ShapePattern::match_children`].
#[derive(Debug, Default)]
pub struct ShapeMatch<'a> {
    bound: HashMap<&'static str, ElementRef<'a>>,
}

impl<'a> ShapeMatch<'a> {
    pub fn get(&self, name: &str) -> Option<ElementRef<'a>> {
        self.bound.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bound.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}
