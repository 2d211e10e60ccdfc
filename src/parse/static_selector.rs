use std::sync::OnceLock;

use scraper::{ElementRef, Selector};

/// A CSS selector compiled on first use, so it can live in a `static`.
#[derive(Debug)]
pub struct StaticSelector {
    cell: OnceLock<Selector>,
    css: &'static str,
}

impl StaticSelector {
    pub(crate) const fn new(css: &'static str) -> Self {
        Self {
            cell: OnceLock::new(),
            css,
        }
    }

    /// The one element under `scope` matching this selector, or how many matched instead.
    pub(crate) fn select_single<'a>(
        &self,
        scope: ElementRef<'a>,
    ) -> Result<ElementRef<'a>, usize> {
        let mut found = scope.select(self);
        match (found.next(), found.next()) {
            (Some(only), None) => Ok(only),
            (None, _) => Err(0),
            (Some(_), Some(_)) => Err(2 + found.count()),
        }
    }
}

impl core::ops::Deref for StaticSelector {
    type Target = Selector;

    // selectors passed to `static_selector!` are literals, so a parse failure is a bug in this crate
    fn deref(&self) -> &Self::Target {
        self.cell.get_or_init(|| match Selector::parse(self.css) {
            Ok(sel) => sel,
            Err(e) => panic!("Error parsing static selector {}: {:?}", self.css, e),
        })
    }
}

#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::parse::static_selector::StaticSelector =
            $crate::parse::static_selector::StaticSelector::new($sel);
    };
}
