mod collapse_whitespace;
mod error;
pub mod route_page;
mod shape;
pub(crate) mod static_selector;
mod text_content;

pub use collapse_whitespace::collapse_whitespace;
pub use error::{Error, PatternError, Result};
pub use shape::{ShapeMatch, ShapePattern, Slot};
pub use text_content::{text_content, trimmed_text};
