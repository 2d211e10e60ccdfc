//! Scraping of a saved delivery route page.
//!
//! Each stop is first parsed strictly against the known layout. When that fails
//! the stop falls back to a plain scan for its map link.
mod delivery_stop;
mod description;
mod display_name;
mod fallback;
mod map_link;
mod patterns;
mod telephone;

pub use delivery_stop::{try_strict_extract, DeliveryStop, StopError};
pub use description::{route_description, DescriptionError};
pub use fallback::{fallback_place_id, FallbackError};
pub use patterns::RoutePatterns;
