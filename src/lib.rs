#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

//! Scrapes the delivery stops out of a saved route page and writes them to a
//! GPX file as waypoints, for use as markers in a map app.
//!
//! The GPX file deliberately holds no more than a short name and a position per
//! stop. Keep the web app or the printed route sheet at hand for everything
//! else, allergies in particular.

// only used by the binary
use clap as _;
use pretty_env_logger as _;

pub mod config;
pub mod error;
pub mod extract;
pub mod gpx;
pub mod parse;
pub mod plus_code;

pub use error::{Error, Result};
