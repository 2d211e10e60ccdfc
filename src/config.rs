use std::env;

const MAP_LINK_MARKER_VAR: &str = "CCK_MAP_LINK_MARKER";
const GPX_CREATOR_VAR: &str = "CCK_GPX_CREATOR";

const DEFAULT_MAP_LINK_MARKER: &str = "google.com/maps";
const DEFAULT_GPX_CREATOR: &str = "cck_gpx";

/// Settings read from the environment once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// substring an href must contain for the fallback scan to treat it as a map link
    pub map_link_marker: String,
    pub gpx_creator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map_link_marker: DEFAULT_MAP_LINK_MARKER.to_string(),
            gpx_creator: DEFAULT_GPX_CREATOR.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var_or = |name: &str, default: &str| match lookup(name) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                log::debug!("env var {name} not set, using {default:?}");
                default.to_string()
            }
        };
        Self {
            map_link_marker: var_or(MAP_LINK_MARKER_VAR, DEFAULT_MAP_LINK_MARKER),
            gpx_creator: var_or(GPX_CREATOR_VAR, DEFAULT_GPX_CREATOR),
        }
    }
}
