//! Thin wrapper over `open-location-code`.
use open_location_code as olc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

pub fn is_valid(code: &str) -> bool {
    olc::is_valid(code)
}

/// true for globally unambiguous codes, false for short/local forms like "2222+22"
pub fn is_full(code: &str) -> bool {
    olc::is_valid(code) && olc::is_full(code)
}

/// Centre of the area a full-length code names. `None` for anything else.
pub fn decode(code: &str) -> Option<Coordinates> {
    if !is_full(code) {
        return None;
    }
    let area = olc::decode(code).ok()?;
    Some(Coordinates {
        latitude: area.center.y(),
        longitude: area.center.x(),
    })
}
