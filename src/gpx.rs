//! GPX 1.1 output: route stops as plain waypoints, no route or track geometry.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::plus_code::Coordinates;

pub const GPX_NS: &str = "http://www.topografix.com/GPX/1/1";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const GPX_SCHEMA_LOCATION: &str =
    "http://www.topografix.com/GPX/1/1 http://www.topografix.com/GPX/1/1/gpx.xsd";

#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, at: Coordinates) -> Self {
        Self {
            name: name.into(),
            latitude: at.latitude,
            longitude: at.longitude,
        }
    }
}

/// A GPX document holding waypoints in insertion order and an optional description.
#[derive(Debug, Clone, PartialEq)]
pub struct Gpx {
    creator: String,
    description: Option<String>,
    waypoints: Vec<Waypoint>,
}

impl Gpx {
    pub fn new(creator: impl Into<String>) -> Self {
        Self {
            creator: creator.into(),
            description: None,
            waypoints: Vec::new(),
        }
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn push(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn write<W: Write>(&self, inner: W) -> io::Result<()> {
        let mut xml = Writer::new_with_indent(inner, b' ', 2);
        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut root = BytesStart::new("gpx");
        root.push_attribute(("version", "1.1"));
        root.push_attribute(("creator", self.creator.as_str()));
        root.push_attribute(("xmlns", GPX_NS));
        root.push_attribute(("xmlns:xsi", XSI_NS));
        root.push_attribute(("xsi:schemaLocation", GPX_SCHEMA_LOCATION));
        xml.write_event(Event::Start(root))?;

        if let Some(description) = &self.description {
            xml.write_event(Event::Start(BytesStart::new("metadata")))?;
            write_text_element(&mut xml, "desc", description)?;
            xml.write_event(Event::End(BytesEnd::new("metadata")))?;
        }

        for waypoint in &self.waypoints {
            let latitude = waypoint.latitude.to_string();
            let longitude = waypoint.longitude.to_string();
            let mut wpt = BytesStart::new("wpt");
            wpt.push_attribute(("lat", latitude.as_str()));
            wpt.push_attribute(("lon", longitude.as_str()));
            xml.write_event(Event::Start(wpt))?;
            write_text_element(&mut xml, "name", &waypoint.name)?;
            xml.write_event(Event::End(BytesEnd::new("wpt")))?;
        }

        xml.write_event(Event::End(BytesEnd::new("gpx")))?;
        xml.into_inner().flush()
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        self.write(BufWriter::new(file))
    }
}

fn write_text_element<W: Write>(xml: &mut Writer<W>, name: &str, text: &str) -> io::Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
