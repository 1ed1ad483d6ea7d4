//! Garmin Training Center Database (TCX) v2

use quick_xml::{encoding::Decoder, events::BytesStart, name::ResolveResult};

use super::{is_bound_to, parse_degrees, visit_elements, ElementVisitor, ParseError};
use crate::entities::MapPoint;

pub const NAMESPACE: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2";

const TRACKPOINT: &[u8] = b"Trackpoint";
const LATITUDE: &[u8] = b"LatitudeDegrees";
const LONGITUDE: &[u8] = b"LongitudeDegrees";

/// Collect the position of every `Trackpoint`.
///
/// The first `LatitudeDegrees` and `LongitudeDegrees` below a
/// track point provide the position.
/// Track points without both of them are skipped.
pub fn parse_coordinates(xml: &[u8]) -> Result<Vec<MapPoint>, ParseError> {
    let mut collector = Collector::default();
    visit_elements(xml, &mut collector)?;
    Ok(collector.coordinates)
}

#[derive(Clone, Copy)]
enum Field {
    Lat,
    Lng,
}

#[derive(Default)]
struct Trackpoint {
    lat: Option<String>,
    lng: Option<String>,
}

impl Trackpoint {
    fn field_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Lat => &mut self.lat,
            Field::Lng => &mut self.lng,
        }
    }
}

/// Text of a degree element that is currently read.
struct Capture {
    field: Field,
    /// Number of open child elements.
    nested: usize,
    text: String,
}

#[derive(Default)]
struct Collector {
    coordinates: Vec<MapPoint>,
    trackpoint: Option<Trackpoint>,
    /// Number of open `Trackpoint` elements inside the current one.
    nested_trackpoints: usize,
    capture: Option<Capture>,
}

impl ElementVisitor for Collector {
    fn start(
        &mut self,
        ns: &ResolveResult,
        element: &BytesStart,
        _: Decoder,
    ) -> Result<(), ParseError> {
        if let Some(capture) = &mut self.capture {
            // Only the text in front of the first child is part of the value.
            capture.nested += 1;
            return Ok(());
        }
        if !is_bound_to(ns, NAMESPACE) {
            return Ok(());
        }
        let name = element.local_name();
        if name.as_ref() == TRACKPOINT {
            if self.trackpoint.is_some() {
                self.nested_trackpoints += 1;
            } else {
                self.trackpoint = Some(Trackpoint::default());
            }
            return Ok(());
        }
        let Some(trackpoint) = &mut self.trackpoint else {
            return Ok(());
        };
        let field = match name.as_ref() {
            LATITUDE => Field::Lat,
            LONGITUDE => Field::Lng,
            _ => return Ok(()),
        };
        if trackpoint.field_mut(field).is_none() {
            self.capture = Some(Capture {
                field,
                nested: 0,
                text: String::new(),
            });
        }
        Ok(())
    }

    fn wants_text(&self) -> bool {
        matches!(&self.capture, Some(capture) if capture.nested == 0)
    }

    fn text(&mut self, text: &str) {
        if let Some(capture) = &mut self.capture {
            if capture.nested == 0 {
                capture.text.push_str(text);
            }
        }
    }

    fn end(&mut self, ns: &ResolveResult, local_name: &[u8]) -> Result<(), ParseError> {
        if let Some(mut capture) = self.capture.take() {
            if capture.nested > 0 {
                capture.nested -= 1;
                self.capture = Some(capture);
            } else if let Some(trackpoint) = &mut self.trackpoint {
                *trackpoint.field_mut(capture.field) = Some(capture.text);
            }
            return Ok(());
        }
        if !is_bound_to(ns, NAMESPACE) || local_name != TRACKPOINT {
            return Ok(());
        }
        if self.nested_trackpoints > 0 {
            self.nested_trackpoints -= 1;
            return Ok(());
        }
        if let Some(Trackpoint {
            lat: Some(lat),
            lng: Some(lng),
        }) = self.trackpoint.take()
        {
            let pos = MapPoint::from_lat_lng_deg(parse_degrees(&lat)?, parse_degrees(&lng)?);
            self.coordinates.push(pos);
        }
        Ok(())
    }
}
