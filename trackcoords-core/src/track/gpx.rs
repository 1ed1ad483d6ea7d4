//! GPS Exchange Format (GPX) 1.1

use quick_xml::{encoding::Decoder, events::BytesStart, name::ResolveResult};

use super::{is_bound_to, parse_degrees, visit_elements, ElementVisitor, ParseError};
use crate::entities::MapPoint;

pub const NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";

const TRKPT: &[u8] = b"trkpt";

/// Collect the position of every `trkpt` from its `lat` and `lon` attributes.
///
/// Track points without both attributes are skipped.
pub fn parse_coordinates(xml: &[u8]) -> Result<Vec<MapPoint>, ParseError> {
    let mut collector = Collector::default();
    visit_elements(xml, &mut collector)?;
    Ok(collector.coordinates)
}

#[derive(Default)]
struct Collector {
    coordinates: Vec<MapPoint>,
}

impl ElementVisitor for Collector {
    fn start(
        &mut self,
        ns: &ResolveResult,
        element: &BytesStart,
        decoder: Decoder,
    ) -> Result<(), ParseError> {
        if !is_bound_to(ns, NAMESPACE) || element.local_name().as_ref() != TRKPT {
            return Ok(());
        }
        let mut lat = None;
        let mut lon = None;
        for attr in element.attributes() {
            let attr = attr?;
            match attr.key.as_ref() {
                b"lat" => lat = Some(attr.decode_and_unescape_value(decoder)?.into_owned()),
                b"lon" => lon = Some(attr.decode_and_unescape_value(decoder)?.into_owned()),
                _ => {}
            }
        }
        if let (Some(lat), Some(lon)) = (lat, lon) {
            let pos = MapPoint::from_lat_lng_deg(parse_degrees(&lat)?, parse_degrees(&lon)?);
            self.coordinates.push(pos);
        }
        Ok(())
    }

    fn end(&mut self, _: &ResolveResult, _: &[u8]) -> Result<(), ParseError> {
        Ok(())
    }
}
