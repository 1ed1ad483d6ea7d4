//! Reading coordinates from GPS track files.
//!
//! Both supported formats are XML documents with a fixed namespace.
//! The documents are read as a stream of events; the format specific
//! parts only look at the elements of their own namespace and
//! collect the track points in document order.

use quick_xml::{
    encoding::Decoder,
    events::{attributes::AttrError, BytesStart, Event},
    name::{Namespace, ResolveResult},
    NsReader,
};
use thiserror::Error;

use crate::entities::{MapPoint, TrackFormat};

pub mod gpx;
pub mod tcx;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("Malformed XML attribute: {0}")]
    Attr(#[from] AttrError),
    #[error("Malformed XML: the document has no root element")]
    NoRootElement,
    #[error("Malformed XML: unexpected end of the document")]
    UnclosedElement,
    #[error("Malformed XML: content after the root element")]
    TrailingContent,
    #[error("Invalid coordinate value '{0}'")]
    InvalidNumber(String),
}

/// Extract all coordinates of a track file in document order.
pub fn parse_track(format: TrackFormat, xml: &[u8]) -> Result<Vec<MapPoint>, ParseError> {
    match format {
        TrackFormat::Tcx => tcx::parse_coordinates(xml),
        TrackFormat::Gpx => gpx::parse_coordinates(xml),
    }
}

/// Receives the elements of a document while it is read.
///
/// Empty elements (`<a/>`) are reported as a start immediately
/// followed by an end.
/// Attribute values and text are still encoded as declared by the
/// document; use the `decoder` to read them.
trait ElementVisitor {
    fn start(
        &mut self,
        ns: &ResolveResult,
        element: &BytesStart,
        decoder: Decoder,
    ) -> Result<(), ParseError>;
    /// Text is only decoded while this returns `true`.
    fn wants_text(&self) -> bool {
        false
    }
    fn text(&mut self, _text: &str) {}
    fn end(&mut self, ns: &ResolveResult, local_name: &[u8]) -> Result<(), ParseError>;
}

/// Read a complete document and pass its elements to the `visitor`.
///
/// Fails if the document is not well-formed.
fn visit_elements<V: ElementVisitor>(xml: &[u8], visitor: &mut V) -> Result<(), ParseError> {
    let mut reader = NsReader::from_reader(xml);
    let mut depth = 0_usize;
    let mut has_root = false;
    loop {
        // Set by the XML declaration, which precedes all elements.
        let decoder = reader.decoder();
        let (ns, event) = reader.read_resolved_event()?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                if depth == 0 && has_root {
                    return Err(ParseError::TrailingContent);
                }
                has_root = true;
                visitor.start(&ns, e, decoder)?;
                if let Event::Empty(_) = event {
                    visitor.end(&ns, e.local_name().as_ref())?;
                } else {
                    depth += 1;
                }
            }
            Event::End(ref e) => {
                depth = depth.checked_sub(1).ok_or(ParseError::TrailingContent)?;
                visitor.end(&ns, e.local_name().as_ref())?;
            }
            Event::Text(ref t) => {
                if depth > 0 {
                    if visitor.wants_text() {
                        visitor.text(&t.unescape()?);
                    }
                } else if !t.iter().all(u8::is_ascii_whitespace) {
                    return Err(ParseError::TrailingContent);
                }
            }
            Event::CData(ref t) => {
                if depth == 0 {
                    return Err(ParseError::TrailingContent);
                }
                if visitor.wants_text() {
                    let text = decoder.decode(t).map_err(quick_xml::Error::from)?;
                    visitor.text(&text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    if !has_root {
        return Err(ParseError::NoRootElement);
    }
    if depth > 0 {
        return Err(ParseError::UnclosedElement);
    }
    Ok(())
}

fn is_bound_to(ns: &ResolveResult, uri: &str) -> bool {
    matches!(ns, ResolveResult::Bound(Namespace(n)) if *n == uri.as_bytes())
}

fn parse_degrees(value: &str) -> Result<f64, ParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.to_string()))
}
