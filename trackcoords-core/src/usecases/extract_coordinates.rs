use super::Result;
use crate::{
    entities::{MapPoint, TrackFormat},
    track,
};

/// Extract the coordinates of an uploaded track file.
///
/// The format is selected by the extension of `file_name`.
pub fn extract_coordinates_from_file(file_name: &str, content: &[u8]) -> Result<Vec<MapPoint>> {
    let format = TrackFormat::from_file_name(file_name)?;
    log::debug!("Reading '{file_name}' as {format} file");
    extract_coordinates(format, content)
}

pub fn extract_coordinates(format: TrackFormat, content: &[u8]) -> Result<Vec<MapPoint>> {
    let coordinates = track::parse_track(format, content)?;
    log::debug!(
        "Extracted {} coordinates from {format} track",
        coordinates.len()
    );
    Ok(coordinates)
}
