use serde::{Deserialize, Serialize};

use super::Result;
use crate::entities::MapPoint;

pub const CSV_FILE_NAME: &str = "coordinates.csv";

const CSV_HEADER: [&str; 2] = ["Latitude", "Longitude"];

#[derive(Debug, Serialize, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Latitude")]
    lat: f64,
    #[serde(rename = "Longitude")]
    lng: f64,
}

impl From<MapPoint> for CsvRecord {
    fn from(pos: MapPoint) -> Self {
        let (lat, lng) = pos.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl From<CsvRecord> for MapPoint {
    fn from(r: CsvRecord) -> Self {
        MapPoint::from_lat_lng_deg(r.lat, r.lng)
    }
}

/// Serialize coordinates as CSV with a `Latitude,Longitude` header.
///
/// The header is also written if there are no coordinates.
pub fn export_coordinates_csv(coordinates: &[MapPoint]) -> Result<String> {
    let buf: Vec<u8> = vec![];
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(buf);
    wtr.write_record(CSV_HEADER)?;
    for pos in coordinates {
        wtr.serialize(CsvRecord::from(*pos))?;
    }
    wtr.flush()?;
    let data = wtr.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(data)?)
}

/// Read coordinates from CSV as written by [`export_coordinates_csv`].
pub fn import_coordinates_csv(data: &str) -> Result<Vec<MapPoint>> {
    let mut rdr = csv::Reader::from_reader(data.as_bytes());
    let mut coordinates = vec![];
    for record in rdr.deserialize::<CsvRecord>() {
        coordinates.push(record?.into());
    }
    Ok(coordinates)
}
