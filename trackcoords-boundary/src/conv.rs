use super::*;
use trackcoords_entities as e;

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        Self {
            lat: from.lat(),
            lng: from.lng(),
        }
    }
}

impl From<Coordinate> for e::geo::MapPoint {
    fn from(c: Coordinate) -> Self {
        e::geo::MapPoint::from_lat_lng_deg(c.lat, c.lng)
    }
}
