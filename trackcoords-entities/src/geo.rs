use std::fmt;

/// A geographical position in decimal degrees.
///
/// The values are taken as they are: no range checks are applied,
/// i.e. a latitude beyond ±90° is still a valid `MapPoint`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(&self) -> f64 {
        self.lat
    }

    pub const fn lng(&self) -> f64 {
        self.lng
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

impl From<(f64, f64)> for MapPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::from_lat_lng_deg(lat, lng)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
