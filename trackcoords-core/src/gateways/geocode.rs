use thiserror::Error;
use trackcoords_entities::geo::MapPoint;

pub trait GeoCodingGateway {
    /// Resolve a free-text address.
    ///
    /// Returns the position of the first candidate the service found
    /// or `None` if there is no candidate at all.
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<MapPoint>, GeocodingError>;
}

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("No geocoding gateway configured")]
    NotConfigured,
    #[error("Geocoding service responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Geocoding request failed: {0}")]
    Transport(#[from] anyhow::Error),
}
