use trackcoords_core::{
    entities::MapPoint,
    gateways::geocode::{GeoCodingGateway, GeocodingError},
};
use trackcoords_gateways::opencage::OpenCage;

use crate::config;

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Box<dyn GeoCodingGateway + Send + Sync> {
    match &cfg.gateway {
        Some(config::GeocodingGateway::OpenCage { api_key }) => {
            log::info!("Use OpenCage geocoding gateway");
            Box::new(OpenCage::new(api_key.clone()))
        }
        None => {
            log::warn!("No geocoding gateway was configured");
            Box::new(NoGeoCoding)
        }
    }
}

struct NoGeoCoding;

impl GeoCodingGateway for NoGeoCoding {
    fn resolve_address_lat_lng(&self, _address: &str) -> Result<Option<MapPoint>, GeocodingError> {
        log::debug!("Cannot resolve addresses because no geocoding gateway was configured");
        Err(GeocodingError::NotConfigured)
    }
}
