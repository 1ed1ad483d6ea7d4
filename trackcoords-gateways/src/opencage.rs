use geocoding::{Forward, Opencage, Point};
use trackcoords_core::{
    entities::MapPoint,
    gateways::geocode::{GeoCodingGateway, GeocodingError},
};

/// A forward geocoding gateway based on opencagedata.com.
pub struct OpenCage {
    api_key: String,
}

impl OpenCage {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

impl GeoCodingGateway for OpenCage {
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<MapPoint>, GeocodingError> {
        let oc_req = Opencage::new(self.api_key.clone());
        let res: Vec<Point<f64>> = oc_req.forward(address).map_err(|err| {
            log::warn!("Failed to resolve address location '{address}': {err}");
            from_geocoding_error(err)
        })?;
        log::debug!("OpenCage found {} candidates for '{address}'", res.len());
        Ok(first_position(res))
    }
}

/// The points are ordered by relevance.
fn first_position(points: Vec<Point<f64>>) -> Option<MapPoint> {
    points
        .into_iter()
        .next()
        .map(|point| MapPoint::from_lat_lng_deg(point.y(), point.x()))
}

fn from_geocoding_error(err: geocoding::GeocodingError) -> GeocodingError {
    match err {
        geocoding::GeocodingError::Request(err) => match err.status() {
            Some(status) => GeocodingError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => GeocodingError::Transport(err.into()),
        },
        err => GeocodingError::Transport(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_most_relevant_point() {
        let points = vec![Point::new(13.3777041, 52.5162746), Point::new(2.0, 1.0)];
        assert_eq!(
            Some(MapPoint::from_lat_lng_deg(52.5162746, 13.3777041)),
            first_position(points)
        );
    }

    #[test]
    fn no_points() {
        assert_eq!(None, first_position(vec![]));
    }

    #[test]
    fn failures_without_http_status_are_transport_errors() {
        let err = from_geocoding_error(geocoding::GeocodingError::Forward);
        assert!(matches!(err, GeocodingError::Transport(_)));
    }
}
