use std::sync::Arc;

use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};
use trackcoords_core::{
    entities::MapPoint,
    gateways::geocode::{GeoCodingGateway, GeocodingError},
};

use crate::web::Cfg;

pub mod prelude {

    pub const DUMMY_VERSION: &str = "3.2.1";

    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{setup, setup_with_cfg, DummyGeoGW};

    pub const TWO_POINTS_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test" xmlns="http://www.topografix.com/GPX/1/1">
  <trk><trkseg>
    <trkpt lat="47.6062" lon="-122.3321"/>
    <trkpt lat="40.7128" lon="-74.0060"/>
  </trkseg></trk>
</gpx>"#;

    pub const ONE_POINT_TCX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
  <Activities><Activity Sport="Running"><Lap><Track>
    <Trackpoint>
      <Position><LatitudeDegrees>52.52</LatitudeDegrees><LongitudeDegrees>13.405</LongitudeDegrees></Position>
    </Trackpoint>
    <Trackpoint><Time>2024-05-01T06:00:01Z</Time></Trackpoint>
  </Track></Lap></Activity></Activities>
</TrainingCenterDatabase>"#;
}

pub fn default_cfg() -> Cfg {
    Cfg {
        max_upload_size: 1024 * 1024,
    }
}

pub fn setup(mounts: Vec<(&'static str, Vec<Route>)>) -> Client {
    setup_with_cfg(mounts, default_cfg())
}

pub fn setup_with_cfg(mounts: Vec<(&'static str, Vec<Route>)>, cfg: Cfg) -> Client {
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg,
        version: prelude::DUMMY_VERSION,
    };
    let gateways = super::Gateways {
        geocoding: Arc::new(DummyGeoGW),
    };
    let rocket = super::rocket_instance(options, gateways);
    Client::tracked(rocket).unwrap()
}

/// Knows Seattle, fails for "offline" and "unconfigured" and finds nothing else.
pub struct DummyGeoGW;

impl GeoCodingGateway for DummyGeoGW {
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<MapPoint>, GeocodingError> {
        match address {
            "Seattle" => Ok(Some(MapPoint::from_lat_lng_deg(47.6062, -122.3321))),
            "offline" => Err(GeocodingError::Transport(anyhow::anyhow!(
                "connection refused"
            ))),
            "unconfigured" => Err(GeocodingError::NotConfigured),
            _ => Ok(None),
        }
    }
}

#[test]
fn mount_all_routes() {
    let client = setup(super::mounts());
    let res = client.get("/api/version").dispatch();
    assert_eq!(prelude::Status::Ok, res.status());
    assert_eq!(prelude::DUMMY_VERSION, res.into_string().unwrap());
}
