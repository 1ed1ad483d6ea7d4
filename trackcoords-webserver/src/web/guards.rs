use std::sync::Arc;

use anyhow::anyhow;
use rocket::tokio::task;
use trackcoords_core::{entities::MapPoint, gateways::geocode::GeoCodingGateway, usecases};

use crate::web::api::ApiError;

pub struct GeoCoding(pub Arc<dyn GeoCodingGateway + Send + Sync>);

impl GeoCoding {
    /// Resolve an address without blocking the async executor.
    pub async fn geocode_address(&self, address: &str) -> Result<Option<MapPoint>, ApiError> {
        let gw = Arc::clone(&self.0);
        let address = address.to_string();
        let pos = task::spawn_blocking(move || usecases::geocode_address(&*gw, &address))
            .await
            .map_err(|err| anyhow!("Geocoding task failed: {err}"))??;
        Ok(pos)
    }
}

pub struct Version(pub &'static str);
