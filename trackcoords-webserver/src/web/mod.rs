use std::sync::Arc;

use rocket::{
    config::Config as RocketCfg,
    data::{ByteUnit, Limits, ToByteUnit},
    figment::Figment,
    Rocket, Route,
};
use trackcoords_core::gateways::geocode::GeoCodingGateway;

pub mod api;
#[cfg(feature = "frontend")]
mod frontend;
mod guards;

#[cfg(test)]
pub mod tests;

/// Extra space of a multipart form besides the uploaded file.
const FORM_OVERHEAD: u64 = 64 * 1024;

#[derive(Debug, Clone)]
pub struct Cfg {
    /// Maximum size of an uploaded track file in bytes.
    pub max_upload_size: u64,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Gateways {
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
}

fn upload_limits(max_upload_size: ByteUnit) -> Limits {
    Limits::default()
        .limit("bytes", max_upload_size)
        .limit("file", max_upload_size)
        .limit("data-form", max_upload_size + FORM_OVERHEAD.bytes())
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Gateways { geocoding } = gateways;

    let figment = match rocket_cfg {
        Some(rocket_cfg) => Figment::from(rocket_cfg),
        None => RocketCfg::figment(),
    }
    .merge((
        RocketCfg::LIMITS,
        upload_limits(cfg.max_upload_size.bytes()),
    ));
    log::info!("Accepting track files up to {} bytes", cfg.max_upload_size);

    let geo_gw = guards::GeoCoding(geocoding);
    let version = guards::Version(version);

    let mut instance = rocket::custom(figment)
        .manage(geo_gw)
        .manage(cfg)
        .manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

#[cfg(not(feature = "frontend"))]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

#[cfg(feature = "frontend")]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", frontend::routes())]
}

pub async fn run(
    cfg: Cfg,
    enable_cors: bool,
    geocoding: Box<dyn GeoCodingGateway + Send + Sync>,
    version: &'static str,
) {
    let mounts = mounts();
    let options = InstanceOptions {
        mounts,
        rocket_cfg: None,
        cfg,
        version,
    };
    let gateways = Gateways {
        geocoding: Arc::from(geocoding),
    };

    let instance = rocket_instance(options, gateways);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                log::error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
