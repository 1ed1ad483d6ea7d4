use trackcoords_core::gateways::geocode::GeoCodingGateway;

mod web;

pub use web::Cfg;

pub async fn run(
    cfg: Cfg,
    enable_cors: bool,
    geo_gw: Box<dyn GeoCodingGateway + Send + Sync>,
    version: &'static str,
) {
    web::run(cfg, enable_cors, geo_gw, version).await;
}
