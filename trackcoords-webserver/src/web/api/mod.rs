use std::{fmt::Display, result};

use anyhow::anyhow;
use rocket::{
    self,
    data::Capped,
    get,
    http::{Header, Status},
    post,
    response::{self, Responder},
    routes,
    serde::json::Json,
    Route, State,
};
use trackcoords_boundary::{self as json, Error as JsonErrorResponse};
use trackcoords_core::{
    entities::{MapPoint, TrackFormat},
    usecases,
};

use super::guards::*;

mod error;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        get_version,
        post_coordinates,
        post_coordinates_csv,
        get_geocode,
    ]
}

/// CSV data that is offered as a file download.
#[derive(rocket::Responder)]
#[response(content_type = "text/csv")]
pub struct CsvDownload {
    data: String,
    disposition: Header<'static>,
}

impl CsvDownload {
    pub fn new(data: String) -> Self {
        let disposition = Header::new(
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", usecases::CSV_FILE_NAME),
        );
        Self { data, disposition }
    }
}

#[get("/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.0
}

fn extract(
    format: TrackFormat,
    data: Capped<Vec<u8>>,
) -> result::Result<Vec<MapPoint>, ApiError> {
    if !data.is_complete() {
        return Err(ApiError::OtherWithStatus(
            anyhow!("The track file is too large"),
            Status::PayloadTooLarge,
        ));
    }
    Ok(usecases::extract_coordinates(format, &data)?)
}

#[post("/coordinates?<format>", data = "<data>")]
pub fn post_coordinates(format: &str, data: Capped<Vec<u8>>) -> Result<Vec<json::Coordinate>> {
    let format: TrackFormat = format.parse()?;
    let coordinates = extract(format, data)?;
    Ok(Json(coordinates.into_iter().map(Into::into).collect()))
}

#[post("/coordinates.csv?<format>", data = "<data>")]
pub fn post_coordinates_csv(
    format: &str,
    data: Capped<Vec<u8>>,
) -> result::Result<CsvDownload, ApiError> {
    let format: TrackFormat = format.parse()?;
    let coordinates = extract(format, data)?;
    let csv = usecases::export_coordinates_csv(&coordinates)?;
    Ok(CsvDownload::new(csv))
}

#[get("/geocode?<address>")]
pub async fn get_geocode(geo_gw: &State<GeoCoding>, address: &str) -> Result<json::Coordinate> {
    match geo_gw.geocode_address(address).await? {
        Some(pos) => Ok(Json(pos.into())),
        None => Err(ApiError::AddressNotFound),
    }
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
