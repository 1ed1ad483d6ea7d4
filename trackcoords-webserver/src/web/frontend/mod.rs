use maud::Markup;
use rocket::{
    self,
    data::ToByteUnit,
    form::{self, DataField, Form, FromFormField},
    get,
    http::Status,
    post,
    response::content::RawCss,
    routes, FromForm, Route, State,
};
use trackcoords_core::usecases;

use crate::web::{api::ApiError, guards::*};

mod view;


const MAIN_CSS: &str = include_str!("main.css");

type Result<T> = std::result::Result<T, ApiError>;

/// An uploaded track file.
pub struct TrackFile {
    /// The file name as sent by the browser.
    pub file_name: Option<String>,
    pub content: Vec<u8>,
}

#[rocket::async_trait]
impl<'r> FromFormField<'r> for TrackFile {
    async fn from_data(field: DataField<'r, '_>) -> form::Result<'r, Self> {
        let limit = field
            .request
            .limits()
            .get("file")
            .unwrap_or(1.mebibytes());
        let bytes = field.data.open(limit).into_bytes().await?;
        if !bytes.is_complete() {
            Err((None, Some(limit)))?;
        }
        let file_name = field
            .file_name
            .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str().to_string());
        Ok(Self {
            file_name,
            content: bytes.into_inner(),
        })
    }
}

#[derive(FromForm)]
pub struct Upload {
    file: TrackFile,
}

#[get("/?<address>")]
pub async fn get_index(geo_gw: &State<GeoCoding>, address: Option<&str>) -> (Status, Markup) {
    let Some(address) = address.map(str::trim).filter(|a| !a.is_empty()) else {
        return (Status::Ok, view::index(None, None));
    };
    let (status, outcome) = match geo_gw.geocode_address(address).await {
        Ok(Some(pos)) => (Status::Ok, view::LookupOutcome::Found(pos)),
        Ok(None) => (Status::Ok, view::LookupOutcome::NotFound),
        Err(err) => {
            log::warn!("Address lookup failed: {err}");
            (err.status(), view::LookupOutcome::Failed)
        }
    };
    let lookup = view::AddressLookup { address, outcome };
    (status, view::index(None, Some(&lookup)))
}

#[get("/index.html")]
pub fn get_index_html() -> Markup {
    view::index(None, None)
}

#[post("/upload", data = "<upload>")]
pub fn post_upload(upload: Form<Upload>) -> Result<Markup> {
    let TrackFile { file_name, content } = upload.into_inner().file;
    let file_name = file_name.unwrap_or_default();
    let outcome = match usecases::extract_coordinates_from_file(&file_name, &content) {
        Ok(coordinates) => {
            let csv = usecases::export_coordinates_csv(&coordinates)?;
            view::Extraction::Coordinates { coordinates, csv }
        }
        Err(usecases::Error::Format(err)) => {
            log::debug!("Rejected upload: {err}");
            view::Extraction::UnsupportedFileType
        }
        Err(err) => return Err(err.into()),
    };
    Ok(view::index(Some(&outcome), None))
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

pub fn routes() -> Vec<Route> {
    routes![get_index, get_index_html, post_upload, get_main_css]
}
