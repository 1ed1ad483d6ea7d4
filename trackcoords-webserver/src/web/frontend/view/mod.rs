use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use maud::{html, Markup};
use trackcoords_core::{entities::MapPoint, usecases::CSV_FILE_NAME};

mod page;

use page::*;

const TITLE: &str = "GPS Coordinates Extractor";

pub enum Extraction {
    Coordinates {
        coordinates: Vec<MapPoint>,
        /// The coordinates serialized as CSV.
        csv: String,
    },
    UnsupportedFileType,
}

pub enum LookupOutcome {
    Found(MapPoint),
    NotFound,
    /// The geocoding service could not be asked.
    Failed,
}

pub struct AddressLookup<'a> {
    pub address: &'a str,
    pub outcome: LookupOutcome,
}

pub fn index(extraction: Option<&Extraction>, lookup: Option<&AddressLookup>) -> Markup {
    page(
        TITLE,
        html! {
            h1 { (TITLE) }
            p {
                "Upload a TCX or GPX file to extract the coordinates \
                 or enter an address to get its coordinates."
            }
            (upload_form())
            @if let Some(extraction) = extraction {
                (extraction_result(extraction))
            }
            (address_form(lookup.map(|l| l.address)))
            @if let Some(lookup) = lookup {
                (lookup_result(lookup))
            }
        },
    )
}

fn upload_form() -> Markup {
    html! {
        div class="upload-form" {
            form action="/upload" method="POST" enctype="multipart/form-data" {
                label for="file" { "Choose a TCX or GPX file" }
                br;
                input type="file" id="file" name="file" accept=".tcx,.gpx" required;
                input class="btn" type="submit" value="extract";
            }
        }
    }
}

fn extraction_result(extraction: &Extraction) -> Markup {
    match extraction {
        Extraction::UnsupportedFileType => {
            error_msg("Unsupported file type. Please upload a TCX or GPX file.")
        }
        Extraction::Coordinates { coordinates, csv } => html! {
            div class="results" {
                p { "Extracted Coordinates:" }
                (coordinates_table(coordinates))
                a class="btn"
                    href=(csv_data_uri(csv))
                    download=(CSV_FILE_NAME)
                    { "Download Coordinates as CSV" }
            }
        },
    }
}

fn coordinates_table(coordinates: &[MapPoint]) -> Markup {
    html! {
        table class="coordinates" {
            thead {
                tr {
                    th { "Latitude" }
                    th { "Longitude" }
                }
            }
            tbody {
                @for pos in coordinates {
                    tr {
                        td { (pos.lat()) }
                        td { (pos.lng()) }
                    }
                }
            }
        }
    }
}

fn csv_data_uri(csv: &str) -> String {
    format!("data:text/csv;charset=utf-8;base64,{}", BASE64.encode(csv))
}

fn address_form(address: Option<&str>) -> Markup {
    html! {
        div class="address-form" {
            p { "Or, enter an address to get its coordinates:" }
            form action="/" method="GET" {
                label for="address" { "Enter address" }
                br;
                input
                    type="text"
                    id="address"
                    name="address"
                    value=(address.unwrap_or(""))
                    size=(50)
                    maxlength=(200);
                input class="btn" type="submit" value="lookup";
            }
        }
    }
}

fn lookup_result(lookup: &AddressLookup) -> Markup {
    match lookup.outcome {
        LookupOutcome::Found(pos) => html! {
            p class="lookup-result" {
                (format!(
                    "The coordinates for the address '{}' are: Latitude = {}, Longitude = {}",
                    lookup.address,
                    pos.lat(),
                    pos.lng()
                ))
            }
        },
        LookupOutcome::NotFound => error_msg("Address not found. Please enter a valid address."),
        LookupOutcome::Failed => {
            error_msg("The address could not be looked up. Please try again later.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_as_base64_data_uri() {
        assert_eq!(
            "data:text/csv;charset=utf-8;base64,TGF0aXR1ZGUsTG9uZ2l0dWRlCg==",
            csv_data_uri("Latitude,Longitude\n")
        );
    }

    #[test]
    fn table_rows_in_order() {
        let coordinates = [
            MapPoint::from_lat_lng_deg(1.5, 2.5),
            MapPoint::from_lat_lng_deg(-3.25, 4.0),
        ];
        let html = coordinates_table(&coordinates).into_string();
        let first = html.find("<td>1.5</td><td>2.5</td>").unwrap();
        let second = html.find("<td>-3.25</td><td>4</td>").unwrap();
        assert!(first < second);
    }

    #[test]
    fn table_has_latitude_and_longitude_columns_only() {
        let html = coordinates_table(&[MapPoint::from_lat_lng_deg(1.5, 2.5)]).into_string();
        assert!(html.contains("<tr><th>Latitude</th><th>Longitude</th></tr>"));
        assert_eq!(2, html.matches("<td>").count());
    }
}
