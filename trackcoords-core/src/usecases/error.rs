use std::string::FromUtf8Error;

use thiserror::Error;

use crate::{entities::TrackFormatError, gateways::geocode::GeocodingError, track::ParseError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] TrackFormatError),
    #[error("The track file could not be read: {0}")]
    Track(#[from] ParseError),
    #[error("The address is empty")]
    EmptyAddress,
    #[error(transparent)]
    Geocoding(#[from] GeocodingError),
    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid encoding: {0}")]
    Encoding(#[from] FromUtf8Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Csv(err.into())
    }
}
