use super::json_error_response;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;
use trackcoords_core::{entities::TrackFormatError, gateways::geocode::GeocodingError, usecases};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] usecases::Error),
    #[error("Address not found")]
    AddressNotFound,
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<TrackFormatError> for Error {
    fn from(err: TrackFormatError) -> Self {
        Self::App(err.into())
    }
}

impl Error {
    pub fn status(&self) -> Status {
        match self {
            Error::App(err) => match err {
                usecases::Error::Format(_) | usecases::Error::EmptyAddress => Status::BadRequest,
                usecases::Error::Track(_) => Status::UnprocessableEntity,
                usecases::Error::Geocoding(GeocodingError::NotConfigured) => {
                    Status::ServiceUnavailable
                }
                usecases::Error::Geocoding(_) => Status::BadGateway,
                usecases::Error::Csv(_) | usecases::Error::Encoding(_) => {
                    Status::InternalServerError
                }
            },
            Error::AddressNotFound => Status::NotFound,
            Error::OtherWithStatus(_, status) => *status,
            Error::Other(_) => Status::InternalServerError,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        let status = self.status();
        match &self {
            Error::App(usecases::Error::Track(_)) => {
                log::warn!("Unable to read track file: {self}");
            }
            Error::App(usecases::Error::Geocoding(GeocodingError::NotConfigured)) => {}
            Error::App(usecases::Error::Geocoding(_)) => {
                log::error!("Geocoding failed: {self}");
            }
            _ if status == Status::InternalServerError => {
                log::error!("Error: {self}");
                return Err(status);
            }
            _ => {}
        }
        json_error_response(req, &self, status)
    }
}
