mod error;
mod export_coordinates;
mod extract_coordinates;
mod geocode_address;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    error::Error, export_coordinates::*, extract_coordinates::*, geocode_address::*,
};
