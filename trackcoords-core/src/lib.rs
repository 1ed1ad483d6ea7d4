//! # trackcoords-core
//!
//! Extracting coordinates from GPS track files, exporting them
//! and resolving addresses through a geocoding gateway.

pub mod gateways;
pub mod track;
pub mod usecases;

pub mod entities {
    pub use trackcoords_entities::{geo::*, track::*};
}
