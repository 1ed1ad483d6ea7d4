use std::{fmt, path::Path, str::FromStr};

use thiserror::Error;

/// The supported GPS track file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackFormat {
    /// Garmin Training Center Database v2
    Tcx,
    /// GPS Exchange Format 1.1
    Gpx,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackFormatError {
    #[error("Unsupported file type '{0}'")]
    Unsupported(String),
}

impl TrackFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Tcx => "tcx",
            Self::Gpx => "gpx",
        }
    }

    /// Select the format by the extension of a file name.
    ///
    /// The contents of the file are never inspected.
    pub fn from_file_name(file_name: &str) -> Result<Self, TrackFormatError> {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| TrackFormatError::Unsupported(file_name.to_string()))?
            .parse()
            .map_err(|_| TrackFormatError::Unsupported(file_name.to_string()))
    }
}

impl FromStr for TrackFormat {
    type Err = TrackFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(Self::Tcx.extension()) {
            Ok(Self::Tcx)
        } else if s.eq_ignore_ascii_case(Self::Gpx.extension()) {
            Ok(Self::Gpx)
        } else {
            Err(TrackFormatError::Unsupported(s.to_string()))
        }
    }
}

impl fmt::Display for TrackFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.extension())
    }
}
