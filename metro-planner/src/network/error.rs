//! Network dataset error types.

use std::path::PathBuf;

use crate::domain::InvalidCoordinate;

/// Errors from loading the station or transit-pair datasets.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Dataset file could not be opened
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV row or header
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Station row with out-of-range coordinates
    #[error("station {station}: {source}")]
    InvalidCoordinate {
        station: String,
        #[source]
        source: InvalidCoordinate,
    },

    /// Station table with a header but no rows
    #[error("station table has no stations")]
    NoStations,

    /// Same station name listed twice in the coordinate table
    #[error("duplicate station: {0}")]
    DuplicateStation(String),

    /// Transit-pair row with an unusable value
    #[error("invalid transit pair {from} -> {to}: {message}")]
    InvalidSegment {
        from: String,
        to: String,
        message: String,
    },
}
