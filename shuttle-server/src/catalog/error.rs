//! Catalog loading errors.

use crate::domain::{ClockError, InvalidCoord, NetworkError};

/// Errors that can occur when loading a network catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid catalog JSON
    #[error("catalog JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A service window time could not be parsed
    #[error("route {route}: {source}")]
    Time {
        route: String,
        #[source]
        source: ClockError,
    },

    /// A stop has an out-of-range coordinate
    #[error("stop {stop}: {source}")]
    Coord {
        stop: String,
        #[source]
        source: InvalidCoord,
    },

    /// The catalog parsed but violates a network invariant
    #[error(transparent)]
    Network(#[from] NetworkError),
}
