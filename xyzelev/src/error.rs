//! Error types for the xyzelev library.

use thiserror::Error;

use crate::coordinate::Axis;

/// Errors that can occur while turning XYZ coordinates into an elevation.
#[derive(Error, Debug)]
pub enum GeodesyError {
    /// A coordinate did not parse as a floating-point number.
    #[error("Invalid input for {axis}: {input:?} is not a number")]
    InvalidCoordinate { axis: Axis, input: String },

    /// A service answered with something other than 200 OK.
    #[error("Response not a success. Response Code: {status}")]
    HttpStatus { status: u16, url: String },

    /// The geoid service returned an empty object for the position.
    #[error("Geoid Data Empty. Likely poor coordinates entered.")]
    EmptyGeoid { latitude: f64, longitude: f64 },

    /// An expected field was absent from a response, or was not numeric.
    #[error("Lookup failed: no usable `{field}` in response")]
    MissingField { field: &'static str },

    /// The response body was not valid JSON.
    #[error("Malformed JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// Connection, DNS, timeout or other client-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error on the console.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`GeodesyError`].
pub type Result<T> = std::result::Result<T, GeodesyError>;
