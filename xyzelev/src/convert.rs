//! XYZ to latitude / longitude / ellipsoid height via NCAT.

use serde::Serialize;

use crate::client::{numeric_field, JsonSource};
use crate::coordinate::EcefCoordinates;
use crate::error::Result;
use crate::url::build_ncat_url;

/// A geodetic position as returned by the conversion service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeodeticPosition {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Height above the reference ellipsoid in meters.
    pub ellipsoid_height: f64,
}

/// Convert ECEF coordinates to a geodetic position.
///
/// Reads `srcLat`, `srcLon` and `srcEht` from the NCAT response, in that
/// order. Any of them missing fails the whole lookup.
pub fn convert_coordinates<S: JsonSource + ?Sized>(
    source: &S,
    ncat_url: &str,
    coords: &EcefCoordinates,
) -> Result<GeodeticPosition> {
    let data = source.get_json(&build_ncat_url(ncat_url, coords))?;

    let position = GeodeticPosition {
        latitude: numeric_field(&data, "srcLat")?,
        longitude: numeric_field(&data, "srcLon")?,
        ellipsoid_height: numeric_field(&data, "srcEht")?,
    };
    tracing::debug!(?position, "Converted XYZ");
    Ok(position)
}
