//! Geoid height lookup and the elevation arithmetic.

use serde_json::Value;

use crate::client::{numeric_field, JsonSource};
use crate::error::{GeodesyError, Result};
use crate::url::build_geoid_url;

/// Look up the geoid height at a position.
///
/// The service answers `{}` for positions it has no model data for
/// (typically points at sea or outside the model's coverage). That case is
/// reported as [`GeodesyError::EmptyGeoid`] rather than a zero height.
pub fn geoid_height<S: JsonSource + ?Sized>(
    source: &S,
    geoid_url: &str,
    latitude: f64,
    longitude: f64,
) -> Result<f64> {
    let data = source.get_json(&build_geoid_url(geoid_url, latitude, longitude))?;

    if is_empty_object(&data) {
        tracing::warn!(latitude, longitude, "Geoid service returned no data");
        return Err(GeodesyError::EmptyGeoid {
            latitude,
            longitude,
        });
    }

    let height = numeric_field(&data, "geoidHeight")?;
    tracing::debug!(latitude, longitude, geoid_height = height, "Geoid height");
    Ok(height)
}

/// Elevation above mean sea level: ellipsoid height plus geoid height.
///
/// ```
/// assert_eq!(xyzelev::compute_elevation(1500.0, -20.5), 1479.5);
/// ```
pub fn compute_elevation(ellipsoid_height: f64, geoid_height: f64) -> f64 {
    ellipsoid_height + geoid_height
}

fn is_empty_object(value: &Value) -> bool {
    matches!(value, Value::Object(map) if map.is_empty())
}
