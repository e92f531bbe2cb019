//! Query URLs for the NGS web services.
//!
//! - NCAT XYZ service: <https://geodesy.noaa.gov/web_services/ncat/xyz-service.shtml>
//! - GEOID height service: <https://geodesy.noaa.gov/web_services/geoid.shtml>
//!
//! Values are inserted as-is, nothing is percent-encoded.

use crate::coordinate::EcefCoordinates;

/// Default endpoint of the NCAT XYZ conversion service.
pub const DEFAULT_NCAT_URL: &str = "https://geodesy.noaa.gov/api/ncat/xyz";

/// Default endpoint of the GEOID height service.
pub const DEFAULT_GEOID_URL: &str = "https://geodesy.noaa.gov/api/geoid/ght";

/// Reference datum used for both input and output of the conversion.
pub const DATUM: &str = "nad83(2011)";

/// Build the NCAT conversion URL for a coordinate triple.
///
/// # Examples
///
/// ```
/// use xyzelev::{url::build_ncat_url, EcefCoordinates};
///
/// let coords = EcefCoordinates::parse("1", "2", "3")?;
/// assert_eq!(
///     build_ncat_url("https://example.com/ncat/xyz", &coords),
///     "https://example.com/ncat/xyz?inDatum=nad83(2011)&outDatum=nad83(2011)&x=1&y=2&z=3"
/// );
/// # Ok::<(), xyzelev::GeodesyError>(())
/// ```
pub fn build_ncat_url(base: &str, coords: &EcefCoordinates) -> String {
    format!(
        "{}?inDatum={}&outDatum={}&x={}&y={}&z={}",
        base,
        DATUM,
        DATUM,
        coords.x(),
        coords.y(),
        coords.z()
    )
}

/// Build the geoid height URL for a latitude/longitude pair.
pub fn build_geoid_url(base: &str, latitude: f64, longitude: f64) -> String {
    format!("{}?lat={}&lon={}", base, latitude, longitude)
}
