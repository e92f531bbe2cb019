//! # xyzelev - ECEF XYZ to Elevation
//!
//! Turns Earth-Centered Earth-Fixed (ECEF) XYZ coordinates into an elevation
//! above mean sea level using two NOAA National Geodetic Survey web services.
//!
//! ## Pipeline
//!
//! 1. **NCAT** converts XYZ to latitude, longitude and ellipsoid height
//!    (NAD83(2011) in and out).
//! 2. **GEOID** gives the geoid height at that latitude/longitude.
//! 3. Elevation = ellipsoid height + geoid height.
//!
//! ## Quick Start
//!
//! ```ignore
//! use xyzelev::{EcefCoordinates, ElevationServiceBuilder};
//!
//! let coords = EcefCoordinates::parse("-217,687.297", "-5,069,012.421", "3,852,223.063")?;
//! let service = ElevationServiceBuilder::new().build()?;
//! let report = service.lookup(&coords)?;
//! println!("Elevation: {}m", report.elevation);
//! ```
//!
//! ## Services
//!
//! - NCAT XYZ: <https://geodesy.noaa.gov/web_services/ncat/xyz-service.shtml>
//! - GEOID height: <https://geodesy.noaa.gov/web_services/geoid.shtml>

pub mod client;
pub mod convert;
pub mod coordinate;
pub mod error;
pub mod geoid;
pub mod prompt;
pub mod service;
pub mod url;

// Re-export main types at crate root for convenience
pub use client::{HttpClient, JsonSource};
pub use convert::{convert_coordinates, GeodeticPosition};
pub use coordinate::{Axis, EcefCoordinates};
pub use error::{GeodesyError, Result};
pub use geoid::{compute_elevation, geoid_height};
pub use service::{ElevationReport, ElevationService, ElevationServiceBuilder};
