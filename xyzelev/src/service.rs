//! End-to-end elevation lookup.
//!
//! This module provides [`ElevationService`], which chains the conversion
//! service and the geoid service for one coordinate triple.
//!
//! ```ignore
//! use xyzelev::{ElevationServiceBuilder, EcefCoordinates};
//!
//! let service = ElevationServiceBuilder::from_env().build()?;
//! let coords = EcefCoordinates::parse("-217,687.297", "-5,069,012.421", "3,852,223.063")?;
//! let report = service.lookup(&coords)?;
//! println!("Elevation: {}", report.elevation);
//! ```

use serde::Serialize;

use crate::client::{HttpClient, JsonSource};
use crate::convert::{convert_coordinates, GeodeticPosition};
use crate::coordinate::EcefCoordinates;
use crate::error::Result;
use crate::geoid::{compute_elevation, geoid_height};
use crate::url::{DEFAULT_GEOID_URL, DEFAULT_NCAT_URL};

/// Environment variable overriding the NCAT endpoint.
pub const NCAT_URL_ENV: &str = "XYZELEV_NCAT_URL";

/// Environment variable overriding the GEOID endpoint.
pub const GEOID_URL_ENV: &str = "XYZELEV_GEOID_URL";

/// Result of a full lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElevationReport {
    /// Position returned by the conversion service.
    #[serde(flatten)]
    pub position: GeodeticPosition,
    /// Geoid height in meters.
    pub geoid_height: f64,
    /// Elevation above mean sea level in meters.
    pub elevation: f64,
}

/// Elevation lookup against the NGS services.
pub struct ElevationService<S = HttpClient> {
    source: S,
    ncat_url: String,
    geoid_url: String,
}

impl<S: JsonSource> ElevationService<S> {
    /// Create a service on top of any [`JsonSource`].
    pub fn with_source(
        source: S,
        ncat_url: impl Into<String>,
        geoid_url: impl Into<String>,
    ) -> Self {
        Self {
            source,
            ncat_url: ncat_url.into(),
            geoid_url: geoid_url.into(),
        }
    }

    /// Convert XYZ to a geodetic position.
    pub fn convert(&self, coords: &EcefCoordinates) -> Result<GeodeticPosition> {
        convert_coordinates(&self.source, &self.ncat_url, coords)
    }

    /// Look up the geoid height at a position.
    pub fn geoid_height(&self, latitude: f64, longitude: f64) -> Result<f64> {
        geoid_height(&self.source, &self.geoid_url, latitude, longitude)
    }

    /// Run the full pipeline: conversion, geoid lookup, elevation.
    ///
    /// The geoid service is only called once the conversion has succeeded.
    pub fn lookup(&self, coords: &EcefCoordinates) -> Result<ElevationReport> {
        let position = self.convert(coords)?;
        let geoid_height = self.geoid_height(position.latitude, position.longitude)?;
        let elevation = compute_elevation(position.ellipsoid_height, geoid_height);

        tracing::info!(elevation, "Elevation computed");

        Ok(ElevationReport {
            position,
            geoid_height,
            elevation,
        })
    }

    /// NCAT endpoint in use.
    pub fn ncat_url(&self) -> &str {
        &self.ncat_url
    }

    /// GEOID endpoint in use.
    pub fn geoid_url(&self) -> &str {
        &self.geoid_url
    }
}

/// Builder for [`ElevationService`].
///
/// # Example
///
/// ```ignore
/// use xyzelev::ElevationServiceBuilder;
///
/// let service = ElevationServiceBuilder::new()
///     .ncat_url("http://localhost:8080/api/ncat/xyz")
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct ElevationServiceBuilder {
    ncat_url: String,
    geoid_url: String,
    client: Option<reqwest::blocking::Client>,
}

impl Default for ElevationServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ElevationServiceBuilder {
    /// Create a new builder pointing at the public NOAA endpoints.
    pub fn new() -> Self {
        Self {
            ncat_url: DEFAULT_NCAT_URL.to_string(),
            geoid_url: DEFAULT_GEOID_URL.to_string(),
            client: None,
        }
    }

    /// Create a builder configured from environment variables.
    ///
    /// # Environment Variables
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `XYZELEV_NCAT_URL` | NCAT XYZ endpoint | `https://geodesy.noaa.gov/api/ncat/xyz` |
    /// | `XYZELEV_GEOID_URL` | GEOID height endpoint | `https://geodesy.noaa.gov/api/geoid/ght` |
    ///
    /// Unset or empty variables fall back to the default.
    pub fn from_env() -> Self {
        let mut builder = Self::new();
        if let Some(url) = env_url(NCAT_URL_ENV) {
            builder.ncat_url = url;
        }
        if let Some(url) = env_url(GEOID_URL_ENV) {
            builder.geoid_url = url;
        }
        builder
    }

    /// Set the NCAT endpoint.
    pub fn ncat_url(mut self, url: impl Into<String>) -> Self {
        self.ncat_url = url.into();
        self
    }

    /// Set the GEOID endpoint.
    pub fn geoid_url(mut self, url: impl Into<String>) -> Self {
        self.geoid_url = url.into();
        self
    }

    /// Use a preconfigured `reqwest` client.
    pub fn client(mut self, client: reqwest::blocking::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the [`ElevationService`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn build(self) -> Result<ElevationService> {
        let source = match self.client {
            Some(client) => HttpClient::with_client(client),
            None => HttpClient::new()?,
        };

        Ok(ElevationService::with_source(
            source,
            trim_query(self.ncat_url),
            trim_query(self.geoid_url),
        ))
    }
}

fn env_url(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Drop a trailing `?` so bases copied from the NGS docs still work.
fn trim_query(url: String) -> String {
    match url.strip_suffix('?') {
        Some(stripped) => stripped.to_string(),
        None => url,
    }
}
