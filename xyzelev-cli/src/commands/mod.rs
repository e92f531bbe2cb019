pub mod convert;
pub mod elevation;
pub mod geoid;

use anyhow::{Context, Result};
use std::io::{self, Write};
use xyzelev::{ElevationService, ElevationServiceBuilder, GeodesyError};

/// Endpoint overrides from the command line or environment.
pub struct Endpoints {
    pub ncat_url: Option<String>,
    pub geoid_url: Option<String>,
}

impl Endpoints {
    /// Build the service, falling back to the default NOAA endpoints.
    ///
    /// Blank overrides (e.g. `XYZELEV_NCAT_URL=""`) count as unset.
    pub fn build_service(&self) -> Result<ElevationService> {
        let mut builder = ElevationServiceBuilder::from_env();
        if let Some(url) = non_blank(&self.ncat_url) {
            builder = builder.ncat_url(url);
        }
        if let Some(url) = non_blank(&self.geoid_url) {
            builder = builder.geoid_url(url);
        }
        builder.build().context("Failed to create HTTP client")
    }
}

fn non_blank(url: &Option<String>) -> Option<&str> {
    url.as_deref().map(str::trim).filter(|u| !u.is_empty())
}

/// One-line rendering of a failed lookup.
pub fn failure_line(err: &GeodesyError) -> String {
    format!("An error has occurred: {}", err)
}

/// Print a failed lookup. The process still exits successfully.
pub fn report_failure<W: Write>(output: &mut W, err: &GeodesyError) -> io::Result<()> {
    tracing::debug!(error = ?err, "Lookup failed");
    writeln!(output, "{}", failure_line(err))
}
