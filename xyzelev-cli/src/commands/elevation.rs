use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use xyzelev::{
    prompt::prompt_coordinates, EcefCoordinates, ElevationReport, ElevationService, JsonSource,
};

use super::{report_failure, Endpoints};

pub fn run(
    endpoints: &Endpoints,
    coords: Option<(String, String, String)>,
    json: bool,
) -> Result<()> {
    let service = endpoints.build_service()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_with(&service, coords, json, &mut input, &mut output)
}

/// Coordinates → lookup → report. Lookup failures are written as a single
/// line and still return `Ok`.
fn run_with<S: JsonSource, R: BufRead, W: Write>(
    service: &ElevationService<S>,
    coords: Option<(String, String, String)>,
    json: bool,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    // Use the given coordinates, or ask for them one axis at a time
    let coords = match coords {
        Some((x, y, z)) => EcefCoordinates::parse(&x, &y, &z)?,
        None => prompt_coordinates(input, output).context("Failed to read coordinates")?,
    };

    match service.lookup(&coords) {
        Ok(report) if json => writeln!(output, "{}", serde_json::to_string(&report)?)?,
        Ok(report) => writeln!(output, "{}", render_report(&report))?,
        Err(e) => report_failure(output, &e)?,
    }

    Ok(())
}

fn render_report(report: &ElevationReport) -> String {
    format!(
        "\nLatitude: {}\nLongitude: {}\nEllipsoid Height: {}\nGeoid Height: {}\nElevation: {}",
        report.position.latitude,
        report.position.longitude,
        report.position.ellipsoid_height,
        report.geoid_height,
        report.elevation
    )
}
