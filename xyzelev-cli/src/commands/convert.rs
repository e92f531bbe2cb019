use anyhow::Result;
use std::io;
use xyzelev::{EcefCoordinates, GeodeticPosition};

use super::{report_failure, Endpoints};

pub fn run(endpoints: &Endpoints, x: &str, y: &str, z: &str, json: bool) -> Result<()> {
    let coords = EcefCoordinates::parse(x, y, z)?;
    let service = endpoints.build_service()?;

    match service.convert(&coords) {
        Ok(position) if json => println!("{}", serde_json::to_string(&position)?),
        Ok(position) => println!("{}", render_position(&position)),
        Err(e) => report_failure(&mut io::stdout(), &e)?,
    }

    Ok(())
}

fn render_position(position: &GeodeticPosition) -> String {
    format!(
        "Latitude: {}\nLongitude: {}\nEllipsoid Height: {}",
        position.latitude, position.longitude, position.ellipsoid_height
    )
}
