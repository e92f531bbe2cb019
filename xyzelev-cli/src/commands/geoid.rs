use anyhow::Result;
use serde::Serialize;
use std::io;

use super::{report_failure, Endpoints};

#[derive(Serialize)]
struct GeoidResponse {
    latitude: f64,
    longitude: f64,
    geoid_height: f64,
}

pub fn run(endpoints: &Endpoints, lat: f64, lon: f64, json: bool) -> Result<()> {
    let service = endpoints.build_service()?;

    match service.geoid_height(lat, lon) {
        Ok(geoid_height) if json => {
            let response = GeoidResponse {
                latitude: lat,
                longitude: lon,
                geoid_height,
            };
            println!("{}", serde_json::to_string(&response)?);
        }
        Ok(geoid_height) => println!("Geoid Height: {}", geoid_height),
        Err(e) => report_failure(&mut io::stdout(), &e)?,
    }

    Ok(())
}
