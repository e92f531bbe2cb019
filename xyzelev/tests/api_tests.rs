//! Integration tests for the HTTP client against a local mock of the NGS API.
//!
//! The mock runs on its own tokio runtime in a background thread so the
//! blocking client under test is never called from inside a runtime.

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{
    extract::Query,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use xyzelev::{
    EcefCoordinates, ElevationService, ElevationServiceBuilder, GeodesyError, HttpClient,
    JsonSource,
};

/// Known-good sample point (central Missouri).
const SAMPLE_X: &str = "-217,687.297";
const SAMPLE_Y: &str = "-5,069,012.421";
const SAMPLE_Z: &str = "3,852,223.063";

async fn ncat(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let datum_ok = params.get("inDatum").map(String::as_str) == Some("nad83(2011)")
        && params.get("outDatum").map(String::as_str) == Some("nad83(2011)");
    if !datum_ok {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "unknown datum"})),
        );
    }

    match params.get("x").map(String::as_str) {
        Some("-217687.297") => (
            StatusCode::OK,
            Json(json!({
                "ID": "1",
                "srcLat": "37.376954",
                "srcLon": "-92.46218",
                "srcEht": "201.612",
            })),
        ),
        // A point at sea.
        Some("0") => (
            StatusCode::OK,
            Json(json!({"srcLat": 0.0, "srcLon": -150.0, "srcEht": 10.0})),
        ),
        Some("1") => (StatusCode::OK, Json(json!({"srcLat": 1.0}))),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "conversion failed"})),
        ),
    }
}

async fn ght(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let lat: f64 = params
        .get("lat")
        .and_then(|s| s.parse().ok())
        .unwrap_or(f64::NAN);
    if lat == 0.0 {
        Json(json!({}))
    } else {
        Json(json!({"geoidModel": "GEOID18", "geoidHeight": -29.712}))
    }
}

async fn not_json() -> &'static str {
    "<html>maintenance</html>"
}

async fn unavailable() -> StatusCode {
    StatusCode::SERVICE_UNAVAILABLE
}

/// Start the mock API and return its address.
fn spawn_mock_api() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async move {
            let app = Router::new()
                .route("/api/ncat/xyz", get(ncat))
                .route("/api/geoid/ght", get(ght))
                .route("/html", get(not_json))
                .route("/unavailable", get(unavailable));
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });

    addr
}

fn service_for(addr: SocketAddr) -> ElevationService {
    ElevationServiceBuilder::new()
        .ncat_url(format!("http://{}/api/ncat/xyz", addr))
        .geoid_url(format!("http://{}/api/geoid/ght", addr))
        .build()
        .unwrap()
}

#[test]
fn test_full_lookup() {
    let addr = spawn_mock_api();
    let service = service_for(addr);
    let coords = EcefCoordinates::parse(SAMPLE_X, SAMPLE_Y, SAMPLE_Z).unwrap();

    let report = service.lookup(&coords).unwrap();

    assert_eq!(report.position.latitude, 37.376954);
    assert_eq!(report.position.longitude, -92.46218);
    assert_eq!(report.position.ellipsoid_height, 201.612);
    assert_eq!(report.geoid_height, -29.712);
    assert!((report.elevation - 171.9).abs() < 1e-9);
}

#[test]
fn test_empty_geoid_is_error() {
    let addr = spawn_mock_api();
    let service = service_for(addr);
    let coords = EcefCoordinates::parse("0", "0", "0").unwrap();

    let err = service.lookup(&coords).unwrap_err();
    assert!(matches!(err, GeodesyError::EmptyGeoid { .. }));
    assert_eq!(
        err.to_string(),
        "Geoid Data Empty. Likely poor coordinates entered."
    );
}

#[test]
fn test_missing_field_is_error() {
    let addr = spawn_mock_api();
    let service = service_for(addr);
    let coords = EcefCoordinates::parse("1", "1", "1").unwrap();

    let err = service.convert(&coords).unwrap_err();
    assert!(matches!(err, GeodesyError::MissingField { field: "srcLon" }));
}

#[test]
fn test_non_200_carries_status() {
    let addr = spawn_mock_api();
    let service = service_for(addr);
    let coords = EcefCoordinates::parse("42", "42", "42").unwrap();

    let err = service.lookup(&coords).unwrap_err();
    match &err {
        GeodesyError::HttpStatus { status, url } => {
            assert_eq!(*status, 500);
            assert!(url.contains("x=42&y=42&z=42"));
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
    assert!(err.to_string().contains("500"));
}

#[test]
fn test_client_status_without_body() {
    let addr = spawn_mock_api();
    let client = HttpClient::new().unwrap();

    let err = client
        .get_json(&format!("http://{}/unavailable", addr))
        .unwrap_err();
    assert!(matches!(err, GeodesyError::HttpStatus { status: 503, .. }));
}

#[test]
fn test_client_not_found() {
    let addr = spawn_mock_api();
    let client = HttpClient::new().unwrap();

    let err = client
        .get_json(&format!("http://{}/no/such/route", addr))
        .unwrap_err();
    assert!(matches!(err, GeodesyError::HttpStatus { status: 404, .. }));
}

#[test]
fn test_client_malformed_json() {
    let addr = spawn_mock_api();
    let client = HttpClient::new().unwrap();

    let err = client
        .get_json(&format!("http://{}/html", addr))
        .unwrap_err();
    assert!(matches!(err, GeodesyError::Json(_)));
}

#[test]
fn test_client_connection_refused() {
    // Bind then drop to get a port with nothing listening.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = HttpClient::new().unwrap();

    let err = client
        .get_json(&format!("http://{}/api/geoid/ght?lat=1&lon=1", addr))
        .unwrap_err();
    assert!(matches!(err, GeodesyError::Http(_)));
}
