//! HTTP access to the NGS JSON services.
//!
//! [`JsonSource`] is the seam between the lookups and the network: the
//! converter and geoid lookup only need "GET this URL, give me JSON", which
//! [`HttpClient`] provides with a blocking `reqwest` client.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{GeodesyError, Result};

/// Something that can GET a URL and hand back its decoded JSON body.
pub trait JsonSource {
    /// Perform a single GET request and decode the body.
    ///
    /// # Errors
    ///
    /// * [`GeodesyError::HttpStatus`] for any status other than 200
    /// * [`GeodesyError::Json`] if the body is not JSON
    /// * [`GeodesyError::Http`] for connection-level failures
    fn get_json(&self, url: &str) -> Result<Value>;
}

/// Blocking HTTP client for the NGS services.
///
/// One request per call: no retries, no backoff, and no timeout beyond
/// `reqwest`'s default.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be built
    /// (e.g., TLS backend initialization failure).
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("xyzelev/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl JsonSource for HttpClient {
    fn get_json(&self, url: &str) -> Result<Value> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(url, status = status.as_u16(), "Request not successful");
            return Err(GeodesyError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Read a numeric field from a JSON object.
///
/// The NGS services are not consistent about types: some values come back as
/// JSON numbers, others as numeric strings (`"38.2"`). Both are accepted.
/// Anything else, including an absent field, is [`GeodesyError::MissingField`].
pub(crate) fn numeric_field(data: &Value, field: &'static str) -> Result<f64> {
    let value = match data.get(field) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    value.ok_or(GeodesyError::MissingField { field })
}
