//! Flight data provider client

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::{
    config::ProviderConfig,
    errors::FlightTrackerError,
    models::{FlightRecord, ProviderErrorBody},
};

/// HTTP client for the upstream flight-data provider
#[derive(Debug, Clone)]
pub struct FlightProvider {
    client: Client,
    config: ProviderConfig,
}

impl FlightProvider {
    /// Create a new provider client
    pub fn new(config: &ProviderConfig) -> Result<Self, FlightTrackerError> {
        config.validate()?;

        info!(
            "Initializing FlightProvider: url={}, timeout={:?}",
            config.flights_url(),
            config.timeout
        );

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Fetch all flights currently reported by the provider
    ///
    /// Transport, status and shape failures are returned as distinct errors.
    /// The request URL carries the access key, so it is stripped from
    /// transport errors before they leave this function.
    pub async fn try_fetch_flights(&self) -> Result<Vec<FlightRecord>, FlightTrackerError> {
        let response = self
            .client
            .get(self.config.flights_url())
            .query(&[("access_key", self.config.access_key.as_str())])
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)?;

        debug!(
            "Provider response: status={}, body={}",
            status,
            String::from_utf8_lossy(&body)
        );

        if !status.is_success() {
            return Err(Self::parse_error_body(&body)
                .unwrap_or(FlightTrackerError::StatusError(status)));
        }

        let flights = Self::parse_response(&body)?;
        info!("Received {} flights from provider", flights.len());
        Ok(flights)
    }

    /// Fetch flights, logging any failure and returning an empty list instead
    pub async fn fetch_flights(&self) -> Vec<FlightRecord> {
        match self.try_fetch_flights().await {
            Ok(flights) => flights,
            Err(e) => {
                error!("Failed to fetch flights: {}", e);
                Vec::new()
            }
        }
    }

    /// Parse a flights response body
    ///
    /// Expected shape is `{"data": [...]}`; the provider may instead answer
    /// with `{"error": {"code": ..., "message": ...}}`.
    pub fn parse_response(body: &[u8]) -> Result<Vec<FlightRecord>, FlightTrackerError> {
        let value: Value = serde_json::from_slice(body)?;

        let mut object = match value {
            Value::Object(object) => object,
            other => {
                return Err(FlightTrackerError::MalformedResponse(format!(
                    "expected JSON object, got {}",
                    json_type(&other)
                )))
            }
        };

        if let Some(e) = object.get("error").and_then(Self::provider_error) {
            return Err(e);
        }

        match object.remove("data") {
            Some(data @ Value::Array(_)) => Ok(serde_json::from_value(data)?),
            Some(other) => Err(FlightTrackerError::MalformedResponse(format!(
                "`data` is not a list but {}",
                json_type(&other)
            ))),
            None => Err(FlightTrackerError::MalformedResponse(
                "missing `data` field".to_string(),
            )),
        }
    }

    fn parse_error_body(body: &[u8]) -> Option<FlightTrackerError> {
        let value: Value = serde_json::from_slice(body).ok()?;
        value.get("error").and_then(Self::provider_error)
    }

    fn provider_error(error: &Value) -> Option<FlightTrackerError> {
        let body = ProviderErrorBody::deserialize(error).ok()?;
        Some(FlightTrackerError::ProviderError {
            code: body.code,
            message: body.message,
        })
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
