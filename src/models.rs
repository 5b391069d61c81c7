//! Data models.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use serde_helpers::*;

/// Airport at either end of a flight
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Airport {
    /// Airport name, empty string if not available
    #[serde(rename = "airport", default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    /// IATA airport code, empty string if not available
    #[serde(rename = "iata", default, deserialize_with = "deserialize_nullable_string")]
    pub iata_code: String,
}

/// Live telemetry of a flight
///
/// Only `is_on_ground` drives filtering, the remaining fields are what the
/// provider reports alongside it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LiveStatus {
    /// Whether the aircraft reports being on the ground
    pub is_on_ground: bool,
    /// Time of the telemetry fix, None if missing or unparseable
    pub updated: Option<DateTime<Utc>>,
    /// Altitude in meters, None if missing or not a number
    pub altitude: Option<f64>,
    /// Ground speed in km/h, None if missing or not a number
    pub speed_horizontal: Option<f64>,
}

/// One flight as reported by the provider
///
/// See: https://aviationstack.com/documentation (Real-Time Flights)
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct FlightRecord {
    /// Operating airline, from `airline.name`
    #[serde(rename = "airline", default, deserialize_with = "deserialize_airline_name")]
    pub airline_name: String,
    /// IATA flight designator, from `flight.iata`
    #[serde(rename = "flight", default, deserialize_with = "deserialize_flight_code")]
    pub flight_code: String,
    #[serde(default, deserialize_with = "deserialize_airport")]
    pub departure: Airport,
    #[serde(default, deserialize_with = "deserialize_airport")]
    pub arrival: Airport,
    /// Live telemetry, None if the provider has none for this flight
    #[serde(default, deserialize_with = "deserialize_live")]
    pub live: Option<LiveStatus>,
}

impl FlightRecord {
    /// Flight is airborne when live telemetry exists and reports not on ground
    pub fn is_airborne(&self) -> bool {
        self.live.as_ref().is_some_and(|live| !live.is_on_ground)
    }
}

/// Error envelope returned by the provider instead of `data`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub code: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub message: String,
}

/// Custom deserializers
///
/// The provider uses `null` liberally, both for whole objects and for
/// single fields inside them.
mod serde_helpers {
    use super::{Airport, LiveStatus};
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer};
    use serde_with::{serde_as, DefaultOnError};

    #[derive(Deserialize)]
    struct NamedObject {
        #[serde(default)]
        name: Option<String>,
    }

    #[derive(Deserialize)]
    struct FlightObject {
        #[serde(default)]
        iata: Option<String>,
    }

    /// Telemetry fields of the wrong type decode as missing
    #[serde_as]
    #[derive(Deserialize)]
    struct RawLive {
        #[serde_as(as = "DefaultOnError")]
        #[serde(default)]
        is_ground: Option<bool>,
        #[serde_as(as = "DefaultOnError")]
        #[serde(default)]
        updated: Option<String>,
        #[serde_as(as = "DefaultOnError")]
        #[serde(default)]
        altitude: Option<f64>,
        #[serde_as(as = "DefaultOnError")]
        #[serde(default)]
        speed_horizontal: Option<f64>,
    }

    pub fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.unwrap_or_default())
    }

    pub fn deserialize_airline_name<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<NamedObject>::deserialize(deserializer)?;
        Ok(value.and_then(|a| a.name).unwrap_or_default())
    }

    pub fn deserialize_flight_code<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<FlightObject>::deserialize(deserializer)?;
        Ok(value.and_then(|f| f.iata).unwrap_or_default())
    }

    pub fn deserialize_airport<'de, D>(deserializer: D) -> Result<Airport, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Airport>::deserialize(deserializer)?;
        Ok(value.unwrap_or_default())
    }

    /// Live object without `is_ground` counts as no telemetry at all
    pub fn deserialize_live<'de, D>(deserializer: D) -> Result<Option<LiveStatus>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<RawLive>::deserialize(deserializer)?;
        Ok(value.and_then(|raw| {
            raw.is_ground.map(|is_on_ground| LiveStatus {
                is_on_ground,
                updated: raw.updated.as_deref().and_then(parse_timestamp),
                altitude: raw.altitude,
                speed_horizontal: raw.speed_horizontal,
            })
        }))
    }

    fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
