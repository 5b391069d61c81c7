//! Flight board: presentation state around a fetch

use std::fmt;

use tracing::{error, info};

use crate::{
    errors::FlightTrackerError, filter::select_airborne, models::FlightRecord,
    provider::FlightProvider,
};

pub const NO_FLIGHTS_MESSAGE: &str = "No flights available.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch flights.";

/// Screen state of a board
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScreenState {
    #[default]
    Idle,
    Loading,
    Success(Vec<FlightRecord>),
    Error(String),
}

/// Tri-state view handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardStatus<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub flights: &'a [FlightRecord],
}

/// Airborne flights board backed by a provider
///
/// A refresh is `begin_refresh`, a fetch through `provider()`, then
/// `complete`. Renderers can read `status()` while the fetch is pending.
/// `refresh` runs all three and, taking `&mut self`, keeps at most one
/// fetch in flight per board.
#[derive(Debug)]
pub struct FlightBoard {
    provider: FlightProvider,
    state: ScreenState,
}

impl FlightBoard {
    pub fn new(provider: FlightProvider) -> Self {
        Self {
            provider,
            state: ScreenState::Idle,
        }
    }

    /// Fetch, filter and settle in `Success` or `Error`
    pub async fn refresh(&mut self) -> &ScreenState {
        self.begin_refresh();
        let fetched = self.provider.try_fetch_flights().await;
        self.complete(fetched)
    }

    /// Enter `Loading`, dropping whatever the board showed before
    pub fn begin_refresh(&mut self) {
        info!("Loading flights");
        self.state = ScreenState::Loading;
    }

    /// Filter a fetch result and settle in `Success` or `Error`
    pub fn complete(
        &mut self,
        fetched: Result<Vec<FlightRecord>, FlightTrackerError>,
    ) -> &ScreenState {
        self.state = Self::settle(fetched.map(|flights| select_airborne(&flights)));
        &self.state
    }

    pub fn provider(&self) -> &FlightProvider {
        &self.provider
    }

    fn settle<E: fmt::Display>(result: Result<Vec<FlightRecord>, E>) -> ScreenState {
        match result {
            Ok(flights) if flights.is_empty() => {
                info!("No airborne flights to show");
                ScreenState::Error(NO_FLIGHTS_MESSAGE.to_string())
            }
            Ok(flights) => {
                info!("Showing {} airborne flights", flights.len());
                ScreenState::Success(flights)
            }
            Err(e) => {
                error!("Failed to fetch flights: {}", e);
                ScreenState::Error(FETCH_FAILED_MESSAGE.to_string())
            }
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn status(&self) -> BoardStatus<'_> {
        match &self.state {
            ScreenState::Idle => BoardStatus {
                loading: false,
                error: None,
                flights: &[],
            },
            ScreenState::Loading => BoardStatus {
                loading: true,
                error: None,
                flights: &[],
            },
            ScreenState::Success(flights) => BoardStatus {
                loading: false,
                error: None,
                flights,
            },
            ScreenState::Error(message) => BoardStatus {
                loading: false,
                error: Some(message.as_str()),
                flights: &[],
            },
        }
    }
}

/// Text card for a single flight
pub struct FlightCard<'a>(pub &'a FlightRecord);

impl fmt::Display for FlightCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flight = self.0;
        let status = match &flight.live {
            Some(live) if live.is_on_ground => "Grounded",
            Some(_) => "In the air",
            None => "Unknown",
        };

        writeln!(f, "{} flight {}", flight.airline_name, flight.flight_code)?;
        writeln!(
            f,
            "From: {} ({})",
            flight.departure.name, flight.departure.iata_code
        )?;
        writeln!(
            f,
            "To: {} ({})",
            flight.arrival.name, flight.arrival.iata_code
        )?;
        write!(f, "Status: {}", status)
    }
}
