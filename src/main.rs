//! Airborne flight tracker

use flight_tracker::{
    board::{FlightBoard, FlightCard},
    config::AppConfig,
    errors::FlightTrackerError,
    provider::FlightProvider,
};
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), FlightTrackerError> {
    #[cfg(feature = "dotenv")]
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Configuration file first, environment variables override
    let config = AppConfig::load()?;

    let provider = FlightProvider::new(&config.provider)?;
    let mut board = FlightBoard::new(provider);

    board.begin_refresh();
    render(&board);

    let fetched = tokio::select! {
        result = board.provider().try_fetch_flights() => Some(result),
        _ = signal::ctrl_c() => {
            info!("Received shutdown signal");
            None
        }
    };

    if let Some(result) = fetched {
        board.complete(result);
        render(&board);
    }

    Ok(())
}

fn render(board: &FlightBoard) {
    let status = board.status();

    if status.loading {
        eprintln!("Loading flights...");
        return;
    }

    if let Some(message) = status.error {
        eprintln!("{}", message);
        return;
    }

    for flight in status.flights {
        println!("{}\n", FlightCard(flight));
    }
}
