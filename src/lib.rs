//! Airborne flight tracker
//!
//! Fetches real-time flights from the provider and keeps the ones in the air.

pub mod board;
pub mod config;
pub mod errors;
pub mod filter;
pub mod models;
pub mod provider;
