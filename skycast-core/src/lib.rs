//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com client behind a provider abstraction
//! - The fetch controller and its observable state
//! - Shared domain models (current conditions, display units)
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod provider;

pub use config::Config;
pub use controller::{FetchState, MIN_CITY_LEN, WeatherController};
pub use error::FetchError;
pub use model::{Condition, Current, CurrentWeather, Location, TempUnit};
pub use provider::{WeatherProvider, provider_from_config, weatherapi::WeatherApiProvider};
