use crate::{Config, CurrentWeather, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// A source of current weather conditions for a named city.
///
/// The one production implementation talks to WeatherAPI.com; tests substitute
/// stubs to drive the fetch controller without network access.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> anyhow::Result<CurrentWeather>;
}

/// Construct the WeatherAPI.com provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.resolved_api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `skycast configure` and enter your WeatherAPI.com API key."
        )
    })?;

    Ok(Box::new(WeatherApiProvider::new(api_key)))
}
