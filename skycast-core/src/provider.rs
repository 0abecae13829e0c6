use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use thiserror::Error;

use crate::{Config, WeatherSnapshot, provider::openweather::OpenWeatherProvider};

pub mod openweather;

/// Everything that can go wrong while fetching a snapshot.
///
/// Screens collapse all of these into one "unavailable" state; the variants
/// only exist so the cause can be logged.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to send request to weather provider: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Weather provider responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse weather provider response: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Weather provider response contained no conditions")]
    NoConditions,
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for a city name, sent as-is.
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, FetchError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.resolve_api_key()?;

    Ok(Box::new(OpenWeatherProvider::new(
        config.base_url.clone(),
        api_key,
        config.units,
    )))
}
