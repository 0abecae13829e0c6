use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::model::{Units, WeatherSnapshot};

use super::{FetchError, WeatherProvider};

/// Client for the OpenWeather current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    api_key: String,
    units: Units,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(base_url: String, api_key: String, units: Units) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            units,
            http: Client::new(),
        }
    }

    pub fn units(&self) -> Units {
        self.units
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self), fields(units = %self.units))]
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        let url = format!("{}/weather", self.base_url);
        debug!(%url, "Fetching current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ])
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::Request)?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: WeatherSnapshot = serde_json::from_str(&body).map_err(FetchError::Parse)?;

        if parsed.weather.is_empty() {
            return Err(FetchError::NoConditions);
        }

        debug!(temp = parsed.main.temp, "Received current weather");
        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
