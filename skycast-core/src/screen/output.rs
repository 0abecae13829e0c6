use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::{
    model::{Readings, Units, WeatherSnapshot},
    provider::{FetchError, WeatherProvider},
    router::Navigation,
};

pub const LOADING_MESSAGE: &str = "Loading weather data...";
pub const UNAVAILABLE_MESSAGE: &str = "Weather info not available.";
pub const GO_BACK_LABEL: &str = "Go Back";

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Ready {
        snapshot: WeatherSnapshot,
        readings: Readings,
    },
    Unavailable,
}

/// In-flight fetch owned by one mounted screen. Dropping it aborts the request.
#[derive(Debug)]
struct FetchTask {
    handle: JoinHandle<Result<WeatherSnapshot, FetchError>>,
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Screen showing current conditions for one city.
#[derive(Debug)]
pub struct WeatherOutput {
    city: String,
    units: Units,
    state: ViewState,
    fetch: Option<FetchTask>,
}

impl WeatherOutput {
    /// Mount the screen and start its single fetch.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn mount(city: String, units: Units, provider: Arc<dyn WeatherProvider>) -> Self {
        info!(%city, "Fetching weather");

        let query = city.clone();
        let handle = tokio::spawn(async move { provider.current_weather(&query).await });

        Self {
            city,
            units,
            state: ViewState::Loading,
            fetch: Some(FetchTask { handle }),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn readings(&self) -> Option<&Readings> {
        match &self.state {
            ViewState::Ready { readings, .. } => Some(readings),
            _ => None,
        }
    }

    /// Wait for the fetch to finish and move out of `Loading`.
    ///
    /// Calling this again after the screen has settled is a no-op.
    pub async fn settle(&mut self) -> &ViewState {
        let Some(mut task) = self.fetch.take() else {
            return &self.state;
        };

        self.state = match (&mut task.handle).await {
            Ok(Ok(snapshot)) => {
                let readings = Readings::derive(&snapshot, self.units);
                ViewState::Ready { snapshot, readings }
            }
            Ok(Err(err)) => {
                warn!(city = %self.city, error = %err, "Weather API error");
                ViewState::Unavailable
            }
            Err(err) => {
                warn!(city = %self.city, error = %err, "Weather fetch task failed");
                ViewState::Unavailable
            }
        };

        &self.state
    }

    pub fn go_back(&self) -> Navigation {
        Navigation::home()
    }
}
