//! In-memory provider for screen and app tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::sync::Notify;

use crate::{
    model::{Condition, MainReadings, WeatherSnapshot, Wind},
    provider::{FetchError, WeatherProvider},
};

pub(crate) fn sample_snapshot(temp: f64, description: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        name: Some("Sample".into()),
        dt: Some(1_700_000_000),
        main: MainReadings { temp, humidity: 55.0 },
        wind: Wind { speed: 3.6 },
        weather: vec![Condition { description: description.into() }],
    }
}

#[derive(Debug)]
enum Behaviour {
    Return(WeatherSnapshot),
    Fail,
    Panic,
    Pending,
}

#[derive(Debug)]
pub(crate) struct FakeProvider {
    behaviour: Behaviour,
    calls: Mutex<Vec<String>>,
    cancelled: Notify,
}

impl FakeProvider {
    fn with(behaviour: Behaviour) -> Arc<Self> {
        Arc::new(Self {
            behaviour,
            calls: Mutex::new(Vec::new()),
            cancelled: Notify::new(),
        })
    }

    pub(crate) fn returning(snapshot: WeatherSnapshot) -> Arc<Self> {
        Self::with(Behaviour::Return(snapshot))
    }

    pub(crate) fn failing() -> Arc<Self> {
        Self::with(Behaviour::Fail)
    }

    pub(crate) fn panicking() -> Arc<Self> {
        Self::with(Behaviour::Panic)
    }

    /// Never answers; signals [`Self::cancelled`] when the request is dropped.
    pub(crate) fn pending() -> Arc<Self> {
        Self::with(Behaviour::Pending)
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) async fn cancelled(&self) {
        self.cancelled.notified().await;
    }
}

struct NotifyOnDrop<'a>(&'a Notify);

impl Drop for NotifyOnDrop<'_> {
    fn drop(&mut self) {
        self.0.notify_one();
    }
}

#[async_trait]
impl WeatherProvider for FakeProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        self.calls.lock().unwrap().push(city.to_string());

        match &self.behaviour {
            Behaviour::Return(snapshot) => Ok(snapshot.clone()),
            Behaviour::Fail => Err(FetchError::Status {
                status: StatusCode::NOT_FOUND,
                body: r#"{"cod":"404","message":"city not found"}"#.into(),
            }),
            Behaviour::Panic => panic!("provider blew up while handling the response"),
            Behaviour::Pending => {
                let _guard = NotifyOnDrop(&self.cancelled);
                std::future::pending::<()>().await;
                unreachable!("pending future never resolves")
            }
        }
    }
}
