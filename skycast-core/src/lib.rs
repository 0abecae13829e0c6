//! Core library for the `skycast` weather lookup.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider and its response model
//! - The route table and the two screens (city input, weather output)
//! - The app shell tying router and screens together
//!
//! It is used by `skycast-cli`, but the screens carry no terminal I/O and can
//! be driven by any front end.

pub mod app;
pub mod config;
pub mod model;
pub mod provider;
pub mod router;
pub mod screen;

#[cfg(test)]
mod test_support;

pub use app::{App, Screen};
pub use config::Config;
pub use model::{NavigationState, Readings, Units, WeatherSnapshot};
pub use provider::{FetchError, WeatherProvider, provider_from_config};
pub use router::{Navigation, Route, Router};
