//! The two screens and their local view state.
//!
//! Screens hold no shared state. Each one is created when its route is
//! mounted and dropped when the app navigates away.

pub mod input;
pub mod output;

pub use input::CityInput;
pub use output::{ViewState, WeatherOutput};
