use tracing::debug;

use crate::{
    model::NavigationState,
    router::{Navigation, WEATHER_PATH},
};

pub const TITLE: &str = "SkyCast - Find My Weather";
pub const PLACEHOLDER: &str = "Enter city name";
pub const REQUIRED_MESSAGE: &str = "City name is required!";

/// Form with a single city field.
#[derive(Debug, Default, Clone)]
pub struct CityInput {
    entered_city: String,
    error: bool,
}

impl CityInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_entered_city(&mut self, value: impl Into<String>) {
        self.entered_city = value.into();
    }

    pub fn entered_city(&self) -> &str {
        &self.entered_city
    }

    /// Whether the "required" message should be shown.
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Submit the form.
    ///
    /// Blank input only raises the error flag. Anything else navigates to the
    /// weather route carrying the value exactly as typed.
    pub fn submit(&mut self) -> Option<Navigation> {
        if self.entered_city.trim().is_empty() {
            debug!("Rejected empty city name");
            self.error = true;
            return None;
        }

        self.error = false;
        Some(Navigation::with_state(
            WEATHER_PATH,
            NavigationState { user_city: self.entered_city.clone() },
        ))
    }
}
