//! App shell: the router plus whichever screen is currently mounted.

use std::sync::Arc;

use crate::{
    model::Units,
    provider::WeatherProvider,
    router::{Navigation, Route, Router},
    screen::{CityInput, WeatherOutput},
};

#[derive(Debug)]
pub enum Screen {
    CityInput(CityInput),
    Weather(WeatherOutput),
}

#[derive(Debug)]
pub struct App {
    router: Router,
    screen: Screen,
    provider: Arc<dyn WeatherProvider>,
    units: Units,
}

impl App {
    /// Start on the input screen.
    pub fn new(provider: Arc<dyn WeatherProvider>, units: Units) -> Self {
        let mut router = Router::new();
        router.navigate(Navigation::home());

        Self {
            router,
            screen: Screen::CityInput(CityInput::new()),
            provider,
            units,
        }
    }

    /// Resolve a navigation and mount the resulting screen.
    ///
    /// The previous screen is dropped, which cancels any fetch it still has
    /// in flight. Mounting the weather screen spawns a task, so this must
    /// run inside a Tokio runtime.
    pub fn navigate(&mut self, nav: Navigation) -> &mut Screen {
        let route = self.router.navigate(nav);

        self.screen = match route {
            Route::CityInput => Screen::CityInput(CityInput::new()),
            Route::Weather { city } => Screen::Weather(WeatherOutput::mount(
                city,
                self.units,
                Arc::clone(&self.provider),
            )),
        };

        &mut self.screen
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn router(&self) -> &Router {
        &self.router
    }
}
