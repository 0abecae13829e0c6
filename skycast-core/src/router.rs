//! Static route table for the two screens.
//!
//! A location is a path plus optional navigation state. The weather route
//! needs a city, taken from the state or from a `city` query parameter;
//! without one it redirects to the input route, so a resolved
//! [`Route::Weather`] always has a city to fetch.

use tracing::{debug, info};

use crate::model::NavigationState;

pub const INPUT_PATH: &str = "/";
pub const WEATHER_PATH: &str = "/weather";

/// A navigation request: where to go and what to carry there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub path: String,
    pub state: Option<NavigationState>,
}

impl Navigation {
    pub fn to(path: impl Into<String>) -> Self {
        Self { path: path.into(), state: None }
    }

    pub fn with_state(path: impl Into<String>, state: NavigationState) -> Self {
        Self { path: path.into(), state: Some(state) }
    }

    pub fn home() -> Self {
        Self::to(INPUT_PATH)
    }

    /// Link to the weather route with the city in the query string.
    pub fn weather_link(city: &str) -> Self {
        Self::to(format!("{WEATHER_PATH}?city={}", urlencoding::encode(city)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    CityInput,
    Weather { city: String },
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::CityInput => INPUT_PATH,
            Route::Weather { .. } => WEATHER_PATH,
        }
    }
}

/// Outcome of resolving a navigation against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(Route),
    Redirect(Navigation),
}

pub fn resolve(nav: &Navigation) -> Resolution {
    let (path, query) = match nav.path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (nav.path.as_str(), None),
    };

    match path {
        INPUT_PATH => Resolution::Matched(Route::CityInput),
        WEATHER_PATH => {
            let city = nav
                .state
                .as_ref()
                .map(|state| state.user_city.clone())
                .or_else(|| query.and_then(city_from_query))
                .filter(|city| !city.is_empty());

            match city {
                Some(city) => Resolution::Matched(Route::Weather { city }),
                None => Resolution::Redirect(Navigation::home()),
            }
        }
        _ => Resolution::Redirect(Navigation::home()),
    }
}

fn city_from_query(query: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "city")
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
}

/// Router holding the current route and the locations visited so far.
#[derive(Debug, Default)]
pub struct Router {
    history: Vec<String>,
    current: Option<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow a navigation, including any redirects, and return the final route.
    pub fn navigate(&mut self, nav: Navigation) -> Route {
        let mut nav = nav;
        loop {
            self.history.push(nav.path.clone());
            match resolve(&nav) {
                Resolution::Matched(route) => {
                    debug!(path = %nav.path, ?route, "Route matched");
                    self.current = Some(route.clone());
                    return route;
                }
                Resolution::Redirect(next) => {
                    info!(from = %nav.path, to = %next.path, "Redirecting");
                    nav = next;
                }
            }
        }
    }

    pub fn current(&self) -> Option<&Route> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}
