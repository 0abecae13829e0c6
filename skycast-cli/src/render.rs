//! Plain-text rendering of the two screens.

use skycast_core::{
    Readings,
    screen::{
        CityInput, ViewState,
        input::{REQUIRED_MESSAGE, TITLE},
        output::{LOADING_MESSAGE, UNAVAILABLE_MESSAGE},
    },
};

pub fn city_input(form: &CityInput) -> String {
    let mut out = format!("\n{TITLE}\n");
    if form.has_error() {
        out.push_str(REQUIRED_MESSAGE);
        out.push('\n');
    }
    out
}

pub fn weather(city: &str, state: &ViewState) -> String {
    match state {
        ViewState::Loading => LOADING_MESSAGE.to_string(),
        ViewState::Unavailable => UNAVAILABLE_MESSAGE.to_string(),
        ViewState::Ready { readings, .. } => card(city, readings),
    }
}

fn card(city: &str, readings: &Readings) -> String {
    let mut out = format!("\nWeather in {city}\n\n");

    out.push_str(&format!(
        "  Temperature: {} °C / {} °F\n",
        readings.celsius, readings.fahrenheit
    ));
    out.push_str(&format!("  Humidity: {} %\n", readings.humidity));
    out.push_str(&format!(
        "  Wind Speed: {} {}\n",
        readings.wind_speed, readings.wind_speed_unit
    ));
    out.push_str(&format!("  Condition: {}\n", readings.condition));

    if let Some(name) = &readings.location_name {
        out.push_str(&format!("  Location: {name}\n"));
    }
    if let Some(observed) = readings.observed_at {
        out.push_str(&format!("  Observed: {}\n", observed.format("%Y-%m-%d %H:%M UTC")));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_core::{
        Units, WeatherSnapshot,
        model::{Condition, MainReadings, Wind},
    };

    fn ready(temp: f64, units: Units) -> ViewState {
        let snapshot = WeatherSnapshot {
            name: None,
            dt: None,
            main: MainReadings { temp, humidity: 70.0 },
            wind: Wind { speed: 5.5 },
            weather: vec![Condition { description: "clear sky".into() }],
        };
        let readings = Readings::derive(&snapshot, units);
        ViewState::Ready { snapshot, readings }
    }

    #[test]
    fn input_shows_error_only_after_failed_submit() {
        let mut form = CityInput::new();
        assert!(!city_input(&form).contains(REQUIRED_MESSAGE));

        form.submit();
        let out = city_input(&form);
        assert!(out.contains(TITLE));
        assert!(out.contains("City name is required!"));
    }

    #[test]
    fn ready_card_lists_all_readings() {
        let out = weather("Chennai", &ready(300.0, Units::Standard));

        assert!(out.contains("Weather in Chennai"));
        assert!(out.contains("Temperature: 26.85 °C / 80.33 °F"));
        assert!(out.contains("Humidity: 70 %"));
        assert!(out.contains("Wind Speed: 5.5 m/s"));
        assert!(out.contains("Condition: clear sky\n"));
        assert!(!out.contains("Observed"));
    }

    #[test]
    fn imperial_card_uses_mph() {
        let out = weather("Denver", &ready(50.0, Units::Imperial));

        assert!(out.contains("Wind Speed: 5.5 mph"));
        assert!(out.contains("Temperature: 10.00 °C / 50.00 °F"));
    }

    #[test]
    fn placeholders_for_loading_and_unavailable() {
        assert_eq!(weather("Oslo", &ViewState::Loading), "Loading weather data...");
        assert_eq!(weather("Oslo", &ViewState::Unavailable), "Weather info not available.");
    }
}
