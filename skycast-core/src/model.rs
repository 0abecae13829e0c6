use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit system requested from the provider.
///
/// The same value decides how `main.temp` and `wind.speed` in the response
/// are interpreted, so the request and the conversions can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Kelvin, metres per second.
    #[default]
    Standard,
    /// Celsius, metres per second.
    Metric,
    /// Fahrenheit, miles per hour.
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Standard => "standard",
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Standard, Units::Metric, Units::Imperial]
    }

    pub fn wind_speed_label(&self) -> &'static str {
        match self {
            Units::Standard | Units::Metric => "m/s",
            Units::Imperial => "mph",
        }
    }

    /// Convert a temperature reported in these units to Celsius.
    pub fn to_celsius(&self, reported: f64) -> f64 {
        match self {
            Units::Standard => reported - 273.15,
            Units::Metric => reported,
            Units::Imperial => (reported - 32.0) * 5.0 / 9.0,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "standard" | "kelvin" => Ok(Units::Standard),
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(anyhow::anyhow!(
                "Unknown units '{value}'. Supported units: standard, metric, imperial."
            )),
        }
    }
}

/// Payload carried by a navigation to the weather route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub user_city: String,
}

/// Current conditions for one city as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dt: Option<i64>,
    pub main: MainReadings,
    pub wind: Wind,
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub description: String,
}

impl WeatherSnapshot {
    /// Description of the first reported condition.
    pub fn condition(&self) -> Option<&str> {
        self.weather.first().map(|w| w.description.as_str())
    }

    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        self.dt.and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
    }
}

/// Display values derived from a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Readings {
    pub celsius: String,
    pub fahrenheit: String,
    pub humidity: String,
    pub wind_speed: String,
    pub wind_speed_unit: &'static str,
    pub condition: String,
    pub location_name: Option<String>,
    pub observed_at: Option<DateTime<Utc>>,
}

impl Readings {
    pub fn derive(snapshot: &WeatherSnapshot, units: Units) -> Self {
        let celsius = units.to_celsius(snapshot.main.temp);
        let fahrenheit = celsius * 9.0 / 5.0 + 32.0;

        Self {
            celsius: format!("{celsius:.2}"),
            fahrenheit: format!("{fahrenheit:.2}"),
            humidity: snapshot.main.humidity.to_string(),
            wind_speed: snapshot.wind.speed.to_string(),
            wind_speed_unit: units.wind_speed_label(),
            condition: snapshot.condition().unwrap_or_default().to_string(),
            location_name: snapshot.name.clone(),
            observed_at: snapshot.observed_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(temp: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            name: Some("London".into()),
            dt: Some(1_700_000_000),
            main: MainReadings { temp, humidity: 81.0 },
            wind: Wind { speed: 4.1 },
            weather: vec![Condition { description: "clear sky".into() }],
        }
    }

    #[test]
    fn kelvin_is_converted_to_celsius_and_fahrenheit() {
        let readings = Readings::derive(&snapshot(300.0), Units::Standard);

        assert_eq!(readings.celsius, "26.85");
        assert_eq!(readings.fahrenheit, "80.33");
    }

    #[test]
    fn metric_temperature_is_used_as_celsius() {
        let readings = Readings::derive(&snapshot(20.0), Units::Metric);

        assert_eq!(readings.celsius, "20.00");
        assert_eq!(readings.fahrenheit, "68.00");
    }

    #[test]
    fn imperial_temperature_is_converted_back_to_celsius() {
        let readings = Readings::derive(&snapshot(212.0), Units::Imperial);

        assert_eq!(readings.celsius, "100.00");
        assert_eq!(readings.fahrenheit, "212.00");
        assert_eq!(readings.wind_speed_unit, "mph");
    }

    #[test]
    fn humidity_and_wind_render_like_the_raw_numbers() {
        let readings = Readings::derive(&snapshot(300.0), Units::Standard);

        assert_eq!(readings.humidity, "81");
        assert_eq!(readings.wind_speed, "4.1");
        assert_eq!(readings.condition, "clear sky");
        assert_eq!(readings.location_name.as_deref(), Some("London"));
        assert!(readings.observed_at.is_some());
    }

    #[test]
    fn snapshot_parses_minimal_provider_body() {
        let body = r#"{
            "main": {"temp": 300, "humidity": 40},
            "wind": {"speed": 2.5},
            "weather": [{"description": "clear sky", "main": "Clear"}],
            "cod": 200
        }"#;

        let parsed: WeatherSnapshot = serde_json::from_str(body).expect("body should parse");

        assert_eq!(parsed.condition(), Some("clear sky"));
        assert_eq!(parsed.main.temp, 300.0);
        assert!(parsed.name.is_none());
        assert!(parsed.observed_at().is_none());
    }

    #[test]
    fn units_parse_case_insensitively() {
        for units in Units::all() {
            let parsed = Units::try_from(units.as_str().to_uppercase().as_str())
                .expect("known units should parse");
            assert_eq!(*units, parsed);
        }

        let err = Units::try_from("rankine").unwrap_err();
        assert!(err.to_string().contains("Unknown units"));
    }
}
