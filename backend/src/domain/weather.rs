//! Current weather conditions as reported by an upstream provider.

use std::fmt;

use serde_json::Number;

/// City queried for the weather summary.
pub const WEATHER_CITY: &str = "Hamburg,de";

/// Current conditions for one city.
///
/// The temperature keeps the provider's JSON number so it renders exactly as
/// reported (`21.5` stays `21.5`, `21` stays `21`).
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    city: String,
    description: String,
    temperature_celsius: Number,
}

impl WeatherReport {
    /// Build a report from decoded provider fields.
    pub fn new(
        city: impl Into<String>,
        description: impl Into<String>,
        temperature_celsius: Number,
    ) -> Self {
        Self {
            city: city.into(),
            description: description.into(),
            temperature_celsius,
        }
    }

    /// One-line summary, e.g. `Weather in Hamburg: clear sky, 21.5°C`.
    #[must_use]
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weather in {}: {}, {}°C",
            self.city, self.description, self.temperature_celsius
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Number::from_f64(21.5), "Weather in Hamburg: clear sky, 21.5°C")]
    #[case(Some(Number::from(21)), "Weather in Hamburg: clear sky, 21°C")]
    #[case(Number::from_f64(-3.25), "Weather in Hamburg: clear sky, -3.25°C")]
    fn summary_renders_temperature_as_reported(
        #[case] temperature: Option<Number>,
        #[case] expected: &str,
    ) {
        let report = WeatherReport::new(
            "Hamburg",
            "clear sky",
            temperature.expect("finite temperature"),
        );
        assert_eq!(report.summary(), expected);
    }
}
