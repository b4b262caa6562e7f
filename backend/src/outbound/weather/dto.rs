//! DTOs for decoding OpenWeatherMap current-weather responses.
//!
//! Only the fields the summary needs are decoded; everything else in the
//! payload is ignored.

use serde::Deserialize;
use serde_json::Number;

use crate::domain::WeatherReport;

#[derive(Debug, Deserialize)]
pub(super) struct CurrentWeatherDto {
    pub(super) name: String,
    pub(super) main: MainDto,
    pub(super) weather: Vec<ConditionDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MainDto {
    pub(super) temp: Number,
}

#[derive(Debug, Deserialize)]
pub(super) struct ConditionDto {
    pub(super) description: String,
}

impl CurrentWeatherDto {
    pub(super) fn into_domain_report(self) -> Result<WeatherReport, String> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| "weather conditions list is empty".to_owned())?;
        Ok(WeatherReport::new(
            self.name,
            condition.description,
            self.main.temp,
        ))
    }
}
