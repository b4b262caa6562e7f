//! OpenWeatherMap outbound adapter.
//!
//! A thin HTTP implementation of the `WeatherSource` port.

mod dto;
mod http_source;

pub use http_source::{OpenWeatherHttpSource, OpenWeatherSetupError};
