//! Driven port for upstream weather providers.

use async_trait::async_trait;

use crate::domain::WeatherReport;

use super::define_port_error;

define_port_error! {
    /// Failures raised while fetching current weather.
    pub enum WeatherSourceError {
        /// The request could not be sent or the response not read.
        Transport { message: String } => "weather transport failed: {message}",
        /// The provider did not answer within the configured timeout.
        Timeout { message: String } => "weather request timed out: {message}",
        /// The provider answered with a non-success status.
        Status { status: u16, message: String } => "weather provider returned {status}: {message}",
        /// The payload did not have the expected shape.
        Decode { message: String } => "weather payload invalid: {message}",
    }
}

/// Source of current weather conditions.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch current conditions for `city` (provider query syntax, e.g. `Hamburg,de`).
    async fn fetch_current(&self, city: &str) -> Result<WeatherReport, WeatherSourceError>;
}
