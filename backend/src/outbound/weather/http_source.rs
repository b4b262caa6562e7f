//! Reqwest-backed OpenWeatherMap source adapter.
//!
//! Owns transport details only: request construction, timeout and HTTP error
//! mapping, and JSON decoding into a [`WeatherReport`]. The API key travels as
//! a query parameter, so transport errors are stripped of their URL before
//! they are reported.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::CurrentWeatherDto;
use crate::domain::WeatherReport;
use crate::domain::ports::{WeatherSource, WeatherSourceError};

const CURRENT_WEATHER_PATH: &str = "data/2.5/weather";

/// Errors raised while constructing an [`OpenWeatherHttpSource`].
#[derive(Debug, thiserror::Error)]
pub enum OpenWeatherSetupError {
    /// The base URL cannot be extended with the weather endpoint path.
    #[error("invalid weather API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
    /// The HTTP client could not be built.
    #[error("failed to build weather HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Weather source that queries the OpenWeatherMap current-weather endpoint.
pub struct OpenWeatherHttpSource {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl OpenWeatherHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint URL cannot be derived from
    /// `base_url` or the reqwest client cannot be constructed.
    pub fn new(
        base_url: &Url,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, OpenWeatherSetupError> {
        let endpoint = current_weather_endpoint(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherHttpSource {
    async fn fetch_current(&self, city: &str) -> Result<WeatherReport, WeatherSourceError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_report(body.as_ref())
    }
}

/// Append the endpoint path to `base`, keeping any path prefix it carries.
fn current_weather_endpoint(base: &Url) -> Result<Url, url::ParseError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(CURRENT_WEATHER_PATH)
}

fn parse_report(body: &[u8]) -> Result<WeatherReport, WeatherSourceError> {
    let decoded: CurrentWeatherDto = serde_json::from_slice(body).map_err(|error| {
        WeatherSourceError::decode(format!("invalid weather JSON payload: {error}"))
    })?;
    decoded
        .into_domain_report()
        .map_err(WeatherSourceError::decode)
}

fn map_transport_error(error: reqwest::Error) -> WeatherSourceError {
    let timed_out = error.is_timeout();
    let message = error.without_url().to_string();
    if timed_out {
        WeatherSourceError::timeout(message)
    } else {
        WeatherSourceError::transport(message)
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> WeatherSourceError {
    WeatherSourceError::status(status.as_u16(), body_preview(body))
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
