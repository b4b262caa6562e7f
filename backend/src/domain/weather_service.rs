//! Weather summary domain service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::domain::WEATHER_CITY;
use crate::domain::ports::{WeatherQuery, WeatherSource};

/// Produces the weather summary sentence from an optional upstream source.
///
/// The source is absent when no provider API key is configured; in that case
/// every summary request yields `None` without touching the network.
#[derive(Clone)]
pub struct WeatherSummaryService {
    source: Option<Arc<dyn WeatherSource>>,
    city: String,
}

impl WeatherSummaryService {
    /// Summaries backed by a configured weather source.
    pub fn new(source: Arc<dyn WeatherSource>) -> Self {
        Self {
            source: Some(source),
            city: WEATHER_CITY.to_owned(),
        }
    }

    /// Summaries when no provider credentials are available.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self {
            source: None,
            city: WEATHER_CITY.to_owned(),
        }
    }
}

#[async_trait]
impl WeatherQuery for WeatherSummaryService {
    async fn summary(&self) -> Option<String> {
        let Some(source) = self.source.as_ref() else {
            warn!("weather API key not configured");
            return None;
        };

        match source.fetch_current(&self.city).await {
            Ok(report) => Some(report.summary()),
            Err(err) => {
                error!(error = %err, city = %self.city, "failed to fetch weather data");
                None
            }
        }
    }
}
