//! Driving port for the weather summary.

use async_trait::async_trait;

/// Domain use-case port producing a one-line weather summary.
#[async_trait]
pub trait WeatherQuery: Send + Sync {
    /// Summary sentence, or `None` when the weather could not be fetched.
    async fn summary(&self) -> Option<String>;
}
