//! HTTP server configuration objects.

use std::net::SocketAddr;
use std::time::Duration;

use hello_backend::outbound::persistence::DbPool;
use url::Url;

/// Request timeout for the upstream weather provider.
pub const WEATHER_TIMEOUT: Duration = Duration::from_secs(10);

/// Upstream weather provider settings.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub(crate) base_url: Url,
    pub(crate) api_key: Option<String>,
    pub(crate) timeout: Duration,
}

impl WeatherConfig {
    /// Provider at `base_url` with no API key.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_key: None,
            timeout: WEATHER_TIMEOUT,
        }
    }

    /// Attach the API key that enables upstream calls.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) weather: WeatherConfig,
}

impl ServerConfig {
    /// Server bound to `bind_addr` backed by the in-memory person store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, weather: WeatherConfig) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            weather,
        }
    }

    /// Attach a database connection pool; persons are then stored in
    /// PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
