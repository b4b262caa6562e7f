//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, then `HELLO_*` environment variables, then the
//! defaults below.

use std::net::SocketAddr;
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upstream used when `HELLO_WEATHER_API_URL` is unset.
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org";
const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 8080);
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Whether embedded migrations are applied before the server starts.
///
/// Read from `HELLO_MIGRATIONS` or `--migrations` as `run` or `skip`; unset
/// means `run`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MigrationMode {
    #[default]
    Run,
    Skip,
}

/// Raised when a migration mode is neither `run` nor `skip`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown migration mode `{0}`; expected `run` or `skip`")]
pub struct UnknownMigrationMode(String);

impl FromStr for MigrationMode {
    type Err = UnknownMigrationMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "run" => Ok(Self::Run),
            "skip" => Ok(Self::Skip),
            _ => Err(UnknownMigrationMode(value.to_owned())),
        }
    }
}

/// Process configuration.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HELLO")]
pub struct AppSettings {
    /// PostgreSQL URL. Without it persons live in process memory.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Apply embedded migrations before serving (`run`, the default, or
    /// `skip`).
    pub migrations: Option<MigrationMode>,
    /// OpenWeatherMap API key. Without it the weather endpoint always falls
    /// back.
    pub weather_api_key: Option<String>,
    /// OpenWeatherMap base URL.
    pub weather_api_url: Option<String>,
    /// Listener address.
    pub bind_addr: Option<SocketAddr>,
}

impl AppSettings {
    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        non_blank(self.database_url.as_deref())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
            .max(1)
    }

    pub fn run_migrations(&self) -> bool {
        self.migrations.unwrap_or_default() == MigrationMode::Run
    }

    /// Configured weather API key, ignoring blank values.
    pub fn weather_api_key(&self) -> Option<&str> {
        non_blank(self.weather_api_key.as_deref())
    }

    pub fn weather_api_url(&self) -> &str {
        non_blank(self.weather_api_url.as_deref()).unwrap_or(DEFAULT_WEATHER_API_URL)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
