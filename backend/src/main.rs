//! Backend entry-point: loads settings, prepares storage, and serves the API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use hello_backend::inbound::http::health::HealthState;
use hello_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use hello_backend::settings::AppSettings;
use server::{ServerConfig, WeatherConfig, create_server};

/// Connect to PostgreSQL, applying migrations first when enabled.
async fn connect_database(settings: &AppSettings, database_url: &str) -> io::Result<DbPool> {
    if settings.run_migrations() {
        run_pending_migrations(database_url)
            .await
            .map_err(io::Error::other)?;
    }
    let pool_config =
        PoolConfig::new(database_url).with_max_connections(settings.db_max_connections());
    DbPool::new(pool_config).await.map_err(io::Error::other)
}

fn weather_config(settings: &AppSettings) -> io::Result<WeatherConfig> {
    let base_url = Url::parse(settings.weather_api_url()).map_err(|err| {
        io::Error::other(format!(
            "invalid weather API URL {}: {err}",
            settings.weather_api_url()
        ))
    })?;
    let config = WeatherConfig::new(base_url);
    Ok(match settings.weather_api_key() {
        Some(key) => config.with_api_key(key),
        None => config,
    })
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;

    let mut config = ServerConfig::new(settings.bind_addr(), weather_config(&settings)?);
    if let Some(database_url) = settings.database_url() {
        config = config.with_db_pool(connect_database(&settings, database_url).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(bind_addr = %settings.bind_addr(), "hello backend listening");
    server.await
}
