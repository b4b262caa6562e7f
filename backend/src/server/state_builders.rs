//! Builders for the HTTP state ports.

use std::sync::Arc;

use actix_web::web;

use hello_backend::domain::ports::{
    PersonRepository, PersonsCommand, PersonsQuery, WeatherQuery,
};
use hello_backend::domain::{PersonService, WeatherSummaryService};
use hello_backend::inbound::http::state::HttpState;
use hello_backend::outbound::in_memory::InMemoryPersonRepository;
use hello_backend::outbound::persistence::DieselPersonRepository;
use hello_backend::outbound::weather::OpenWeatherHttpSource;
use tracing::{info, warn};

use super::{ServerConfig, WeatherConfig};

fn person_ports<R>(repo: Arc<R>) -> (Arc<dyn PersonsCommand>, Arc<dyn PersonsQuery>)
where
    R: PersonRepository + 'static,
{
    let service = Arc::new(PersonService::new(repo));
    (service.clone(), service)
}

/// Weather query backed by OpenWeatherMap when a key is configured.
///
/// # Errors
/// Returns [`std::io::Error`] if the HTTP client cannot be built.
fn build_weather_query(config: &WeatherConfig) -> std::io::Result<Arc<dyn WeatherQuery>> {
    let Some(api_key) = config.api_key.as_deref() else {
        warn!("weather API key not configured; weather summaries will fall back");
        return Ok(Arc::new(WeatherSummaryService::unconfigured()));
    };
    let source = OpenWeatherHttpSource::new(&config.base_url, api_key, config.timeout)
        .map_err(std::io::Error::other)?;
    Ok(Arc::new(WeatherSummaryService::new(Arc::new(source))))
}

/// Build the handler state, using PostgreSQL when a pool is configured and the
/// in-memory store otherwise.
///
/// # Errors
/// Returns [`std::io::Error`] if an outbound adapter cannot be constructed.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let (persons, persons_query) = match &config.db_pool {
        Some(pool) => {
            info!("persons stored in PostgreSQL");
            person_ports(Arc::new(DieselPersonRepository::new(pool.clone())))
        }
        None => {
            warn!("no database configured; persons are kept in memory and lost on restart");
            person_ports(Arc::new(InMemoryPersonRepository::new()))
        }
    };
    let weather = build_weather_query(&config.weather)?;
    Ok(web::Data::new(HttpState::new(persons, persons_query, weather)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hello_backend::domain::PersonDraft;
    use url::Url;

    fn weather_config() -> WeatherConfig {
        WeatherConfig::new(Url::parse("http://127.0.0.1:9").expect("valid URL"))
    }

    #[tokio::test]
    async fn falls_back_to_in_memory_store_without_pool() {
        let config = ServerConfig::new(
            "127.0.0.1:0".parse().expect("valid address"),
            weather_config(),
        );
        let state = build_http_state(&config).expect("state builds");

        let draft = PersonDraft::try_from_parts(Some("Anna"), Some("Smith")).expect("draft");
        let created = state.persons.create_person(draft).await.expect("create");
        let listed = state.persons_query.list_persons().await.expect("list");

        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn weather_without_key_has_no_summary() {
        let query = build_weather_query(&weather_config()).expect("query builds");
        assert_eq!(query.summary().await, None);
    }

    #[tokio::test]
    async fn weather_with_key_builds_http_source() {
        let config = weather_config().with_api_key("secret");
        assert!(build_weather_query(&config).is_ok());
    }
}
