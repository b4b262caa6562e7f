//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};
use async_trait::async_trait;

use crate::domain::PersonService;
use crate::domain::ports::{PersonRepository, WeatherQuery};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use crate::outbound::in_memory::InMemoryPersonRepository;

/// Weather query answering with a canned summary.
pub struct FixedWeather(pub Option<String>);

#[async_trait]
impl WeatherQuery for FixedWeather {
    async fn summary(&self) -> Option<String> {
        self.0.clone()
    }
}

/// HTTP state over `repo` with no weather summary available.
pub fn state_with_repo<R>(repo: Arc<R>) -> HttpState
where
    R: PersonRepository + 'static,
{
    let service = Arc::new(PersonService::new(repo));
    HttpState::new(service.clone(), service, Arc::new(FixedWeather(None)))
}

/// HTTP state over a fresh in-memory store.
pub fn in_memory_state() -> HttpState {
    state_with_repo(Arc::new(InMemoryPersonRepository::new()))
}

/// Full API wired the way the server wires it.
pub fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(super::configure)
}
