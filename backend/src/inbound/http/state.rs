//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{PersonsCommand, PersonsQuery, WeatherQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub persons: Arc<dyn PersonsCommand>,
    pub persons_query: Arc<dyn PersonsQuery>,
    pub weather: Arc<dyn WeatherQuery>,
}

impl HttpState {
    /// Bundle the driving ports used by the handlers.
    pub fn new(
        persons: Arc<dyn PersonsCommand>,
        persons_query: Arc<dyn PersonsQuery>,
        weather: Arc<dyn WeatherQuery>,
    ) -> Self {
        Self {
            persons,
            persons_query,
            weather,
        }
    }
}
