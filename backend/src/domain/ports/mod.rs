//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`PersonRepository`, `WeatherSource`) are implemented by
//! outbound adapters. Driving ports (`PersonsCommand`, `PersonsQuery`,
//! `WeatherQuery`) are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod person_repository;
mod persons_command;
mod persons_query;
mod weather_query;
mod weather_source;

pub use person_repository::{PersonRepository, PersonRepositoryError};
pub use persons_command::PersonsCommand;
pub use persons_query::PersonsQuery;
pub use weather_query::WeatherQuery;
pub use weather_source::{WeatherSource, WeatherSourceError};
