//! Driving port for person reads.
//!
//! Inbound adapters use this port to read persons without importing
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, Greeting, Person, PersonId};

/// Domain use-case port for listing, fetching, and greeting persons.
#[async_trait]
pub trait PersonsQuery: Send + Sync {
    /// Every person, ordered by last name then first name.
    async fn list_persons(&self) -> Result<Vec<Person>, Error>;

    /// One person by identifier.
    async fn get_person(&self, id: PersonId) -> Result<Person, Error>;

    /// Greet whoever answers to `last_name`.
    ///
    /// Never fails: lookup problems degrade to [`Greeting::Stranger`].
    async fn greet(&self, last_name: &str) -> Greeting;
}
