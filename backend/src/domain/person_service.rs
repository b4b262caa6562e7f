//! Person domain service.
//!
//! Implements both person driving ports on top of a [`PersonRepository`],
//! translating persistence failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{
    PersonRepository, PersonRepositoryError, PersonsCommand, PersonsQuery,
};
use crate::domain::{Error, Greeting, Person, PersonDraft, PersonId};

fn map_repository_error(error: PersonRepositoryError) -> Error {
    match error {
        PersonRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("person repository unavailable: {message}"))
        }
        PersonRepositoryError::Query { message } => {
            Error::internal(format!("person repository error: {message}"))
        }
        PersonRepositoryError::NotFound { id } => Error::not_found(format!("person {id} not found")),
    }
}

/// Person service implementing [`PersonsCommand`] and [`PersonsQuery`].
#[derive(Clone)]
pub struct PersonService<R> {
    person_repo: Arc<R>,
}

impl<R> PersonService<R> {
    /// Create a new service over the person repository.
    pub fn new(person_repo: Arc<R>) -> Self {
        Self { person_repo }
    }
}

#[async_trait]
impl<R> PersonsCommand for PersonService<R>
where
    R: PersonRepository,
{
    async fn create_person(&self, draft: PersonDraft) -> Result<Person, Error> {
        self.person_repo
            .insert(&draft)
            .await
            .map_err(map_repository_error)
    }

    async fn update_person(&self, id: PersonId, draft: PersonDraft) -> Result<Person, Error> {
        self.person_repo
            .update(id, &draft)
            .await
            .map_err(map_repository_error)
    }

    async fn delete_person(&self, id: PersonId) -> Result<(), Error> {
        self.person_repo
            .delete(id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> PersonsQuery for PersonService<R>
where
    R: PersonRepository,
{
    async fn list_persons(&self) -> Result<Vec<Person>, Error> {
        self.person_repo
            .list_ordered()
            .await
            .map_err(map_repository_error)
    }

    async fn get_person(&self, id: PersonId) -> Result<Person, Error> {
        self.person_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("person {id} not found")))
    }

    async fn greet(&self, last_name: &str) -> Greeting {
        match self.person_repo.find_first_by_last_name(last_name).await {
            Ok(Some(person)) => Greeting::for_person(&person),
            Ok(None) => Greeting::stranger(last_name),
            Err(error) => {
                // Callers only ever see the stranger greeting; keep the cause in the logs.
                warn!(%error, last_name, "greeting lookup failed");
                Greeting::stranger(last_name)
            }
        }
    }
}

#[cfg(test)]
#[path = "person_service_tests.rs"]
mod tests;
