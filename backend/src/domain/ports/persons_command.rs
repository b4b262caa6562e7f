//! Driving port for person mutations.

use async_trait::async_trait;

use crate::domain::{Error, Person, PersonDraft, PersonId};

/// Domain use-case port for creating, updating, and deleting persons.
#[async_trait]
pub trait PersonsCommand: Send + Sync {
    /// Persist a new person.
    async fn create_person(&self, draft: PersonDraft) -> Result<Person, Error>;

    /// Replace the names of an existing person.
    async fn update_person(&self, id: PersonId, draft: PersonDraft) -> Result<Person, Error>;

    /// Remove a person permanently.
    async fn delete_person(&self, id: PersonId) -> Result<(), Error>;
}
