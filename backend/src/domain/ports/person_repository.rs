//! Driven port for person persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Person, PersonDraft, PersonId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by person repository adapters.
    pub enum PersonRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "person repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "person repository query failed: {message}",
        /// No row exists for the identifier.
        NotFound { id: PersonId } => "person {id} not found",
    }
}

/// Durable storage of person records.
///
/// Implementations must list persons ordered by `(last_name, first_name)`
/// ascending and must reject updates and deletes of unknown identifiers with
/// [`PersonRepositoryError::NotFound`].
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Insert a new person, assigning its identifier and both timestamps.
    async fn insert(&self, draft: &PersonDraft) -> Result<Person, PersonRepositoryError>;

    /// Fetch a person by identifier.
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError>;

    /// First person with this exact last name under the listing order.
    async fn find_first_by_last_name(
        &self,
        last_name: &str,
    ) -> Result<Option<Person>, PersonRepositoryError>;

    /// All persons ordered by last name, then first name.
    async fn list_ordered(&self) -> Result<Vec<Person>, PersonRepositoryError>;

    /// Replace both names and refresh `updated_at`.
    async fn update(
        &self,
        id: PersonId,
        draft: &PersonDraft,
    ) -> Result<Person, PersonRepositoryError>;

    /// Hard-delete a person.
    async fn delete(&self, id: PersonId) -> Result<(), PersonRepositoryError>;
}
