//! In-memory `PersonRepository` implementation.
//!
//! Records live in a mutex-guarded map keyed by identifier. Identifiers are
//! issued from a monotonically increasing counter and never reused, even
//! after deletes.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::{Clock, DefaultClock};

use crate::domain::ports::{PersonRepository, PersonRepositoryError};
use crate::domain::{Person, PersonDraft, PersonId};

#[derive(Default)]
struct State {
    persons: BTreeMap<PersonId, Person>,
    last_id: i64,
}

/// Person repository holding records in process memory.
pub struct InMemoryPersonRepository {
    state: Mutex<State>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryPersonRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPersonRepository {
    /// Create an empty repository stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Create an empty repository stamped by `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(State::default()),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, PersonRepositoryError> {
        self.state
            .lock()
            .map_err(|_| PersonRepositoryError::query("in-memory person store lock poisoned"))
    }

    /// Next `updated_at` value: the clock reading, bumped past `previous` if
    /// the clock has not moved on.
    fn next_update_stamp(&self, previous: DateTime<Utc>) -> DateTime<Utc> {
        let now = self.clock.utc();
        now.max(previous + TimeDelta::microseconds(1))
    }
}

fn ordered<'a>(persons: impl Iterator<Item = &'a Person>) -> Vec<Person> {
    let mut sorted: Vec<&Person> = persons.collect();
    sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()).then(a.id().cmp(&b.id())));
    sorted.into_iter().cloned().collect()
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn insert(&self, draft: &PersonDraft) -> Result<Person, PersonRepositoryError> {
        let now = self.clock.utc();
        let mut state = self.lock()?;
        state.last_id += 1;
        let id = PersonId::new(state.last_id);
        let person = Person::new(id, draft.clone(), now, now);
        state.persons.insert(id, person.clone());
        Ok(person)
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        Ok(self.lock()?.persons.get(&id).cloned())
    }

    async fn find_first_by_last_name(
        &self,
        last_name: &str,
    ) -> Result<Option<Person>, PersonRepositoryError> {
        let state = self.lock()?;
        let matches = state
            .persons
            .values()
            .filter(|person| person.last_name().as_ref() == last_name);
        Ok(ordered(matches).into_iter().next())
    }

    async fn list_ordered(&self) -> Result<Vec<Person>, PersonRepositoryError> {
        Ok(ordered(self.lock()?.persons.values()))
    }

    async fn update(
        &self,
        id: PersonId,
        draft: &PersonDraft,
    ) -> Result<Person, PersonRepositoryError> {
        let mut state = self.lock()?;
        let existing = state
            .persons
            .get(&id)
            .ok_or_else(|| PersonRepositoryError::not_found(id))?;
        let updated_at = self.next_update_stamp(existing.updated_at());
        let updated = Person::new(id, draft.clone(), existing.created_at(), updated_at);
        state.persons.insert(id, updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: PersonId) -> Result<(), PersonRepositoryError> {
        self.lock()?
            .persons
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| PersonRepositoryError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    //! Behavioural coverage for the in-memory store contract.

    use super::*;
    use chrono::{Local, TimeZone};
    use rstest::{fixture, rstest};

    /// Clock frozen at a single instant.
    struct FrozenClock(DateTime<Utc>);

    impl Clock for FrozenClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn draft(first_name: &str, last_name: &str) -> PersonDraft {
        PersonDraft::try_from_parts(Some(first_name), Some(last_name)).expect("valid draft")
    }

    #[fixture]
    fn frozen_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[fixture]
    fn repo(frozen_at: DateTime<Utc>) -> InMemoryPersonRepository {
        InMemoryPersonRepository::with_clock(Arc::new(FrozenClock(frozen_at)))
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_fresh_ids_and_equal_timestamps(
        repo: InMemoryPersonRepository,
        frozen_at: DateTime<Utc>,
    ) {
        let first = repo.insert(&draft("Anna", "Smith")).await.expect("insert");
        let second = repo.insert(&draft("Anna", "Smith")).await.expect("insert");

        assert_ne!(first.id(), second.id());
        assert_ne!(first, second);
        assert_eq!(first.created_at(), frozen_at);
        assert_eq!(first.updated_at(), first.created_at());
    }

    #[rstest]
    #[tokio::test]
    async fn list_orders_by_last_then_first_name(repo: InMemoryPersonRepository) {
        for (first, last) in [("Zoe", "Baker"), ("Anna", "Smith"), ("Adam", "Baker")] {
            repo.insert(&draft(first, last)).await.expect("insert");
        }

        let listed = repo.list_ordered().await.expect("list");
        let names: Vec<String> = listed.iter().map(ToString::to_string).collect();

        assert_eq!(names, vec!["Adam Baker", "Zoe Baker", "Anna Smith"]);
    }

    #[rstest]
    #[tokio::test]
    async fn find_first_by_last_name_uses_listing_order(repo: InMemoryPersonRepository) {
        repo.insert(&draft("Zoe", "Smith")).await.expect("insert");
        repo.insert(&draft("Anna", "Smith")).await.expect("insert");

        let found = repo
            .find_first_by_last_name("Smith")
            .await
            .expect("lookup")
            .expect("match present");

        assert_eq!(found.first_name().as_ref(), "Anna");
        assert!(
            repo.find_first_by_last_name("smith")
                .await
                .expect("lookup")
                .is_none(),
            "last name match is exact"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn update_keeps_identity_and_advances_updated_at(repo: InMemoryPersonRepository) {
        let created = repo.insert(&draft("Anna", "Smith")).await.expect("insert");

        let first = repo
            .update(created.id(), &draft("Edited", "Person"))
            .await
            .expect("update");
        let second = repo
            .update(created.id(), &draft("Again", "Person"))
            .await
            .expect("update");

        assert_eq!(first.id(), created.id());
        assert_eq!(first.created_at(), created.created_at());
        assert!(first.updated_at() > created.updated_at());
        assert!(second.updated_at() > first.updated_at());
        assert_eq!(second.first_name().as_ref(), "Again");
    }

    #[rstest]
    #[tokio::test]
    async fn mutations_on_unknown_ids_are_not_found(repo: InMemoryPersonRepository) {
        let missing = PersonId::new(42);

        let update = repo.update(missing, &draft("A", "B")).await;
        let delete = repo.delete(missing).await;

        assert_eq!(update, Err(PersonRepositoryError::not_found(missing)));
        assert_eq!(delete, Err(PersonRepositoryError::not_found(missing)));
    }

    #[rstest]
    #[tokio::test]
    async fn deleted_ids_are_not_reissued(repo: InMemoryPersonRepository) {
        let first = repo.insert(&draft("Anna", "Smith")).await.expect("insert");
        repo.delete(first.id()).await.expect("delete");

        let second = repo.insert(&draft("Anna", "Smith")).await.expect("insert");

        assert!(second.id() > first.id());
        assert!(repo.find_by_id(first.id()).await.expect("lookup").is_none());
    }
}
