//! PostgreSQL-backed `PersonRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Timestamptz;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{PersonRepository, PersonRepositoryError};
use crate::domain::{Person, PersonDraft, PersonId, PersonName};

use super::models::{NewPersonRow, PersonNamesUpdate, PersonRow};
use super::pool::{DbPool, PoolError};
use super::schema::persons_person;

/// Strictly advancing modification time, even when two updates land within
/// the same transaction timestamp.
const NEXT_UPDATED_AT: &str = "GREATEST(now(), updated_at + interval '1 microsecond')";

/// Diesel-backed implementation of the `PersonRepository` port.
#[derive(Clone)]
pub struct DieselPersonRepository {
    pool: DbPool,
}

impl DieselPersonRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PersonRepositoryError {
    match error {
        PoolError::Checkout(message) | PoolError::Build(message) => {
            PersonRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> PersonRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => PersonRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => PersonRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PersonRepositoryError::connection("database connection error")
        }
        _ => PersonRepositoryError::query("database error"),
    }
}

/// Convert a database row into a domain person.
///
/// Stored names are re-validated; a row that violates the name rules is
/// reported as a query failure rather than surfaced to callers.
fn row_to_person(row: PersonRow) -> Result<Person, PersonRepositoryError> {
    let id = PersonId::new(row.id);
    let invalid = |err| PersonRepositoryError::query(format!("stored person {id} invalid: {err}"));
    let first_name = PersonName::new(row.first_name).map_err(invalid)?;
    let last_name = PersonName::new(row.last_name).map_err(invalid)?;
    Ok(Person::new(
        id,
        PersonDraft::new(first_name, last_name),
        row.created_at,
        row.updated_at,
    ))
}

fn rows_to_persons(rows: Vec<PersonRow>) -> Result<Vec<Person>, PersonRepositoryError> {
    rows.into_iter().map(row_to_person).collect()
}

#[async_trait]
impl PersonRepository for DieselPersonRepository {
    async fn insert(&self, draft: &PersonDraft) -> Result<Person, PersonRepositoryError> {
        let mut conn = self.pool.connection().await.map_err(map_pool_error)?;

        let new_row = NewPersonRow {
            first_name: draft.first_name().as_ref(),
            last_name: draft.last_name().as_ref(),
        };

        let row = diesel::insert_into(persons_person::table)
            .values(&new_row)
            .returning(PersonRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_person(row)
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        let mut conn = self.pool.connection().await.map_err(map_pool_error)?;

        let row = persons_person::table
            .find(id.get())
            .select(PersonRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_person).transpose()
    }

    async fn find_first_by_last_name(
        &self,
        last_name: &str,
    ) -> Result<Option<Person>, PersonRepositoryError> {
        let mut conn = self.pool.connection().await.map_err(map_pool_error)?;

        let row = persons_person::table
            .filter(persons_person::last_name.eq(last_name))
            .order((persons_person::first_name.asc(), persons_person::id.asc()))
            .select(PersonRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_person).transpose()
    }

    async fn list_ordered(&self) -> Result<Vec<Person>, PersonRepositoryError> {
        let mut conn = self.pool.connection().await.map_err(map_pool_error)?;

        let rows = persons_person::table
            .order((
                persons_person::last_name.asc(),
                persons_person::first_name.asc(),
                persons_person::id.asc(),
            ))
            .select(PersonRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_persons(rows)
    }

    async fn update(
        &self,
        id: PersonId,
        draft: &PersonDraft,
    ) -> Result<Person, PersonRepositoryError> {
        let mut conn = self.pool.connection().await.map_err(map_pool_error)?;

        let names = PersonNamesUpdate {
            first_name: draft.first_name().as_ref(),
            last_name: draft.last_name().as_ref(),
        };

        let row = diesel::update(persons_person::table.find(id.get()))
            .set((
                names,
                persons_person::updated_at.eq(sql::<Timestamptz>(NEXT_UPDATED_AT)),
            ))
            .returning(PersonRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        match row {
            Some(row) => row_to_person(row),
            None => Err(PersonRepositoryError::not_found(id)),
        }
    }

    async fn delete(&self, id: PersonId) -> Result<(), PersonRepositoryError> {
        let mut conn = self.pool.connection().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(persons_person::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(PersonRepositoryError::not_found(id));
        }
        Ok(())
    }
}
