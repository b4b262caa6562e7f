//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::persons_person;

/// Row struct for reading from the persons table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = persons_person)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PersonRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating person records.
///
/// Identifier and timestamps come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = persons_person)]
pub(crate) struct NewPersonRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

/// Changeset struct for replacing both names.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = persons_person)]
pub(crate) struct PersonNamesUpdate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}
