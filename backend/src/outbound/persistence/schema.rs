//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` when the migrations change.

diesel::table! {
    /// Person records.
    ///
    /// Names are `VARCHAR(100)` with a non-blank check constraint. Listing
    /// order is served by the `(last_name, first_name)` index.
    persons_person (id) {
        /// Primary key issued by a `BIGSERIAL` sequence.
        id -> Int8,
        first_name -> Varchar,
        last_name -> Varchar,
        /// Set on insert, never modified.
        created_at -> Timestamptz,
        /// Advanced on every update.
        updated_at -> Timestamptz,
    }
}
