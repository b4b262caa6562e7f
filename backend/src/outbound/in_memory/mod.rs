//! Process-local adapters.
//!
//! Used when no database is configured and as deterministic doubles in
//! integration tests.

mod person_repository;

pub use person_repository::InMemoryPersonRepository;
