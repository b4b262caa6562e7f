//! Domain primitives, services, and ports.
//!
//! Purpose: define the person record, its validation rules, the greeting and
//! weather value types, and the services that implement the driving ports.
//! Types here know nothing about HTTP or SQL.
//!
//! Public surface:
//! - `Person`, `PersonDraft`, `PersonName`, `PersonId`: the stored record and
//!   its validated parts.
//! - `Greeting`: outcome of a last-name lookup.
//! - `WeatherReport`: decoded upstream conditions.
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `PersonService`, `WeatherSummaryService`: driving port implementations.

pub mod error;
pub mod greeting;
pub mod person;
pub mod person_service;
pub mod ports;
pub mod trace_id;
pub mod weather;
pub mod weather_service;

pub use self::error::{Error, ErrorCode};
pub use self::greeting::Greeting;
pub use self::person::{
    NameInput, PERSON_NAME_MAX, Person, PersonDraft, PersonField, PersonId, PersonName,
    PersonNameError, PersonValidationError,
};
pub use self::person_service::PersonService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::weather::{WEATHER_CITY, WeatherReport};
pub use self::weather_service::WeatherSummaryService;
