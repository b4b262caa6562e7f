//! Person data model.
//!
//! A person is a flat record with a store-assigned identifier, two validated
//! name fields, and audit timestamps. Identity is by key: two [`Person`]
//! values are equal when their identifiers match, whatever their names.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};

/// Maximum allowed length for a first or last name.
pub const PERSON_NAME_MAX: usize = 100;

/// Client-writable person fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PersonField {
    FirstName,
    LastName,
}

impl PersonField {
    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
        }
    }
}

impl fmt::Display for PersonField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors returned by [`PersonName::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonNameError {
    Missing,
    Null,
    NotText,
    Blank,
    TooLong { max: usize },
}

impl fmt::Display for PersonNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "This field is required."),
            Self::Null => write!(f, "This field may not be null."),
            Self::NotText => write!(f, "Not a valid string."),
            Self::Blank => write!(f, "This field may not be blank."),
            Self::TooLong { max } => {
                write!(f, "Ensure this field has no more than {max} characters.")
            }
        }
    }
}

impl std::error::Error for PersonNameError {}

/// Field-keyed validation failure for a person payload.
///
/// Every offending field is reported, not just the first one found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonValidationError {
    errors: Vec<(PersonField, PersonNameError)>,
}

impl PersonValidationError {
    /// Offending fields paired with the reason each one was rejected.
    #[must_use]
    pub fn field_errors(&self) -> &[(PersonField, PersonNameError)] {
        &self.errors
    }

    /// Whether `field` is among the rejected fields.
    #[must_use]
    pub fn has_field(&self, field: PersonField) -> bool {
        self.errors.iter().any(|(candidate, _)| *candidate == field)
    }
}

impl fmt::Display for PersonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .errors
            .iter()
            .map(|(field, error)| format!("{field}: {error}"))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "invalid person: {rendered}")
    }
}

impl std::error::Error for PersonValidationError {}

/// Stable store-assigned person identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(i64);

impl PersonId {
    /// Wrap a raw identifier as issued by the store.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-blank first or last name of at most [`PERSON_NAME_MAX`] characters.
///
/// Surrounding whitespace is trimmed before the checks run and is never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonName(String);

impl PersonName {
    /// Validate and construct a [`PersonName`].
    ///
    /// # Examples
    /// ```
    /// use hello_backend::domain::PersonName;
    ///
    /// let name = PersonName::new("  Anna ").expect("valid name");
    /// assert_eq!(name.as_ref(), "Anna");
    /// ```
    pub fn new(name: impl AsRef<str>) -> Result<Self, PersonNameError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PersonNameError::Blank);
        }
        if trimmed.chars().count() > PERSON_NAME_MAX {
            return Err(PersonNameError::TooLong {
                max: PERSON_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// A name field exactly as a client sent it, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameInput {
    /// The field was omitted.
    Absent,
    /// The field was sent as an explicit null.
    Null,
    Text(String),
    /// The field held a value that cannot be read as text, such as a boolean
    /// or a list.
    NotText,
}

impl From<Option<&str>> for NameInput {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Absent, |text| Self::Text(text.to_owned()))
    }
}

/// Validated client-writable fields of a person.
///
/// This is the only shape the record store accepts for inserts and updates,
/// so a blank name can never reach persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDraft {
    first_name: PersonName,
    last_name: PersonName,
}

impl PersonDraft {
    /// Build a draft from already validated names.
    #[must_use]
    pub fn new(first_name: PersonName, last_name: PersonName) -> Self {
        Self {
            first_name,
            last_name,
        }
    }

    /// Validate optional raw names, collecting an error for every bad field.
    ///
    /// # Examples
    /// ```
    /// use hello_backend::domain::{PersonDraft, PersonField};
    ///
    /// let err = PersonDraft::try_from_parts(Some(""), None).expect_err("both fields invalid");
    /// assert!(err.has_field(PersonField::FirstName));
    /// assert!(err.has_field(PersonField::LastName));
    /// ```
    pub fn try_from_parts(
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<Self, PersonValidationError> {
        Self::try_from_inputs(first_name.into(), last_name.into())
    }

    /// Validate client-supplied name fields, collecting an error for every
    /// bad field.
    pub fn try_from_inputs(
        first_name: NameInput,
        last_name: NameInput,
    ) -> Result<Self, PersonValidationError> {
        let first = validate_field(first_name);
        let last = validate_field(last_name);

        match (first, last) {
            (Ok(first_name), Ok(last_name)) => Ok(Self::new(first_name, last_name)),
            (first, last) => {
                let errors = [(PersonField::FirstName, first), (PersonField::LastName, last)]
                    .into_iter()
                    .filter_map(|(field, outcome)| outcome.err().map(|error| (field, error)))
                    .collect();
                Err(PersonValidationError { errors })
            }
        }
    }

    /// Validated first name.
    #[must_use]
    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Validated last name.
    #[must_use]
    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }
}

fn validate_field(input: NameInput) -> Result<PersonName, PersonNameError> {
    match input {
        NameInput::Absent => Err(PersonNameError::Missing),
        NameInput::Null => Err(PersonNameError::Null),
        NameInput::NotText => Err(PersonNameError::NotText),
        NameInput::Text(raw) => PersonName::new(raw),
    }
}

/// A persisted person.
///
/// ## Invariants
/// - `id` is assigned by the store and never changes.
/// - `created_at` is set once on insert.
/// - `updated_at` is refreshed on every successful mutation.
#[derive(Debug, Clone)]
pub struct Person {
    id: PersonId,
    first_name: PersonName,
    last_name: PersonName,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Person {
    /// Assemble a person from stored components.
    #[must_use]
    pub fn new(
        id: PersonId,
        draft: PersonDraft,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let PersonDraft {
            first_name,
            last_name,
        } = draft;
        Self {
            id,
            first_name,
            last_name,
            created_at,
            updated_at,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> PersonId {
        self.id
    }

    /// First name.
    #[must_use]
    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Last name.
    #[must_use]
    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    /// Creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Timestamp of the last successful mutation.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Ordering key used for listings: last name, then first name.
    #[must_use]
    pub fn sort_key(&self) -> (&str, &str) {
        (self.last_name.as_ref(), self.first_name.as_ref())
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
