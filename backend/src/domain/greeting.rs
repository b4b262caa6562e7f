//! Greeting produced by a last-name lookup.

use std::fmt;

use super::Person;

/// Outcome of greeting somebody by last name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Greeting {
    /// A person with the requested last name exists.
    Known {
        first_name: String,
        last_name: String,
    },
    /// Nobody with the requested last name could be found.
    Stranger { last_name: String },
}

impl Greeting {
    /// Greeting addressed to a stored person.
    #[must_use]
    pub fn for_person(person: &Person) -> Self {
        Self::Known {
            first_name: person.first_name().to_string(),
            last_name: person.last_name().to_string(),
        }
    }

    /// Greeting for a last name nobody answers to.
    #[must_use]
    pub fn stranger(last_name: impl Into<String>) -> Self {
        Self::Stranger {
            last_name: last_name.into(),
        }
    }

    /// Human-readable message returned to callers.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known {
                first_name,
                last_name,
            } => write!(f, "Hello {first_name} {last_name}!"),
            Self::Stranger { last_name } => {
                write!(f, "Who is this '{last_name}' you're talking about?")
            }
        }
    }
}
