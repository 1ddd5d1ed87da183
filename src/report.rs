//! Demonstration inputs and their console rendering.

use std::fmt::{self, Display};

use chrono::NaiveDate;

use crate::error::PersonValidation;
use crate::person::{PersonInput, ValidPerson};

/// The four fixed demonstration inputs, in print order.
///
/// `today` fills the first input's date of birth.
pub fn demo_inputs(today: NaiveDate) -> [PersonInput; 4] {
    [
        PersonInput {
            name: None,
            date_of_birth: Some(today),
            borough: Some(5),
        },
        PersonInput {
            name: Some("Dave".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1904, 11, 4),
            borough: Some(2),
        },
        PersonInput {
            name: Some(
                "This is a really long name that is definitely beyond the max length".to_string(),
            ),
            date_of_birth: Some(NaiveDate::MAX),
            borough: None,
        },
        PersonInput {
            name: Some("Steven".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1986, 4, 17),
            borough: Some(3),
        },
    ]
}

/// The printable outcome of validating one numbered input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The input passed; printed to stdout.
    Valid { index: usize },
    /// The input failed; printed to stderr with its error tag.
    Invalid {
        index: usize,
        error: PersonValidation,
    },
}

impl Outcome {
    /// Builds the outcome for the `index`-th input (1-based).
    pub fn of(index: usize, result: &Result<ValidPerson, PersonValidation>) -> Self {
        match result {
            Ok(_) => Outcome::Valid { index },
            Err(error) => Outcome::Invalid {
                index,
                error: *error,
            },
        }
    }

    /// Returns true for a passing input.
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid { .. })
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Valid { index } => write!(f, "Input {} was valid", index),
            Outcome::Invalid { index, error } => write!(
                f,
                "Input {} was invalid with the following errors: {:?}",
                index, error
            ),
        }
    }
}
