//! The person record and its validated forms.
//!
//! [`PersonInput`] is the raw candidate with every field optional. The
//! pipeline in [`validator`] turns it into a [`ValidPerson`] one stage at a
//! time. Each stage hands back a proof type ([`PersonName`], [`DateOfBirth`])
//! that only a passing check can build, so the final step never reads an
//! optional field.

mod validator;

pub use validator::{
    finalize, person_validator, validate_date_of_birth, validate_name, PersonValidator,
};

use chrono::NaiveDate;

/// Identifier of a borough. Carried through validation unchecked.
pub type Borough = i32;

/// A candidate person record, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonInput {
    /// Full name.
    pub name: Option<String>,
    /// Calendar date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Borough identifier; never validated.
    pub borough: Option<Borough>,
}

impl PersonInput {
    /// Creates an input from its three optional fields.
    pub fn new(
        name: Option<impl Into<String>>,
        date_of_birth: Option<NaiveDate>,
        borough: Option<Borough>,
    ) -> Self {
        Self {
            name: name.map(Into::into),
            date_of_birth,
            borough,
        }
    }
}

/// A name that passed the name rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    pub(crate) fn new(name: String) -> Self {
        Self(name)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name and returns the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A date of birth that passed the date-of-birth rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    pub(crate) fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying calendar date.
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}

/// A person record whose name and date of birth are guaranteed present and
/// valid.
///
/// The fields are private; the only way to obtain one is through the
/// validation pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPerson {
    name: PersonName,
    date_of_birth: DateOfBirth,
    borough: Option<Borough>,
}

impl ValidPerson {
    /// Returns the validated name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the validated date of birth.
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth.as_date()
    }

    /// Returns the borough, passed through from the input.
    pub fn borough(&self) -> Option<Borough> {
        self.borough
    }

    /// Splits the record into its plain field values.
    pub fn into_parts(self) -> (String, NaiveDate, Option<Borough>) {
        (
            self.name.into_inner(),
            self.date_of_birth.as_date(),
            self.borough,
        )
    }
}
