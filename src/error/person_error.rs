//! Person validation error types.
//!
//! This module provides the field-scoped rule errors [`NameError`] and
//! [`DateOfBirthError`], the tagged [`PersonValidation`] that the fail-fast
//! pipeline surfaces, and [`PersonErrors`] for collecting the failures of
//! every field at once.

use std::fmt::{self, Display};

use stillwater::prelude::*;
use thiserror::Error;

/// A rule violated by the `name` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NameError {
    /// No name was supplied.
    #[error("name must be entered")]
    MustBeEntered,
    /// The name is longer than the allowed maximum.
    #[error("name exceeds the maximum length")]
    MaxLength,
}

impl NameError {
    /// Returns the machine-readable code for this rule.
    pub fn code(&self) -> &'static str {
        match self {
            NameError::MustBeEntered => "name.must_be_entered",
            NameError::MaxLength => "name.max_length",
        }
    }
}

/// A rule violated by the `date_of_birth` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DateOfBirthError {
    /// No date of birth was supplied.
    #[error("date of birth must be entered")]
    MustBeEntered,
    /// The date of birth lies after today.
    #[error("date of birth cannot be in the future")]
    FutureDate,
    /// The date of birth lies before the earliest accepted date.
    #[error("date of birth is before the earliest accepted date")]
    BeforeThreshold,
}

impl DateOfBirthError {
    /// Returns the machine-readable code for this rule.
    pub fn code(&self) -> &'static str {
        match self {
            DateOfBirthError::MustBeEntered => "date_of_birth.must_be_entered",
            DateOfBirthError::FutureDate => "date_of_birth.future_date",
            DateOfBirthError::BeforeThreshold => "date_of_birth.before_threshold",
        }
    }
}

/// The single error reported by the person pipeline.
///
/// Identifies both the offending field and the rule it broke. The `Debug`
/// rendering (`Name(MustBeEntered)`, `DateOfBirth(FutureDate)`, ...) is the
/// tag printed by the demonstration binary.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{NameError, PersonValidation};
///
/// let error = PersonValidation::from(NameError::MaxLength);
///
/// assert_eq!(error.code(), "name.max_length");
/// assert_eq!(format!("{:?}", error), "Name(MaxLength)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PersonValidation {
    /// The name stage failed.
    #[error(transparent)]
    Name(#[from] NameError),
    /// The date-of-birth stage failed.
    #[error(transparent)]
    DateOfBirth(#[from] DateOfBirthError),
}

impl PersonValidation {
    /// Returns the machine-readable code of the violated rule.
    pub fn code(&self) -> &'static str {
        match self {
            PersonValidation::Name(e) => e.code(),
            PersonValidation::DateOfBirth(e) => e.code(),
        }
    }

    /// Returns the name of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            PersonValidation::Name(_) => "name",
            PersonValidation::DateOfBirth(_) => "date_of_birth",
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<PersonValidation>();
    assert_sync::<PersonValidation>();
};

/// A non-empty collection of person validation errors.
///
/// `PersonErrors` wraps a `NonEmptyVec<PersonValidation>` so a failed
/// `Validation<_, PersonErrors>` always carries at least one error. It
/// implements `Semigroup`, so errors from separate fields combine in order:
///
/// ```rust
/// use fieldcheck::{DateOfBirthError, NameError, PersonErrors};
/// use stillwater::prelude::*;
///
/// let errors = PersonErrors::single(NameError::MustBeEntered.into())
///     .combine(PersonErrors::single(DateOfBirthError::FutureDate.into()));
///
/// assert_eq!(errors.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PersonErrors(NonEmptyVec<PersonValidation>);

impl PersonErrors {
    /// Creates a `PersonErrors` containing a single error.
    pub fn single(error: PersonValidation) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `PersonErrors` from a `NonEmptyVec` of errors.
    pub fn from_non_empty(errors: NonEmptyVec<PersonValidation>) -> Self {
        Self(errors)
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &PersonValidation> {
        self.0.iter()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &PersonValidation {
        self.0.head()
    }

    /// Returns the name error, if the name field failed.
    pub fn for_name(&self) -> Option<NameError> {
        self.0.iter().find_map(|e| match e {
            PersonValidation::Name(n) => Some(*n),
            PersonValidation::DateOfBirth(_) => None,
        })
    }

    /// Returns the date-of-birth error, if that field failed.
    pub fn for_date_of_birth(&self) -> Option<DateOfBirthError> {
        self.0.iter().find_map(|e| match e {
            PersonValidation::DateOfBirth(d) => Some(*d),
            PersonValidation::Name(_) => None,
        })
    }

    /// Converts this collection into a `Vec<PersonValidation>`.
    pub fn into_vec(self) -> Vec<PersonValidation> {
        self.0.into_vec()
    }
}

impl Semigroup for PersonErrors {
    fn combine(self, other: Self) -> Self {
        PersonErrors(self.0.combine(other.0))
    }
}

impl From<PersonValidation> for PersonErrors {
    fn from(error: PersonValidation) -> Self {
        Self::single(error)
    }
}

impl Display for PersonErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}: {}", i + 1, error.field(), error)?;
        }
        Ok(())
    }
}

impl std::error::Error for PersonErrors {}

impl IntoIterator for PersonErrors {
    type Item = PersonValidation;
    type IntoIter = std::vec::IntoIter<PersonValidation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<PersonErrors>();
    assert_sync::<PersonErrors>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_field_scoped() {
        assert_eq!(NameError::MustBeEntered.code(), "name.must_be_entered");
        assert_eq!(NameError::MaxLength.code(), "name.max_length");
        assert_eq!(
            DateOfBirthError::MustBeEntered.code(),
            "date_of_birth.must_be_entered"
        );
        assert_eq!(
            DateOfBirthError::FutureDate.code(),
            "date_of_birth.future_date"
        );
        assert_eq!(
            DateOfBirthError::BeforeThreshold.code(),
            "date_of_birth.before_threshold"
        );
    }

    #[test]
    fn test_person_validation_from_field_errors() {
        let name: PersonValidation = NameError::MustBeEntered.into();
        assert_eq!(name, PersonValidation::Name(NameError::MustBeEntered));
        assert_eq!(name.field(), "name");

        let dob: PersonValidation = DateOfBirthError::FutureDate.into();
        assert_eq!(dob, PersonValidation::DateOfBirth(DateOfBirthError::FutureDate));
        assert_eq!(dob.field(), "date_of_birth");
        assert_eq!(dob.code(), "date_of_birth.future_date");
    }

    #[test]
    fn test_person_validation_display_is_transparent() {
        let error = PersonValidation::from(DateOfBirthError::BeforeThreshold);
        assert_eq!(
            error.to_string(),
            "date of birth is before the earliest accepted date"
        );
    }

    #[test]
    fn test_debug_renders_tag() {
        let error = PersonValidation::from(NameError::MustBeEntered);
        assert_eq!(format!("{:?}", error), "Name(MustBeEntered)");

        let error = PersonValidation::from(DateOfBirthError::BeforeThreshold);
        assert_eq!(format!("{:?}", error), "DateOfBirth(BeforeThreshold)");
    }

    #[test]
    fn test_person_errors_single() {
        let errors = PersonErrors::single(NameError::MaxLength.into());

        assert_eq!(errors.len(), 1);
        assert!(!errors.is_empty());
        assert_eq!(errors.first(), &PersonValidation::Name(NameError::MaxLength));
        assert_eq!(errors.for_name(), Some(NameError::MaxLength));
        assert_eq!(errors.for_date_of_birth(), None);
    }

    #[test]
    fn test_person_errors_combine_keeps_order() {
        let errors = PersonErrors::single(NameError::MustBeEntered.into())
            .combine(PersonErrors::single(DateOfBirthError::MustBeEntered.into()));

        let collected = errors.clone().into_vec();
        assert_eq!(
            collected,
            vec![
                PersonValidation::Name(NameError::MustBeEntered),
                PersonValidation::DateOfBirth(DateOfBirthError::MustBeEntered),
            ]
        );
        assert_eq!(errors.for_name(), Some(NameError::MustBeEntered));
        assert_eq!(
            errors.for_date_of_birth(),
            Some(DateOfBirthError::MustBeEntered)
        );
    }

    #[test]
    fn test_person_errors_display() {
        let errors = PersonErrors::single(NameError::MustBeEntered.into())
            .combine(PersonErrors::single(DateOfBirthError::FutureDate.into()));
        let display = errors.to_string();

        assert!(display.contains("2 error(s)"));
        assert!(display.contains("name: name must be entered"));
        assert!(display.contains("date_of_birth: date of birth cannot be in the future"));
    }
}
