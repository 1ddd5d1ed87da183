//! The fail-fast person pipeline.
//!
//! Stages run in a fixed order: name, then date of birth, then finalize.
//! The first failing stage ends the run and its error is the only one
//! reported. [`PersonValidator::validate_all`] is the exception: it runs
//! every field and collects their errors.

use chrono::NaiveDate;
use stillwater::prelude::*;
use stillwater::Validation;
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::error::{DateOfBirthError, NameError, PersonErrors, PersonValidation};
use crate::predicates::{before_date, earliest_date, exceeds_length, future_date_at, MAX_LENGTH};
use crate::ValidationResult;

use super::{Borough, DateOfBirth, PersonInput, PersonName, ValidPerson};

/// Configurable person validator.
///
/// The defaults match the free functions in this module: names of at most
/// 32 characters, birth dates from 1905-01-01 up to today, and today read
/// from the system clock.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use fieldcheck::{FixedClock, NameError, PersonInput, PersonValidation, PersonValidator};
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let validator = PersonValidator::new()
///     .max_name_len(4)
///     .with_clock(FixedClock::new(today));
///
/// let input = PersonInput::new(Some("Steven"), NaiveDate::from_ymd_opt(1986, 4, 17), None);
/// assert_eq!(
///     validator.validate(input),
///     Err(PersonValidation::Name(NameError::MaxLength))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct PersonValidator<C = SystemClock> {
    max_name_len: usize,
    earliest_birth_date: NaiveDate,
    clock: C,
}

impl PersonValidator<SystemClock> {
    /// Creates a validator with the default rules and the system clock.
    pub fn new() -> Self {
        Self {
            max_name_len: MAX_LENGTH,
            earliest_birth_date: earliest_date(),
            clock: SystemClock,
        }
    }
}

impl Default for PersonValidator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PersonValidator<C> {
    /// Sets the maximum name length in characters (inclusive).
    pub fn max_name_len(mut self, max: usize) -> Self {
        self.max_name_len = max;
        self
    }

    /// Sets the earliest accepted date of birth (inclusive).
    pub fn earliest_birth_date(mut self, date: NaiveDate) -> Self {
        self.earliest_birth_date = date;
        self
    }

    /// Replaces the source of "today" used by the future-date rule.
    pub fn with_clock<D: Clock>(self, clock: D) -> PersonValidator<D> {
        PersonValidator {
            max_name_len: self.max_name_len,
            earliest_birth_date: self.earliest_birth_date,
            clock,
        }
    }

    /// Checks the name field.
    ///
    /// Reports `MustBeEntered` if the name is absent, otherwise `MaxLength`
    /// if it is too long.
    pub fn validate_name(&self, input: &PersonInput) -> Result<PersonName, NameError> {
        let Some(name) = input.name.as_deref() else {
            return Err(rejected(NameError::MustBeEntered));
        };

        if exceeds_length(Some(name), self.max_name_len) {
            return Err(rejected(NameError::MaxLength));
        }

        Ok(PersonName::new(name.to_string()))
    }

    /// Checks the date-of-birth field.
    ///
    /// Rules run in order (presence, future date, earliest date) and the
    /// first violation is reported.
    pub fn validate_date_of_birth(
        &self,
        input: &PersonInput,
    ) -> Result<DateOfBirth, DateOfBirthError> {
        let Some(date) = input.date_of_birth else {
            return Err(rejected(DateOfBirthError::MustBeEntered));
        };

        if future_date_at(Some(date), self.clock.today()) {
            return Err(rejected(DateOfBirthError::FutureDate));
        }
        if before_date(Some(date), self.earliest_birth_date) {
            return Err(rejected(DateOfBirthError::BeforeThreshold));
        }

        Ok(DateOfBirth::new(date))
    }

    /// Runs the whole pipeline, stopping at the first failing stage.
    pub fn validate(&self, input: PersonInput) -> Result<ValidPerson, PersonValidation> {
        let name = self.validate_name(&input)?;
        let date_of_birth = self.validate_date_of_birth(&input)?;
        let person = finalize(name, date_of_birth, input.borough);
        trace!(name = person.name(), "person accepted");
        Ok(person)
    }

    /// Checks every field and collects all failures.
    ///
    /// Within a field the first violated rule still wins; across fields the
    /// errors accumulate, name first.
    pub fn validate_all(&self, input: &PersonInput) -> ValidationResult<ValidPerson> {
        let name = self.validate_name(input);
        let date_of_birth = self.validate_date_of_birth(input);

        match (name, date_of_birth) {
            (Ok(name), Ok(date_of_birth)) => {
                Validation::Success(finalize(name, date_of_birth, input.borough))
            }
            (Err(name), Ok(_)) => Validation::Failure(PersonErrors::single(name.into())),
            (Ok(_), Err(date_of_birth)) => {
                Validation::Failure(PersonErrors::single(date_of_birth.into()))
            }
            (Err(name), Err(date_of_birth)) => Validation::Failure(
                PersonErrors::single(name.into())
                    .combine(PersonErrors::single(date_of_birth.into())),
            ),
        }
    }
}

fn rejected<E>(error: E) -> E
where
    E: Copy + Into<PersonValidation>,
{
    let tagged: PersonValidation = error.into();
    debug!(field = tagged.field(), rule = tagged.code(), "field rejected");
    error
}

/// Checks the name field with the default rules.
pub fn validate_name(input: &PersonInput) -> Result<PersonName, NameError> {
    PersonValidator::new().validate_name(input)
}

/// Checks the date-of-birth field with the default rules and the system clock.
pub fn validate_date_of_birth(input: &PersonInput) -> Result<DateOfBirth, DateOfBirthError> {
    PersonValidator::new().validate_date_of_birth(input)
}

/// Assembles a [`ValidPerson`] from the outputs of the earlier stages.
///
/// Cannot fail: holding a [`PersonName`] and a [`DateOfBirth`] already
/// proves both rules passed.
pub fn finalize(
    name: PersonName,
    date_of_birth: DateOfBirth,
    borough: Option<Borough>,
) -> ValidPerson {
    ValidPerson {
        name,
        date_of_birth,
        borough,
    }
}

/// Validates a person with the default rules, stopping at the first error.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use fieldcheck::{person_validator, DateOfBirthError, PersonInput, PersonValidation};
///
/// let input = PersonInput::new(Some("Dave"), NaiveDate::from_ymd_opt(1904, 11, 4), Some(2));
/// assert_eq!(
///     person_validator(input),
///     Err(PersonValidation::DateOfBirth(DateOfBirthError::BeforeThreshold))
/// );
/// ```
pub fn person_validator(input: PersonInput) -> Result<ValidPerson, PersonValidation> {
    PersonValidator::new().validate(input)
}
