//! # Fieldcheck
//!
//! Reusable field predicates and a fail-fast validator for a person record.
//!
//! ## Overview
//!
//! The [`predicates`] module holds small, pure checks over optional values:
//! presence, maximum length, and date rules. Each returns `true` when the
//! value is *invalid*.
//!
//! The [`person`] module composes those checks into a fixed pipeline over a
//! [`PersonInput`]: the name is checked first, then the date of birth, and
//! the first failure ends the run. A passing input becomes a [`ValidPerson`],
//! a type that cannot be built any other way.
//!
//! ## Core Types
//!
//! - [`PersonInput`]: candidate record with optional name, date of birth and borough
//! - [`ValidPerson`]: the same record with name and date of birth guaranteed present
//! - [`PersonValidation`]: the single error of a failed run, tagged by field and rule
//! - [`PersonErrors`]: a non-empty collection used when every field is checked
//! - [`PersonValidator`]: the configurable validator behind the free functions
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fieldcheck::{person_validator, NameError, PersonInput, PersonValidation};
//!
//! let ok = PersonInput::new(Some("Steven"), NaiveDate::from_ymd_opt(1986, 4, 17), Some(3));
//! let person = person_validator(ok).unwrap();
//! assert_eq!(person.name(), "Steven");
//!
//! // Both fields are bad, but only the name error is reported.
//! let bad = PersonInput {
//!     name: None,
//!     date_of_birth: Some(NaiveDate::MAX),
//!     borough: None,
//! };
//! assert_eq!(
//!     person_validator(bad),
//!     Err(PersonValidation::Name(NameError::MustBeEntered))
//! );
//! ```

pub mod clock;
pub mod error;
pub mod person;
pub mod predicates;
pub mod report;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DateOfBirthError, NameError, PersonErrors, PersonValidation};
pub use person::{
    finalize, person_validator, validate_date_of_birth, validate_name, Borough, DateOfBirth,
    PersonInput, PersonName, PersonValidator, ValidPerson,
};

/// Type alias for accumulating validation results using PersonErrors
pub type ValidationResult<T> = stillwater::Validation<T, PersonErrors>;
