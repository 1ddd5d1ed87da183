//! Error types for validation failures.
//!
//! This module provides the field-scoped rule errors, the tagged error of the
//! fail-fast person pipeline, and a non-empty collection for accumulated errors.

mod person_error;

pub use person_error::{DateOfBirthError, NameError, PersonErrors, PersonValidation};
