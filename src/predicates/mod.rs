//! Reusable field predicates.
//!
//! Each predicate takes an optional value and answers "is this invalid?":
//! `true` signals a violation, `false` means the value passes. All of them
//! are pure and total over their input.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::predicates::{max_length, must_be_entered};
//!
//! let name: Option<&str> = Some("Dave");
//! assert!(!must_be_entered(name));
//! assert!(!max_length(name));
//!
//! assert!(must_be_entered::<str>(None));
//! ```

mod date;
mod length;

pub use date::{
    before_1905, before_date, earliest_date, future_date, future_date_at, past_date, past_date_at,
    EARLIEST_YEAR,
};
pub use length::{exceeds_length, max_length, HasLength, MAX_LENGTH};

/// Returns `true` if the value is absent.
///
/// The content of a present value is never inspected, so an empty string
/// counts as entered.
pub fn must_be_entered<T: ?Sized>(value: Option<&T>) -> bool {
    value.is_none()
}
