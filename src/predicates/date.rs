//! Calendar date predicates.
//!
//! Every rule here treats an absent date as a violation. Callers that handle
//! absence separately (as the person pipeline does) never reach that branch.

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};

/// Year of the earliest date accepted by [`before_1905`].
pub const EARLIEST_YEAR: i32 = 1905;

/// Returns 1905-01-01, the threshold used by [`before_1905`].
pub fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(EARLIEST_YEAR, 1, 1).expect("1905-01-01 is a valid calendar date")
}

/// Returns `true` if the date is absent or strictly after today (UTC).
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use fieldcheck::predicates::future_date;
///
/// assert!(future_date(Some(NaiveDate::MAX)));
/// assert!(!future_date(NaiveDate::from_ymd_opt(1986, 4, 17)));
/// assert!(future_date(None));
/// ```
pub fn future_date(value: Option<NaiveDate>) -> bool {
    future_date_at(value, SystemClock.today())
}

/// Returns `true` if the date is absent or strictly after `today`.
pub fn future_date_at(value: Option<NaiveDate>, today: NaiveDate) -> bool {
    value.map_or(true, |date| date > today)
}

/// Returns `true` if the date is absent or strictly before today (UTC).
pub fn past_date(value: Option<NaiveDate>) -> bool {
    past_date_at(value, SystemClock.today())
}

/// Returns `true` if the date is absent or strictly before `today`.
pub fn past_date_at(value: Option<NaiveDate>, today: NaiveDate) -> bool {
    value.map_or(true, |date| date < today)
}

/// Returns `true` if the date is absent or strictly before 1905-01-01.
///
/// ```rust
/// use chrono::NaiveDate;
/// use fieldcheck::predicates::before_1905;
///
/// assert!(before_1905(NaiveDate::from_ymd_opt(1904, 11, 4)));
/// assert!(!before_1905(NaiveDate::from_ymd_opt(1905, 1, 1)));
/// ```
pub fn before_1905(value: Option<NaiveDate>) -> bool {
    before_date(value, earliest_date())
}

/// Returns `true` if the date is absent or strictly before `threshold`.
pub fn before_date(value: Option<NaiveDate>, threshold: NaiveDate) -> bool {
    value.map_or(true, |date| date < threshold)
}
