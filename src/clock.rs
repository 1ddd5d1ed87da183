//! Sources of "today" for date rules.

use chrono::{NaiveDate, Utc};

/// Supplies the current calendar day.
///
/// The `Send + Sync` bounds let a validator holding a clock be shared
/// across threads.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock in UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same day.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use fieldcheck::{Clock, FixedClock};
///
/// let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// assert_eq!(FixedClock::new(day).today(), day);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Creates a clock pinned to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
