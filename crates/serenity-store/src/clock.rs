//! # Clock
//!
//! Where the hotel gets "now" from.
//!
//! The Early Bird Special depends on today's date, so the hotel never reads
//! the wall clock directly. Production uses [`SystemClock`]; tests pin the
//! date with [`FixedClock`].

use std::fmt::Debug;

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};

/// Source of the current date and instant.
pub trait Clock: Debug + Send + Sync {
    /// Today's calendar date at the front desk.
    fn today(&self) -> NaiveDate;

    /// Current instant, stamped on new bookings.
    fn now(&self) -> DateTime<Utc>;
}

/// The machine's clock. "Today" is the local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at midnight UTC of a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        FixedClock { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now(&self) -> DateTime<Utc> {
        self.today.and_time(NaiveTime::MIN).and_utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let clock = FixedClock::new(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.now().date_naive(), date);
    }
}
