//! # Calendar Module
//!
//! Date arithmetic for stays: strict `YYYY-MM-DD` parsing, nights between
//! two dates, days booked in advance, and half-hour time-of-day slots.
//!
//! ## Stay Arithmetic
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   today          check-in                       check-out               │
//! │     │               │                               │                   │
//! │     ▼               ▼                               ▼                   │
//! │  ───●───────────────●───────────────────────────────●──────────►        │
//! │     │◄─────────────►│◄─────────────────────────────►│                   │
//! │     days_in_advance          nights_between                             │
//! │                                                                         │
//! │  Whole calendar days only. No timezones, no time-of-day in the math.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{BookingError, BookingResult, ValidationError};
use crate::DATE_FORMAT;

// =============================================================================
// Date Arithmetic
// =============================================================================

/// Parses a stay date in the fixed `YYYY-MM-DD` format.
///
/// Exactly ten characters are required, so `2025-1-5` is rejected even
/// though chrono alone would accept it.
pub fn parse_date(value: &str) -> BookingResult<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.len() != 10 {
        return Err(BookingError::DateFormat {
            value: value.to_string(),
        });
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| BookingError::DateFormat {
        value: value.to_string(),
    })
}

/// Number of nights between two dates, never less than one.
///
/// A same-day or reversed range prices as one night. Booking creation
/// rejects such ranges before pricing; the clamp keeps previews of
/// half-filled forms from showing a zero or negative total.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use serenity_core::calendar::nights_between;
///
/// let d = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// assert_eq!(nights_between(d("2025-01-01"), d("2025-01-08")), 7);
/// assert_eq!(nights_between(d("2025-01-08"), d("2025-01-01")), 1);
/// ```
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    let days = (check_out - check_in).num_days();
    if days <= 0 {
        1
    } else {
        u32::try_from(days).unwrap_or(u32::MAX)
    }
}

/// Signed number of days from `today` until `check_in`.
pub fn days_in_advance(check_in: NaiveDate, today: NaiveDate) -> i64 {
    (check_in - today).num_days()
}

// =============================================================================
// Stay Dates
// =============================================================================

/// A validated check-in / check-out pair.
///
/// Construction goes through [`StayDates::parse`] or [`StayDates::new`],
/// both of which guarantee `check_out > check_in`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StayDates {
    #[ts(as = "String")]
    check_in: NaiveDate,
    #[ts(as = "String")]
    check_out: NaiveDate,
}

impl StayDates {
    /// Builds a stay from already-parsed dates.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> BookingResult<Self> {
        if check_out <= check_in {
            return Err(BookingError::InvalidDateRange {
                check_in,
                check_out,
            });
        }
        Ok(StayDates {
            check_in,
            check_out,
        })
    }

    /// Parses the raw form values of a booking request.
    ///
    /// ## Checks (fail-fast, in order)
    /// ```text
    /// blank check-in or check-out ──► MissingDates
    /// not YYYY-MM-DD              ──► DateFormat
    /// check-out <= check-in       ──► InvalidDateRange
    /// ```
    pub fn parse(check_in: &str, check_out: &str) -> BookingResult<Self> {
        if check_in.trim().is_empty() || check_out.trim().is_empty() {
            return Err(BookingError::MissingDates);
        }

        let check_in = parse_date(check_in)?;
        let check_out = parse_date(check_out)?;
        StayDates::new(check_in, check_out)
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Nights in this stay (always at least one).
    pub fn nights(&self) -> u32 {
        nights_between(self.check_in, self.check_out)
    }
}

// =============================================================================
// Time Slots
// =============================================================================

/// A check-in or check-out time of day on a half-hour boundary.
///
/// ## Accepted Input
/// - 12-hour form as offered by the booking screen: `"2:30 PM"`, `"12:00 AM"`
/// - 24-hour form: `"14:30"`, `"00:00"`
///
/// Displays (and serializes) in the 12-hour form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// Builds a slot from hour (0-23) and minute (0 or 30).
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        if minute != 0 && minute != 30 {
            return Err(ValidationError::InvalidFormat {
                field: "time".to_string(),
                reason: "must be on the hour or half hour".to_string(),
            });
        }
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(TimeSlot)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "hour".to_string(),
                min: 0,
                max: 23,
            })
    }

    /// First slot of the day (12:00 AM), the booking screen's default check-in.
    pub fn earliest() -> Self {
        TimeSlot(NaiveTime::MIN)
    }

    /// Last slot of the day (11:30 PM), the booking screen's default check-out.
    pub fn latest() -> Self {
        TimeSlot(NaiveTime::from_hms_opt(23, 30, 0).unwrap_or(NaiveTime::MIN))
    }

    /// All 48 half-hour slots in order.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..48u32).map(|i| {
            let time = NaiveTime::from_hms_opt(i / 2, (i % 2) * 30, 0).unwrap_or(NaiveTime::MIN);
            TimeSlot(time)
        })
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.0.hour();
        let suffix = if hour < 12 { "AM" } else { "PM" };
        let hour12 = match hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };
        write!(f, "{}:{:02} {}", hour12, self.0.minute(), suffix)
    }
}

impl FromStr for TimeSlot {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidFormat {
            field: "time".to_string(),
            reason: format!("'{}' is not a time like \"2:30 PM\" or \"14:30\"", s),
        };

        let s = s.trim();
        let (clock, meridiem) = match s.rsplit_once(' ') {
            Some((clock, suffix)) => (clock.trim(), Some(suffix.to_ascii_uppercase())),
            None => (s, None),
        };

        let (h, m) = clock.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = h.parse().map_err(|_| invalid())?;
        let minute: u32 = m.parse().map_err(|_| invalid())?;

        let hour = match meridiem.as_deref() {
            None => hour,
            Some(_) if !(1..=12).contains(&hour) => return Err(invalid()),
            Some("AM") => hour % 12,
            Some("PM") => hour % 12 + 12,
            Some(_) => return Err(invalid()),
        };

        TimeSlot::from_hm(hour, minute)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-01-01").unwrap(), date("2025-01-01"));
        assert_eq!(parse_date(" 2025-03-02 ").unwrap(), date("2025-03-02"));

        assert!(matches!(
            parse_date("01/01/2025"),
            Err(BookingError::DateFormat { .. })
        ));
        assert!(parse_date("2025-1-5").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn test_nights_between() {
        assert_eq!(nights_between(date("2025-01-01"), date("2025-01-08")), 7);
        assert_eq!(nights_between(date("2025-03-01"), date("2025-03-02")), 1);
        // Month and leap-year boundaries
        assert_eq!(nights_between(date("2024-02-28"), date("2024-03-01")), 2);
    }

    #[test]
    fn test_nights_between_clamps_to_one() {
        assert_eq!(nights_between(date("2025-01-01"), date("2025-01-01")), 1);
        assert_eq!(nights_between(date("2025-01-08"), date("2025-01-01")), 1);
    }

    #[test]
    fn test_days_in_advance() {
        assert_eq!(days_in_advance(date("2025-02-01"), date("2025-01-02")), 30);
        assert_eq!(days_in_advance(date("2025-01-01"), date("2025-01-02")), -1);
    }

    #[test]
    fn test_stay_dates_parse() {
        let stay = StayDates::parse("2025-01-01", "2025-01-08").unwrap();
        assert_eq!(stay.nights(), 7);
        assert_eq!(stay.check_in(), date("2025-01-01"));
    }

    #[test]
    fn test_stay_dates_failures_in_order() {
        assert_eq!(StayDates::parse("", "2025-01-08"), Err(BookingError::MissingDates));
        assert_eq!(StayDates::parse("2025-01-01", "  "), Err(BookingError::MissingDates));
        // Missing wins over malformed
        assert_eq!(StayDates::parse("garbage", ""), Err(BookingError::MissingDates));
        assert!(matches!(
            StayDates::parse("garbage", "2025-01-08"),
            Err(BookingError::DateFormat { .. })
        ));
        assert!(matches!(
            StayDates::parse("2025-01-08", "2025-01-08"),
            Err(BookingError::InvalidDateRange { .. })
        ));
        assert!(matches!(
            StayDates::parse("2025-01-08", "2025-01-01"),
            Err(BookingError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_time_slot_parsing() {
        let slot: TimeSlot = "2:30 PM".parse().unwrap();
        assert_eq!(slot, TimeSlot::from_hm(14, 30).unwrap());
        assert_eq!("12:00 AM".parse::<TimeSlot>().unwrap(), TimeSlot::earliest());
        assert_eq!("12:00 pm".parse::<TimeSlot>().unwrap(), TimeSlot::from_hm(12, 0).unwrap());
        assert_eq!("23:30".parse::<TimeSlot>().unwrap(), TimeSlot::latest());

        assert!("2:15 PM".parse::<TimeSlot>().is_err());
        assert!("13:00 PM".parse::<TimeSlot>().is_err());
        assert!("noon".parse::<TimeSlot>().is_err());
        assert!("24:00".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn test_time_slot_display() {
        assert_eq!(TimeSlot::earliest().to_string(), "12:00 AM");
        assert_eq!(TimeSlot::latest().to_string(), "11:30 PM");
        assert_eq!(TimeSlot::from_hm(12, 30).unwrap().to_string(), "12:30 PM");
        assert_eq!(TimeSlot::from_hm(9, 0).unwrap().to_string(), "9:00 AM");
    }

    #[test]
    fn test_time_slot_catalog() {
        let slots: Vec<TimeSlot> = TimeSlot::all().collect();
        assert_eq!(slots.len(), 48);
        assert_eq!(slots[0], TimeSlot::earliest());
        assert_eq!(slots[47], TimeSlot::latest());
        assert_eq!(slots[3].to_string(), "1:30 AM");
    }

    #[test]
    fn test_time_slot_serde() {
        let slot = TimeSlot::from_hm(14, 0).unwrap();
        let json = serde_json::to_string(&slot).unwrap();
        assert_eq!(json, "\"2:00 PM\"");
        let back: TimeSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slot);
    }
}
