//! ISO-8601 week computations.
//!
//! The weekly rollover compares [`WeekKey`]s; log entries record the week
//! number, the week-numbering year and the local Monday the week starts on.

use std::fmt;

use jiff::{
    Timestamp, Zoned,
    civil::{Date, ISOWeekDate, Weekday},
};

use crate::error::Result;

/// Identifies an ISO week, e.g. `2026-W42`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekKey {
    /// ISO week-numbering year, which differs from the calendar year for a
    /// few days around January 1st
    pub year: i16,
    /// Week number in `1..=53`
    pub week: i8,
}

impl WeekKey {
    /// The ISO week containing `date`.
    pub fn of(date: Date) -> Self {
        let iso = date.iso_week_date();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{}", self.year, self.week)
    }
}

/// The Monday starting the ISO week that contains `date`.
pub fn monday_of(date: Date) -> Result<Date> {
    let iso = date.iso_week_date();
    Ok(ISOWeekDate::new(iso.year(), iso.week(), Weekday::Monday)?.date())
}

/// Start of the week containing `at`: local midnight of its Monday.
pub fn week_start(at: &Zoned) -> Result<Timestamp> {
    let monday = monday_of(at.date())?;
    Ok(monday.to_zoned(at.time_zone().clone())?.timestamp())
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz::TimeZone};

    use super::*;

    #[test]
    fn test_week_key_regular_date() {
        let key = WeekKey::of(date(2026, 10, 16));
        assert_eq!(key, WeekKey { year: 2026, week: 42 });
        assert_eq!(key.to_string(), "2026-W42");
    }

    #[test]
    fn test_jan_first_on_thursday_is_week_one() {
        // 2026-01-01 is a Thursday.
        assert_eq!(WeekKey::of(date(2026, 1, 1)), WeekKey { year: 2026, week: 1 });
    }

    #[test]
    fn test_jan_first_on_friday_belongs_to_previous_year() {
        // 2021-01-01 is a Friday; ISO puts it in the last week of 2020.
        assert_eq!(WeekKey::of(date(2021, 1, 1)), WeekKey { year: 2020, week: 53 });
        assert_eq!(WeekKey::of(date(2021, 1, 4)), WeekKey { year: 2021, week: 1 });
    }

    #[test]
    fn test_dec_31_on_monday_is_week_one_of_next_year() {
        // 2018-12-31 is a Monday.
        assert_eq!(WeekKey::of(date(2018, 12, 31)), WeekKey { year: 2019, week: 1 });
        assert_eq!(WeekKey::of(date(2024, 12, 30)), WeekKey { year: 2025, week: 1 });
        assert_eq!(WeekKey::of(date(2025, 12, 31)).to_string(), "2026-W1");
    }

    #[test]
    fn test_week_fifty_three() {
        assert_eq!(WeekKey::of(date(2020, 12, 31)), WeekKey { year: 2020, week: 53 });
        assert_eq!(WeekKey::of(date(2026, 12, 31)), WeekKey { year: 2026, week: 53 });
    }

    #[test]
    fn test_monday_of() {
        assert_eq!(monday_of(date(2026, 10, 12)).unwrap(), date(2026, 10, 12));
        assert_eq!(monday_of(date(2026, 10, 16)).unwrap(), date(2026, 10, 12));
        // Sunday closes the week.
        assert_eq!(monday_of(date(2026, 10, 18)).unwrap(), date(2026, 10, 12));
        // Across a year boundary.
        assert_eq!(monday_of(date(2021, 1, 1)).unwrap(), date(2020, 12, 28));
    }

    #[test]
    fn test_week_start_is_local_midnight() {
        let at = date(2026, 10, 16)
            .at(15, 30, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap();
        let start = week_start(&at).unwrap();
        assert_eq!(start.to_string(), "2026-10-12T00:00:00Z");
    }

    #[test]
    fn test_week_start_uses_zone_offset() {
        let tz = TimeZone::fixed(jiff::tz::offset(2));
        let at = date(2026, 10, 14).at(1, 0, 0, 0).to_zoned(tz).unwrap();
        let start = week_start(&at).unwrap();
        assert_eq!(start.to_string(), "2026-10-11T22:00:00Z");
    }
}
