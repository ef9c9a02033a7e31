//! Wall-clock civil dates and times.
//!
//! `CivilDate` and `CivilTime` are local clock readings with no attached
//! offset. Pair them with a [`UtcOffset`](crate::UtcOffset) to obtain an
//! [`Instant`](crate::Instant).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jdn, days_in_month, is_supported_year, jdn_to_calendar};

/// Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    /// Build a validated date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let date = Self { year, month, day };
        date.validate()?;
        Ok(date)
    }

    /// Check year, month and day ranges.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !is_supported_year(self.year) {
            return Err(TimeError::YearOutOfRange(self.year));
        }
        let len = days_in_month(self.year, self.month).ok_or(TimeError::InvalidMonth(self.month))?;
        if self.day == 0 || self.day > len {
            return Err(TimeError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        Ok(())
    }

    /// Julian Day Number of this date.
    pub fn jdn(&self) -> i64 {
        calendar_to_jdn(self.year, self.month, self.day)
    }

    /// Date for a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_calendar(jdn);
        Self { year, month, day }
    }

    /// Date `days` later (negative moves backwards).
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_jdn(self.jdn() + days)
    }

    /// Midnight of this date as a `CivilTime`.
    pub fn at_midnight(&self) -> CivilTime {
        CivilTime {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD` (a leading `-` marks a year before 1 CE).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (sign, body) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s),
        };
        let parts: Vec<&str> = body.split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year: i32 = parts[0].parse()?;
        let month: u32 = parts[1].parse()?;
        let day: u32 = parts[2].parse()?;
        Self::new(sign * year, month, day)
    }
}

/// Local civil date and time with whole-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilTime {
    /// Build a validated civil time.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        let t = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };
        t.validate()?;
        Ok(t)
    }

    /// Check every field range. Hours are checked before the date so that a
    /// bad clock reading is reported even on a bad date.
    pub fn validate(&self) -> Result<(), TimeError> {
        if self.hour > 23 {
            return Err(TimeError::InvalidHour(self.hour));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidMinute(self.minute));
        }
        if self.second > 59 {
            return Err(TimeError::InvalidSecond(self.second));
        }
        self.date().validate()
    }

    /// The calendar date part.
    pub fn date(&self) -> CivilDate {
        CivilDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Seconds elapsed since local midnight.
    pub fn seconds_of_day(&self) -> i64 {
        self.hour as i64 * 3600 + self.minute as i64 * 60 + self.second as i64
    }
}

impl Display for CivilTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for CivilTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm[:ss]`; a space may replace `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date_part, time_part) = s
            .split_once(['T', ' '])
            .ok_or_else(|| TimeError::Parse(format!("expected YYYY-MM-DDThh:mm[:ss], got {s}")))?;
        let date: CivilDate = date_part.parse()?;
        let time_parts: Vec<&str> = time_part.split(':').collect();
        if time_parts.len() < 2 || time_parts.len() > 3 {
            return Err(TimeError::Parse(format!("invalid time of day: {time_part}")));
        }
        let hour: u32 = time_parts[0].parse()?;
        let minute: u32 = time_parts[1].parse()?;
        let second: u32 = match time_parts.get(2) {
            Some(sec) => sec.parse()?,
            None => 0,
        };
        Self::new(date.year, date.month, date.day, hour, minute, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_day() {
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert_eq!(
            CivilDate::new(2024, 13, 1),
            Err(TimeError::InvalidMonth(13))
        );
    }

    #[test]
    fn new_rejects_extreme_years() {
        assert_eq!(
            CivilDate::new(i32::MAX, 6, 1),
            Err(TimeError::YearOutOfRange(i32::MAX))
        );
        assert_eq!(
            CivilDate::new(i32::MIN, 6, 1),
            Err(TimeError::YearOutOfRange(i32::MIN))
        );
        assert_eq!(
            CivilTime::new(i32::MAX, 6, 1, 12, 0, 0),
            Err(TimeError::YearOutOfRange(i32::MAX))
        );
        assert!(CivilDate::new(crate::MAX_YEAR, 12, 31).is_ok());
        assert!("-2000000-01-01".parse::<CivilDate>().is_err());
    }

    #[test]
    fn new_validates_clock() {
        assert_eq!(
            CivilTime::new(2024, 1, 1, 24, 0, 0),
            Err(TimeError::InvalidHour(24))
        );
        assert_eq!(
            CivilTime::new(2024, 1, 1, 23, 60, 0),
            Err(TimeError::InvalidMinute(60))
        );
        assert_eq!(
            CivilTime::new(2024, 1, 1, 23, 59, 60),
            Err(TimeError::InvalidSecond(60))
        );
    }

    #[test]
    fn add_days_crosses_year() {
        let d = CivilDate::new(1999, 12, 31).unwrap();
        assert_eq!(d.add_days(1), CivilDate::new(2000, 1, 1).unwrap());
        assert_eq!(d.add_days(-365), CivilDate::new(1998, 12, 31).unwrap());
    }

    #[test]
    fn display_and_parse_date() {
        let d: CivilDate = "1989-10-06".parse().unwrap();
        assert_eq!(d, CivilDate::new(1989, 10, 6).unwrap());
        assert_eq!(d.to_string(), "1989-10-06");
    }

    #[test]
    fn parse_time_without_seconds() {
        let t: CivilTime = "1990-05-15T23:05".parse().unwrap();
        assert_eq!(t.hour, 23);
        assert_eq!(t.minute, 5);
        assert_eq!(t.second, 0);
        assert_eq!(t.to_string(), "1990-05-15T23:05:00");
    }

    #[test]
    fn parse_time_with_space() {
        let t: CivilTime = "2024-02-04 16:27:08".parse().unwrap();
        assert_eq!(t.seconds_of_day(), 16 * 3600 + 27 * 60 + 8);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("2024-02-04".parse::<CivilTime>().is_err());
        assert!("2024/02/04T00:00".parse::<CivilTime>().is_err());
        assert!("2024-02-04T25:00".parse::<CivilTime>().is_err());
    }
}
