//! Absolute instants and fixed UTC offsets.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::civil_time::{CivilDate, CivilTime};
use crate::error::TimeError;
use crate::julian::{MAX_YEAR, MIN_YEAR, SECONDS_PER_DAY, UNIX_EPOCH_JDN, calendar_to_jdn};

/// Largest accepted offset magnitude, in minutes.
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Fixed offset of a local clock from UTC, in minutes east of Greenwich.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    /// UTC itself.
    pub const UTC: Self = Self { minutes: 0 };
    /// UTC+08:00, the 120 deg E reference meridian of the Chinese calendar.
    pub const CHINA_STANDARD: Self = Self { minutes: 480 };
    /// UTC+09:00 (Korea / Japan standard time).
    pub const KOREA_STANDARD: Self = Self { minutes: 540 };

    /// Offset from signed minutes east of UTC.
    pub fn from_minutes(minutes: i32) -> Result<Self, TimeError> {
        if minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(TimeError::InvalidOffset(minutes));
        }
        Ok(Self { minutes })
    }

    /// Signed minutes east of UTC.
    pub const fn minutes(self) -> i32 {
        self.minutes
    }

    /// Signed seconds east of UTC.
    pub const fn seconds(self) -> i64 {
        self.minutes as i64 * 60
    }
}

impl Default for UtcOffset {
    fn default() -> Self {
        Self::CHINA_STANDARD
    }
}

impl Display for UtcOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.abs();
        write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

impl FromStr for UtcOffset {
    type Err = TimeError;

    /// Parse `Z`, `+hh:mm`, `-hh:mm`, `+hhmm` or `+hh`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("z") {
            return Ok(Self::UTC);
        }
        let (sign, body) = if let Some(rest) = s.strip_prefix('+') {
            (1, rest)
        } else if let Some(rest) = s.strip_prefix('-') {
            (-1, rest)
        } else {
            return Err(TimeError::Parse(format!("offset must start with + or -: {s}")));
        };
        let (hours, minutes): (i32, i32) = match body.split_once(':') {
            Some((h, m)) => (h.parse()?, m.parse()?),
            None if body.len() == 4 && body.is_char_boundary(2) => {
                (body[..2].parse()?, body[2..].parse()?)
            }
            None => (body.parse()?, 0),
        };
        if minutes >= 60 {
            return Err(TimeError::Parse(format!("offset minutes out of range: {s}")));
        }
        Self::from_minutes(sign * (hours * 60 + minutes))
    }
}

/// An absolute point in time: whole UTC seconds since 1970-01-01T00:00:00Z.
///
/// Integer seconds keep boundary comparisons exact, which matters when a
/// birth time coincides with a solar-term instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instant {
    unix_seconds: i64,
}

impl Instant {
    /// First supported instant: 00:00 UTC on January 1 of `MIN_YEAR`.
    pub const SUPPORTED_MIN: Self = Self::utc_midnight(calendar_to_jdn(MIN_YEAR, 1, 1));
    /// Last supported instant: 23:59:59 UTC on December 31 of `MAX_YEAR`.
    pub const SUPPORTED_MAX: Self =
        Self::utc_midnight(calendar_to_jdn(MAX_YEAR, 12, 31)).add_seconds(SECONDS_PER_DAY - 1);

    /// Instant from UTC seconds since the Unix epoch.
    pub const fn from_unix_seconds(unix_seconds: i64) -> Self {
        Self { unix_seconds }
    }

    /// UTC seconds since the Unix epoch.
    pub const fn as_unix_seconds(self) -> i64 {
        self.unix_seconds
    }

    /// UTC midnight at the start of the civil day with this JDN.
    pub const fn utc_midnight(jdn: i64) -> Self {
        Self {
            unix_seconds: (jdn - UNIX_EPOCH_JDN) * SECONDS_PER_DAY,
        }
    }

    /// Instant of a local civil time read on a clock at `offset`.
    pub fn from_civil(t: &CivilTime, offset: UtcOffset) -> Self {
        let local = Self::utc_midnight(t.date().jdn()).unix_seconds + t.seconds_of_day();
        Self {
            unix_seconds: local - offset.seconds(),
        }
    }

    /// Local civil time shown by a clock at `offset` at this instant.
    pub fn to_civil(self, offset: UtcOffset) -> CivilTime {
        let local = self.unix_seconds + offset.seconds();
        let days = local.div_euclid(SECONDS_PER_DAY);
        let sod = local.rem_euclid(SECONDS_PER_DAY);
        let date = CivilDate::from_jdn(days + UNIX_EPOCH_JDN);
        CivilTime {
            year: date.year,
            month: date.month,
            day: date.day,
            hour: (sod / 3600) as u32,
            minute: ((sod % 3600) / 60) as u32,
            second: (sod % 60) as u32,
        }
    }

    /// Gregorian UTC year of this instant, rejecting instants outside the
    /// supported year range.
    pub fn utc_year(self) -> Result<i32, TimeError> {
        if self < Self::SUPPORTED_MIN || self > Self::SUPPORTED_MAX {
            return Err(TimeError::InstantOutOfRange(self.unix_seconds));
        }
        Ok(self.to_civil(UtcOffset::UTC).year)
    }

    /// This instant shifted by `seconds`.
    pub const fn add_seconds(self, seconds: i64) -> Self {
        Self {
            unix_seconds: self.unix_seconds + seconds,
        }
    }

    /// Signed seconds from `self` to `later`.
    pub const fn seconds_until(self, later: Instant) -> i64 {
        later.unix_seconds - self.unix_seconds
    }

    /// Signed fractional days from `self` to `later`.
    pub fn days_until(self, later: Instant) -> f64 {
        self.seconds_until(later) as f64 / SECONDS_PER_DAY as f64
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}Z", self.to_civil(UtcOffset::UTC))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_is_zero() {
        let t = CivilTime::new(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(Instant::from_civil(&t, UtcOffset::UTC).as_unix_seconds(), 0);
    }

    #[test]
    fn offset_shifts_instant() {
        let t = CivilTime::new(2024, 2, 4, 16, 27, 0).unwrap();
        let local = Instant::from_civil(&t, UtcOffset::CHINA_STANDARD);
        let utc = Instant::from_civil(
            &CivilTime::new(2024, 2, 4, 8, 27, 0).unwrap(),
            UtcOffset::UTC,
        );
        assert_eq!(local, utc);
    }

    #[test]
    fn to_civil_roundtrip_across_midnight() {
        let t = CivilTime::new(2000, 1, 1, 3, 15, 42).unwrap();
        let i = Instant::from_civil(&t, UtcOffset::KOREA_STANDARD);
        assert_eq!(i.to_civil(UtcOffset::KOREA_STANDARD), t);
        // Same instant in UTC is the previous evening.
        let utc = i.to_civil(UtcOffset::UTC);
        assert_eq!((utc.year, utc.month, utc.day, utc.hour), (1999, 12, 31, 18));
    }

    #[test]
    fn pre_epoch_instants() {
        let t = CivilTime::new(1900, 1, 1, 0, 0, 1).unwrap();
        let i = Instant::from_civil(&t, UtcOffset::UTC);
        assert!(i.as_unix_seconds() < 0);
        assert_eq!(i.to_civil(UtcOffset::UTC), t);
    }

    #[test]
    fn days_until_fractional() {
        let a = Instant::from_unix_seconds(0);
        let b = a.add_seconds(36 * 3600);
        assert!((a.days_until(b) - 1.5).abs() < 1e-12);
        assert!((b.days_until(a) + 1.5).abs() < 1e-12);
    }

    #[test]
    fn utc_year_bounds() {
        assert_eq!(Instant::from_unix_seconds(0).utc_year(), Ok(1970));
        assert_eq!(Instant::SUPPORTED_MIN.utc_year(), Ok(MIN_YEAR));
        assert_eq!(Instant::SUPPORTED_MAX.utc_year(), Ok(MAX_YEAR));
        assert_eq!(
            Instant::SUPPORTED_MAX.add_seconds(1).utc_year(),
            Err(TimeError::InstantOutOfRange(Instant::SUPPORTED_MAX.as_unix_seconds() + 1))
        );
        assert!(Instant::from_unix_seconds(i64::MIN).utc_year().is_err());
        assert!(Instant::from_unix_seconds(i64::MAX).utc_year().is_err());
    }

    #[test]
    fn offset_parsing() {
        assert_eq!("+08:00".parse::<UtcOffset>().unwrap(), UtcOffset::CHINA_STANDARD);
        assert_eq!("+0900".parse::<UtcOffset>().unwrap(), UtcOffset::KOREA_STANDARD);
        assert_eq!("-05:30".parse::<UtcOffset>().unwrap().minutes(), -330);
        assert_eq!("Z".parse::<UtcOffset>().unwrap(), UtcOffset::UTC);
        assert!("08:00".parse::<UtcOffset>().is_err());
        assert!("+19:00".parse::<UtcOffset>().is_err());
    }

    #[test]
    fn offset_display() {
        assert_eq!(UtcOffset::CHINA_STANDARD.to_string(), "+08:00");
        assert_eq!(UtcOffset::from_minutes(-330).unwrap().to_string(), "-05:30");
    }

    #[test]
    fn instant_display_is_utc() {
        let i = Instant::from_unix_seconds(86_400 + 3661);
        assert_eq!(i.to_string(), "1970-01-02T01:01:01Z");
    }
}
