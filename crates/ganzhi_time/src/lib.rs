//! Civil calendar arithmetic for the ganzhi engine.
//!
//! This crate provides:
//! - Proleptic Gregorian date ↔ Julian Day Number conversions
//! - Validated `CivilDate` / `CivilTime` wall-clock values
//! - `UtcOffset` for fixed local clocks
//! - An `Instant` type (integer UTC seconds) for exact boundary comparisons

pub mod civil_time;
pub mod error;
pub mod instant;
pub mod julian;

pub use civil_time::{CivilDate, CivilTime};
pub use error::TimeError;
pub use instant::{Instant, UtcOffset};
pub use julian::{
    MAX_YEAR, MIN_YEAR, SECONDS_PER_DAY, UNIX_EPOCH_JDN, calendar_to_jdn, days_in_month,
    is_leap_year, is_supported_year, jdn_to_calendar,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn civil_instant_roundtrip() {
        let t = CivilTime::new(1989, 10, 6, 12, 0, 0).unwrap();
        let i = Instant::from_civil(&t, UtcOffset::CHINA_STANDARD);
        assert_eq!(i.to_civil(UtcOffset::CHINA_STANDARD), t);
    }

    #[test]
    fn date_jdn_matches_free_function() {
        let d = CivilDate::new(2024, 2, 10).unwrap();
        assert_eq!(d.jdn(), calendar_to_jdn(2024, 2, 10));
    }
}
