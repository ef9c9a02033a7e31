//! Birth descriptor → birth chart.

use ganzhi_base::{four_pillars, generate_luck_cycle, solar_month_at, to_gregorian, to_lunisolar};
use ganzhi_time::{CivilDate, CivilTime, Instant, TimeError};

use crate::chart_types::{BirthChart, BirthDescriptor, CalendarType, ChartConfig};
use crate::error::ChartError;

/// Resolve a birth descriptor to a local Gregorian civil time.
///
/// Hour and minute are checked first, so a bad clock reading is reported
/// before any calendar lookup. Lunar dates are converted through the
/// lunisolar tables.
pub fn normalize_birth(desc: &BirthDescriptor) -> Result<CivilTime, ChartError> {
    if desc.hour > 23 {
        return Err(TimeError::InvalidHour(desc.hour).into());
    }
    let minute = desc.minute.unwrap_or(0);
    if minute > 59 {
        return Err(TimeError::InvalidMinute(minute).into());
    }

    let date = match desc.calendar {
        CalendarType::Solar => {
            if desc.is_leap_month {
                return Err(ChartError::InvalidDescriptor(
                    "leap month flag applies only to lunar dates",
                ));
            }
            CivilDate::new(desc.year, desc.month, desc.day)?
        }
        CalendarType::Lunar => {
            let month = u8::try_from(desc.month)
                .map_err(|_| ChartError::InvalidDescriptor("lunar month out of range"))?;
            let day = u8::try_from(desc.day)
                .map_err(|_| ChartError::InvalidDescriptor("lunar day out of range"))?;
            let date = to_gregorian(desc.year, month, day, desc.is_leap_month)?;
            tracing::debug!(
                lunar_year = desc.year,
                lunar_month = month,
                lunar_day = day,
                leap = desc.is_leap_month,
                %date,
                "resolved lunar birth date"
            );
            date
        }
    };

    Ok(CivilTime::new(date.year, date.month, date.day, desc.hour, minute, 0)?)
}

/// Compute the full chart of a birth.
///
/// `current_age`, when known, marks the running luck segment; see
/// [`age_on`].
pub fn chart_for_birth(
    desc: &BirthDescriptor,
    config: &ChartConfig,
    current_age: Option<u32>,
) -> Result<BirthChart, ChartError> {
    let birth = normalize_birth(desc)?;
    let instant = Instant::from_civil(&birth, config.utc_offset);

    let pillars = four_pillars(&birth, config.utc_offset)?;
    let solar_month = solar_month_at(instant)?;
    let lunisolar = to_lunisolar(birth.date())?;
    let luck = generate_luck_cycle(
        instant,
        desc.gender,
        &pillars,
        &config.luck_config(),
        current_age,
    )?;

    let chart = BirthChart {
        birth,
        utc_offset: config.utc_offset,
        instant,
        gender: desc.gender,
        lunisolar,
        solar_month,
        pillars,
        luck,
    };
    if chart.is_approximate() {
        tracing::debug!(%birth, "chart uses fallback calendar data");
    }
    tracing::debug!(%birth, pillars = %chart.pillars, "computed birth chart");
    Ok(chart)
}

/// Completed years between a birth date and `on`, `None` if `on` is
/// before the birth date.
pub fn age_on(birth: CivilDate, on: CivilDate) -> Option<u32> {
    if on < birth {
        return None;
    }
    let mut years = on.year - birth.year;
    if (on.month, on.day) < (birth.month, birth.day) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganzhi_base::Gender;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn minute_defaults_to_zero() {
        let desc = BirthDescriptor::solar(1990, 5, 15, 10, None, Gender::Male);
        let t = normalize_birth(&desc).unwrap();
        assert_eq!((t.hour, t.minute, t.second), (10, 0, 0));
    }

    #[test]
    fn clock_checked_before_date() {
        // Invalid date and invalid hour: the hour is reported.
        let desc = BirthDescriptor::solar(1990, 2, 30, 24, None, Gender::Male);
        assert_eq!(
            normalize_birth(&desc),
            Err(ChartError::Time(TimeError::InvalidHour(24)))
        );
        let desc = BirthDescriptor::solar(1990, 2, 30, 10, Some(60), Gender::Male);
        assert_eq!(
            normalize_birth(&desc),
            Err(ChartError::Time(TimeError::InvalidMinute(60)))
        );
    }

    #[test]
    fn invalid_solar_date() {
        let desc = BirthDescriptor::solar(1990, 2, 30, 10, None, Gender::Male);
        assert!(matches!(normalize_birth(&desc), Err(ChartError::Time(_))));
    }

    #[test]
    fn lunar_leap_month_resolves() {
        let desc = BirthDescriptor::lunar(2023, 2, 1, true, 8, Some(15), Gender::Female);
        let t = normalize_birth(&desc).unwrap();
        assert_eq!(t.date(), date(2023, 3, 22));
        assert_eq!((t.hour, t.minute), (8, 15));
    }

    #[test]
    fn leap_flag_rejected_for_solar() {
        let mut desc = BirthDescriptor::solar(1990, 5, 15, 10, None, Gender::Male);
        desc.is_leap_month = true;
        assert!(matches!(
            normalize_birth(&desc),
            Err(ChartError::InvalidDescriptor(_))
        ));
    }

    #[test]
    fn ages() {
        let birth = date(1990, 5, 15);
        assert_eq!(age_on(birth, date(1990, 5, 15)), Some(0));
        assert_eq!(age_on(birth, date(2024, 5, 14)), Some(33));
        assert_eq!(age_on(birth, date(2024, 5, 15)), Some(34));
        assert_eq!(age_on(birth, date(1990, 5, 14)), None);
        // Feb 29 birthdays complete a year on Mar 1 in common years.
        let leap = date(2000, 2, 29);
        assert_eq!(age_on(leap, date(2001, 2, 28)), Some(0));
        assert_eq!(age_on(leap, date(2001, 3, 1)), Some(1));
    }
}
