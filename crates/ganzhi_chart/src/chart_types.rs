//! Inbound birth descriptor, configuration and the assembled chart.

use std::str::FromStr;

use ganzhi_base::{
    FourPillarChart, Gender, LuckConfig, LuckCycleResult, LunisolarDate, SolarMonth, StartAgeRule,
};
use ganzhi_time::{CivilTime, Instant, UtcOffset};

/// Calendar the birth date is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CalendarType {
    /// Gregorian date.
    #[default]
    Solar,
    /// Chinese lunisolar date.
    Lunar,
}

impl CalendarType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Solar => "solar",
            Self::Lunar => "lunar",
        }
    }
}

impl FromStr for CalendarType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "solar" | "gregorian" => Ok(Self::Solar),
            "lunar" | "lunisolar" => Ok(Self::Lunar),
            _ => Err("calendar must be solar or lunar"),
        }
    }
}

/// Birth data as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDescriptor {
    pub year: i32,
    /// Month 1–12 in `calendar`.
    pub month: u32,
    /// Day of month in `calendar`.
    pub day: u32,
    /// Local clock hour, 0–23.
    pub hour: u32,
    /// Local clock minute, 0–59; `None` reads as 0.
    pub minute: Option<u32>,
    pub calendar: CalendarType,
    /// Lunar input only: the date is in the leap month.
    pub is_leap_month: bool,
    pub gender: Gender,
}

impl BirthDescriptor {
    /// Gregorian birth descriptor.
    pub const fn solar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: Option<u32>,
        gender: Gender,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            calendar: CalendarType::Solar,
            is_leap_month: false,
            gender,
        }
    }

    /// Lunisolar birth descriptor.
    pub const fn lunar(
        year: i32,
        month: u32,
        day: u32,
        is_leap_month: bool,
        hour: u32,
        minute: Option<u32>,
        gender: Gender,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            calendar: CalendarType::Lunar,
            is_leap_month,
            gender,
        }
    }
}

/// Configuration for chart computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartConfig {
    /// Offset of the clock the birth time was read from.
    pub utc_offset: UtcOffset,
    /// Boundary used for the luck-cycle starting age.
    pub start_age_rule: StartAgeRule,
}

impl ChartConfig {
    /// Luck-cycle settings carried by this configuration.
    pub const fn luck_config(&self) -> LuckConfig {
        LuckConfig {
            start_age_rule: self.start_age_rule,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            utc_offset: UtcOffset::CHINA_STANDARD,
            start_age_rule: StartAgeRule::NextBoundary,
        }
    }
}

/// Everything derived from one birth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BirthChart {
    /// Local Gregorian birth time.
    pub birth: CivilTime,
    /// Clock offset the birth time was read on.
    pub utc_offset: UtcOffset,
    /// Birth instant.
    pub instant: Instant,
    pub gender: Gender,
    /// Lunisolar date of the local birth day.
    pub lunisolar: LunisolarDate,
    /// Solar month of the birth instant.
    pub solar_month: SolarMonth,
    pub pillars: FourPillarChart,
    pub luck: LuckCycleResult,
}

impl BirthChart {
    /// True when any part of the chart came from a fallback model.
    pub const fn is_approximate(&self) -> bool {
        self.lunisolar.approximate
            || self.solar_month.opened_by.approximate
            || self.luck.boundary.approximate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_parses() {
        assert_eq!("Lunar".parse::<CalendarType>(), Ok(CalendarType::Lunar));
        assert_eq!("gregorian".parse::<CalendarType>(), Ok(CalendarType::Solar));
        assert!("julian".parse::<CalendarType>().is_err());
    }

    #[test]
    fn default_config_uses_beijing_time() {
        let c = ChartConfig::default();
        assert_eq!(c.utc_offset, UtcOffset::CHINA_STANDARD);
        assert_eq!(c.start_age_rule, StartAgeRule::NextBoundary);
        assert_eq!(c.luck_config(), LuckConfig::default());
    }

    #[test]
    fn descriptor_constructors() {
        let s = BirthDescriptor::solar(1990, 5, 15, 10, None, Gender::Male);
        assert_eq!(s.calendar, CalendarType::Solar);
        assert!(!s.is_leap_month);
        let l = BirthDescriptor::lunar(2023, 2, 1, true, 10, Some(5), Gender::Female);
        assert_eq!(l.calendar, CalendarType::Lunar);
        assert!(l.is_leap_month);
    }
}
