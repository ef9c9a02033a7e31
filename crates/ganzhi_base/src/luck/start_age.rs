//! Starting age of the luck cycle.

use ganzhi_time::Instant;

use super::types::{DAYS_PER_LUCK_YEAR, LuckDirection, MAX_STARTING_AGE, MIN_STARTING_AGE};
use crate::error::GanzhiError;
use crate::solar_term::{SolarTermInstant, next_sectional_term, prev_sectional_term};

/// Which sectional term the starting age is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StartAgeRule {
    /// Always the next sectional term after birth (default).
    #[default]
    NextBoundary,
    /// Next term for forward cycles, previous term for reverse cycles.
    Directional,
}

impl StartAgeRule {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NextBoundary => "next_boundary",
            Self::Directional => "directional",
        }
    }
}

/// Sectional term a birth's starting age is measured against.
pub fn boundary_for(
    birth: Instant,
    direction: LuckDirection,
    rule: StartAgeRule,
) -> Result<SolarTermInstant, GanzhiError> {
    match (rule, direction) {
        (StartAgeRule::Directional, LuckDirection::Reverse) => prev_sectional_term(birth),
        _ => next_sectional_term(birth),
    }
}

/// Starting age for a distance in days: one year per three days, floored,
/// clamped to 1..=10.
pub fn starting_age(days: f64) -> u32 {
    let years = (days.abs() / DAYS_PER_LUCK_YEAR).floor();
    (years as u32).clamp(MIN_STARTING_AGE, MAX_STARTING_AGE)
}
