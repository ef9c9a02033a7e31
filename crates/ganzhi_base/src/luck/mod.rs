//! Luck cycles (daeun): decade-long periods derived from the month pillar.
//!
//! The cycle runs forward or backward through the sexagenary sequence
//! starting one step from the month pillar. Its direction comes from gender
//! and year-stem polarity; its starting age comes from the distance between
//! the birth instant and the nearest month-opening solar term, at three days
//! per year.

pub mod generate;
pub mod start_age;
pub mod types;

pub use generate::{LuckConfig, generate_luck_cycle, luck_direction};
pub use start_age::{StartAgeRule, boundary_for, starting_age};
pub use types::{
    DAYS_PER_LUCK_YEAR, Gender, LUCK_SEGMENT_COUNT, LUCK_SEGMENT_YEARS, LuckCycleResult,
    LuckDirection, LuckSegment, MAX_STARTING_AGE, MIN_STARTING_AGE,
};
