//! Stem-branch (ganzhi) calculations for four-pillar charts.
//!
//! This crate provides:
//! - The 10 Heavenly Stems, 12 Earthly Branches and the 60-step cycle
//! - Solar-term instants for 1900–2100 with a nominal-date fallback
//! - Gregorian ↔ Chinese lunisolar conversion for 1900–2100 with a
//!   mean-lunation fallback
//! - Year, month, day and hour pillar derivation
//! - Decade luck cycles
//!
//! Everything here is pure: reference tables are compiled-in constants and
//! no function holds state between calls.

pub mod branch;
pub mod element;
pub mod error;
pub mod four_pillars;
pub mod luck;
pub mod lunisolar;
mod lunisolar_data;
pub mod pillar;
pub mod sexagenary;
pub mod solar_term;
mod solar_term_data;
pub mod stem;

pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::{GanzhiError, InvariantViolation};
pub use four_pillars::{
    HOUR_START_STEMS, MONTH_STEM_TABLE, SolarMonth, astrological_year, day_pillar_for,
    four_pillars, hour_branch_for, hour_start_stem, month_stem, solar_month_at, year_pillar_for,
};
pub use luck::{
    DAYS_PER_LUCK_YEAR, Gender, LUCK_SEGMENT_COUNT, LUCK_SEGMENT_YEARS, LuckConfig,
    LuckCycleResult, LuckDirection, LuckSegment, MAX_STARTING_AGE, MIN_STARTING_AGE,
    StartAgeRule, boundary_for, generate_luck_cycle, luck_direction, starting_age,
};
pub use lunisolar::{
    LunisolarDate, MEAN_SYNODIC_MONTH, is_lunar_year_covered, leap_month, lunar_month_days,
    lunar_new_year, lunar_year_days, to_gregorian, to_lunisolar,
};
pub use lunisolar_data::{LUNAR_FIRST_YEAR, LUNAR_LAST_YEAR};
pub use pillar::{FourPillarChart, Pillar, PillarPosition};
pub use sexagenary::{SEXAGENARY_EPOCH_YEAR, SexagenaryIndex, year_index};
pub use solar_term::{
    ALL_SOLAR_TERMS, SolarTerm, SolarTermInstant, is_solar_term_year_covered, month_branch,
    next_sectional_term, next_solar_term, prev_sectional_term, solar_term_instant,
    solar_terms_for_year,
};
pub use solar_term_data::{SOLAR_TERM_FIRST_YEAR, SOLAR_TERM_LAST_YEAR};
pub use stem::{ALL_STEMS, HeavenlyStem};
