//! Luck-cycle generation.

use ganzhi_time::Instant;

use super::start_age::{StartAgeRule, boundary_for, starting_age};
use super::types::{
    Gender, LUCK_SEGMENT_COUNT, LUCK_SEGMENT_YEARS, LuckCycleResult, LuckDirection, LuckSegment,
};
use crate::element::Polarity;
use crate::error::GanzhiError;
use crate::pillar::{FourPillarChart, Pillar};
use crate::stem::HeavenlyStem;

/// Configuration for luck-cycle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LuckConfig {
    /// Boundary used for the starting age.
    pub start_age_rule: StartAgeRule,
}

/// Cycle direction: forward for a yang-year male or a yin-year female,
/// reverse otherwise.
pub const fn luck_direction(gender: Gender, year_stem: HeavenlyStem) -> LuckDirection {
    match (gender, year_stem.polarity()) {
        (Gender::Male, Polarity::Yang) | (Gender::Female, Polarity::Yin) => LuckDirection::Forward,
        _ => LuckDirection::Reverse,
    }
}

/// Generate the eight-segment luck cycle of a birth.
///
/// Segment `i` carries the month pillar stepped `i + 1` times in the cycle
/// direction and spans ages `start + 10i ..= start + 10i + 9`.
/// `current_age`, when given, selects `current_segment_index`; an age
/// outside the cycle leaves it `None`.
pub fn generate_luck_cycle(
    birth: Instant,
    gender: Gender,
    pillars: &FourPillarChart,
    config: &LuckConfig,
    current_age: Option<u32>,
) -> Result<LuckCycleResult, GanzhiError> {
    let direction = luck_direction(gender, pillars.year.stem());
    let boundary = boundary_for(birth, direction, config.start_age_rule)?;
    let days_to_boundary = birth.days_until(boundary.instant).abs();
    let first_age = starting_age(days_to_boundary);

    let month = pillars.month;
    let mut segments = [LuckSegment {
        pillar: month,
        start_age: first_age,
        end_age: first_age,
        direction,
        order: 0,
    }; LUCK_SEGMENT_COUNT];
    for (i, segment) in segments.iter_mut().enumerate() {
        let steps = (i as i64 + 1) * direction.step();
        // Stem and branch step independently; the pair is re-validated.
        let pillar = Pillar::new(
            month.stem().offset(steps),
            month.branch().offset(steps),
            "luck segment pillar",
        )?;
        let start_age = first_age + LUCK_SEGMENT_YEARS * i as u32;
        *segment = LuckSegment {
            pillar,
            start_age,
            end_age: start_age + LUCK_SEGMENT_YEARS - 1,
            direction,
            order: i as u8 + 1,
        };
    }

    let mut result = LuckCycleResult {
        segments,
        direction,
        starting_age: first_age,
        current_segment_index: None,
        boundary,
        days_to_boundary,
    };
    result.current_segment_index = current_age.and_then(|age| result.segment_index_for_age(age));

    tracing::debug!(
        direction = direction.name(),
        starting_age = first_age,
        boundary = boundary.term.name(),
        days_to_boundary,
        "generated luck cycle"
    );
    Ok(result)
}
