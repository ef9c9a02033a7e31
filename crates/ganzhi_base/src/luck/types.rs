//! Core types for luck-cycle calculations.

use std::fmt::{Display, Formatter};

use crate::pillar::Pillar;
use crate::solar_term::SolarTermInstant;

/// Number of segments in a luck cycle.
pub const LUCK_SEGMENT_COUNT: usize = 8;

/// Years spanned by each segment.
pub const LUCK_SEGMENT_YEARS: u32 = 10;

/// Days of distance to the boundary term that count as one year of age.
pub const DAYS_PER_LUCK_YEAR: f64 = 3.0;

/// Smallest starting age.
pub const MIN_STARTING_AGE: u32 = 1;

/// Largest starting age.
pub const MAX_STARTING_AGE: u32 = 10;

/// Gender of the chart holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            _ => Err("gender must be male or female"),
        }
    }
}

/// Direction the cycle walks through the sexagenary sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LuckDirection {
    Forward,
    Reverse,
}

impl LuckDirection {
    /// Step applied to the cycle index per segment.
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "Forward",
            Self::Reverse => "Reverse",
        }
    }
}

/// One decade of the luck cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LuckSegment {
    /// Ruling pillar.
    pub pillar: Pillar,
    /// First age of the segment, inclusive.
    pub start_age: u32,
    /// Last age of the segment, inclusive.
    pub end_age: u32,
    /// Direction of the whole cycle.
    pub direction: LuckDirection,
    /// 1-indexed position in the cycle.
    pub order: u8,
}

impl LuckSegment {
    /// Whether `age` falls inside this segment.
    pub const fn contains_age(&self, age: u32) -> bool {
        age >= self.start_age && age <= self.end_age
    }
}

impl Display for LuckSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (ages {}-{})", self.pillar, self.start_age, self.end_age)
    }
}

/// A complete luck cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LuckCycleResult {
    /// Segments in age order.
    pub segments: [LuckSegment; LUCK_SEGMENT_COUNT],
    /// Direction shared by all segments.
    pub direction: LuckDirection,
    /// Age at which the first segment begins.
    pub starting_age: u32,
    /// Segment containing the supplied current age, if any.
    pub current_segment_index: Option<usize>,
    /// Sectional term the starting age was measured against.
    pub boundary: SolarTermInstant,
    /// Days between birth and `boundary`.
    pub days_to_boundary: f64,
}

impl LuckCycleResult {
    /// Index of the segment containing `age`, `None` before the first or
    /// after the last segment.
    pub fn segment_index_for_age(&self, age: u32) -> Option<usize> {
        self.segments.iter().position(|s| s.contains_age(age))
    }

    /// Segment containing `age`.
    pub fn segment_for_age(&self, age: u32) -> Option<&LuckSegment> {
        self.segment_index_for_age(age).map(|i| &self.segments[i])
    }

    /// Segment containing the supplied current age.
    pub fn current_segment(&self) -> Option<&LuckSegment> {
        self.current_segment_index.and_then(|i| self.segments.get(i))
    }
}
