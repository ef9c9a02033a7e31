//! The 60-step sexagenary (stem-branch) cycle.
//!
//! Index i pairs stem `i mod 10` with branch `i mod 12`. Because both cycles
//! have even length, a stem only ever meets branches of its own polarity:
//! 60 of the 120 naive stem/branch combinations never occur, and
//! [`SexagenaryIndex::from_parts`] refuses them.
//!
//! The cycle is anchored at CE 4 = Jia-Zi (index 0) for years and at
//! 1900-01-01 = Jia-Xu (index 10) for days.

use crate::branch::EarthlyBranch;
use crate::stem::HeavenlyStem;

/// Reference epoch: CE 4 = Jia-Zi (index 0).
pub const SEXAGENARY_EPOCH_YEAR: i32 = 4;

/// Position in the 60-step cycle, always in 0..60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SexagenaryIndex(u8);

impl SexagenaryIndex {
    /// Number of positions in the cycle.
    pub const COUNT: u8 = 60;

    /// Index from a raw value, `None` outside 0..60.
    pub const fn new(value: u8) -> Option<Self> {
        if value < Self::COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Index for any signed count of cycle steps (wraps both ways).
    pub const fn from_count(count: i64) -> Self {
        Self(count.rem_euclid(Self::COUNT as i64) as u8)
    }

    /// Recover the index of a stem/branch pair.
    ///
    /// Returns `None` for mixed-polarity pairs, which the cycle never
    /// produces. Solves `i ≡ s (mod 10)`, `i ≡ b (mod 12)` as
    /// `i = (6s − 5b) mod 60`.
    pub const fn from_parts(stem: HeavenlyStem, branch: EarthlyBranch) -> Option<Self> {
        let s = stem.index() as i64;
        let b = branch.index() as i64;
        if (s - b) % 2 != 0 {
            return None;
        }
        Some(Self::from_count(6 * s - 5 * b))
    }

    /// Raw value in 0..60.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Stem at this position.
    pub const fn stem(self) -> HeavenlyStem {
        crate::stem::ALL_STEMS[(self.0 % 10) as usize]
    }

    /// Branch at this position.
    pub const fn branch(self) -> EarthlyBranch {
        crate::branch::ALL_BRANCHES[(self.0 % 12) as usize]
    }

    /// Position `steps` later in the cycle (negative steps go back).
    pub const fn offset(self, steps: i64) -> Self {
        Self::from_count(self.0 as i64 + steps)
    }

    /// Iterate all 60 positions in order.
    pub fn all() -> impl Iterator<Item = SexagenaryIndex> {
        (0..Self::COUNT).map(Self)
    }
}

/// Sexagenary index of an astrological year.
pub const fn year_index(astrological_year: i32) -> SexagenaryIndex {
    SexagenaryIndex::from_count(astrological_year as i64 - SEXAGENARY_EPOCH_YEAR as i64)
}
