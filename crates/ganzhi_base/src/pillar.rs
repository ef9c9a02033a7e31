//! Pillars (validated stem/branch pairs) and the four-pillar chart.

use std::fmt::{Display, Formatter};

use crate::branch::EarthlyBranch;
use crate::error::GanzhiError;
use crate::sexagenary::SexagenaryIndex;
use crate::stem::HeavenlyStem;

/// A stem/branch pair of matching polarity.
///
/// Fields are private so that every `Pillar` in existence went through the
/// polarity check in [`Pillar::new`] or came from a [`SexagenaryIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Pillar {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
}

impl Pillar {
    /// Pair a stem with a branch, rejecting mixed polarity.
    ///
    /// `lookup` names the table that produced the pair so a failure points at
    /// the defective lookup.
    pub fn new(
        stem: HeavenlyStem,
        branch: EarthlyBranch,
        lookup: &'static str,
    ) -> Result<Self, GanzhiError> {
        if SexagenaryIndex::from_parts(stem, branch).is_none() {
            return Err(GanzhiError::invariant(
                lookup,
                format!(
                    "{}-{} mixes {} stem with {} branch",
                    stem.name(),
                    branch.name(),
                    stem.polarity().name(),
                    branch.polarity().name()
                ),
            ));
        }
        Ok(Self { stem, branch })
    }

    /// The pillar at a cycle position.
    pub const fn from_index(index: SexagenaryIndex) -> Self {
        Self {
            stem: index.stem(),
            branch: index.branch(),
        }
    }

    pub const fn stem(&self) -> HeavenlyStem {
        self.stem
    }

    pub const fn branch(&self) -> EarthlyBranch {
        self.branch
    }

    /// Cycle position of this pillar.
    pub fn index(&self) -> SexagenaryIndex {
        // Construction guarantees matching polarity.
        SexagenaryIndex::from_count(
            6 * self.stem.index() as i64 - 5 * self.branch.index() as i64,
        )
    }

    /// Pillar `steps` positions later in the cycle.
    pub fn offset(&self, steps: i64) -> Self {
        Self::from_index(self.index().offset(steps))
    }

    /// Two-character hanja form, e.g. `庚午`.
    pub fn hanja(&self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    /// Korean reading, e.g. `Gyeong-O`.
    pub fn korean(&self) -> String {
        format!("{}-{}", self.stem.korean(), self.branch.korean())
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stem.name(), self.branch.name())
    }
}

/// Which of the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

/// Year, month, day and hour pillars of one birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FourPillarChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillarChart {
    /// Pillar at a position.
    pub const fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// The four pillars in Year, Month, Day, Hour order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// The day stem ("day master"), the reference point of most analyses.
    pub const fn day_master(&self) -> HeavenlyStem {
        self.day.stem
    }
}

impl Display for FourPillarChart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.year, self.month, self.day, self.hour
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_same_polarity() {
        let p = Pillar::new(HeavenlyStem::Geng, EarthlyBranch::Wu, "test").unwrap();
        assert_eq!(p.index().value(), 6);
        assert_eq!(p.to_string(), "Geng-Wu");
        assert_eq!(p.hanja(), "庚午");
        assert_eq!(p.korean(), "Gyeong-O");
    }

    #[test]
    fn new_rejects_mixed_polarity() {
        let err = Pillar::new(HeavenlyStem::Jia, EarthlyBranch::Chou, "month stem table")
            .unwrap_err();
        match err {
            GanzhiError::Invariant(v) => {
                assert_eq!(v.lookup, "month stem table");
                assert!(v.detail.contains("Jia-Chou"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn index_roundtrip() {
        for i in SexagenaryIndex::all() {
            assert_eq!(Pillar::from_index(i).index(), i);
        }
    }

    #[test]
    fn offset_steps_both_parts() {
        let p = Pillar::from_index(SexagenaryIndex::new(0).unwrap());
        let next = p.offset(1);
        assert_eq!(next.stem(), HeavenlyStem::Yi);
        assert_eq!(next.branch(), EarthlyBranch::Chou);
        let prev = p.offset(-1);
        assert_eq!(prev.stem(), HeavenlyStem::Gui);
        assert_eq!(prev.branch(), EarthlyBranch::Hai);
    }

    #[test]
    fn chart_accessors() {
        let p = |i| Pillar::from_index(SexagenaryIndex::new(i).unwrap());
        let chart = FourPillarChart {
            year: p(6),
            month: p(17),
            day: p(35),
            hour: p(6),
        };
        assert_eq!(chart.get(PillarPosition::Day), p(35));
        assert_eq!(chart.day_master(), HeavenlyStem::Ji);
        assert_eq!(chart.pillars()[1], p(17));
        assert_eq!(chart.to_string(), "Geng-Wu Xin-Si Ji-Hai Geng-Wu");
    }
}
