//! The 12 Earthly Branches (dizhi).
//!
//! Branches name the two-hour slots of the day, the solar months of the
//! year (Zi = the month holding the winter solstice), and the years of the
//! zodiac animal cycle.

use crate::element::{Element, Polarity};

/// The 12 Earthly Branches starting from Zi (Rat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cyclic order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

impl EarthlyBranch {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Hanja character.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Korean reading (Revised Romanization).
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Zi => "Ja",
            Self::Chou => "Chuk",
            Self::Yin => "In",
            Self::Mao => "Myo",
            Self::Chen => "Jin",
            Self::Si => "Sa",
            Self::Wu => "O",
            Self::Wei => "Mi",
            Self::Shen => "Sin",
            Self::You => "Yu",
            Self::Xu => "Sul",
            Self::Hai => "Hae",
        }
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch for a 0-based index, `None` outside 0..12.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// Yang for even indices, Yin for odd.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_ordinal(self.index())
    }

    /// Elemental affinity (main qi).
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
            Self::Chen | Self::Wei | Self::Xu | Self::Chou => Element::Earth,
        }
    }

    /// Branch `steps` positions later in the cycle (negative steps go back).
    pub const fn offset(self, steps: i64) -> Self {
        ALL_BRANCHES[(self.index() as i64 + steps).rem_euclid(12) as usize]
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [EarthlyBranch; 12] {
        &ALL_BRANCHES
    }
}
