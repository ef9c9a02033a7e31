//! The 10 Heavenly Stems (tiangan).
//!
//! Stems alternate Yang/Yin and run through the five elements in pairs:
//! Jia/Yi Wood, Bing/Ding Fire, Wu/Ji Earth, Geng/Xin Metal, Ren/Gui Water.

use crate::element::{Element, Polarity};

/// The 10 Heavenly Stems starting from Jia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cyclic order (0 = Jia, 9 = Gui).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Hanja character.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Korean reading (Revised Romanization).
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Jia => "Gap",
            Self::Yi => "Eul",
            Self::Bing => "Byeong",
            Self::Ding => "Jeong",
            Self::Wu => "Mu",
            Self::Ji => "Gi",
            Self::Geng => "Gyeong",
            Self::Xin => "Sin",
            Self::Ren => "Im",
            Self::Gui => "Gye",
        }
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem for a 0-based index, `None` outside 0..10.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 10 {
            Some(ALL_STEMS[index as usize])
        } else {
            None
        }
    }

    /// Yang for even indices, Yin for odd.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_ordinal(self.index())
    }

    /// Elemental affinity.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Stem `steps` positions later in the cycle (negative steps go back).
    pub const fn offset(self, steps: i64) -> Self {
        ALL_STEMS[(self.index() as i64 + steps).rem_euclid(10) as usize]
    }

    /// The stem five positions away. Paired stems (Jia/Ji, Yi/Geng, ...)
    /// share an element-combination and a five-rats start stem.
    pub const fn partner(self) -> Self {
        self.offset(5)
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [HeavenlyStem; 10] {
        &ALL_STEMS
    }
}
