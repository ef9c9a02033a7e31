//! The five elements (wuxing) and yin/yang polarity.

/// One of the five elemental phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generating order (Wood → Fire → Earth → Metal → Water).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Hanja character.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index in generating order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one generates (Wood feeds Fire, ...).
    pub const fn generates(self) -> Self {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one overcomes (Wood parts Earth, ...).
    pub const fn overcomes(self) -> Self {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }
}

/// Yang (active) or Yin (receptive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of a cyclic ordinal: even = Yang, odd = Yin.
    pub const fn from_ordinal(ordinal: u8) -> Self {
        if ordinal % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn generating_cycle_closes() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, Element::Wood);
        assert_eq!(Element::Water.generates(), Element::Wood);
    }

    #[test]
    fn overcoming_pairs() {
        assert_eq!(Element::Wood.overcomes(), Element::Earth);
        assert_eq!(Element::Metal.overcomes(), Element::Wood);
        assert_eq!(Element::Water.overcomes(), Element::Fire);
    }

    #[test]
    fn polarity_from_ordinal() {
        assert_eq!(Polarity::from_ordinal(0), Polarity::Yang);
        assert_eq!(Polarity::from_ordinal(7), Polarity::Yin);
        assert!(Polarity::Yang.is_yang());
        assert!(!Polarity::Yin.is_yang());
    }
}
