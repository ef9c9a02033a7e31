//! The 24 solar terms (jieqi) and their resolution to instants.
//!
//! Solar terms mark the Sun's apparent ecliptic longitude crossing each
//! multiple of 15 deg. Terms are numbered in Gregorian-year order, Minor
//! Cold (285 deg, early January) first and Winter Solstice (270 deg, late
//! December) last, so that the first term of year Y+1 always follows the
//! last term of year Y.
//!
//! The 12 *sectional* terms (jie), the even positions in this order, open
//! the solar months. Counted from Start of Spring they are the odd-numbered
//! terms.
//!
//! Years 1900–2100 resolve from a precomputed table to the second. Other
//! years fall back to each term's nominal civil date at noon on the 120 deg E
//! reference meridian; results carry `approximate = true`.

use ganzhi_time::{CivilTime, Instant, UtcOffset, calendar_to_jdn};

use crate::branch::EarthlyBranch;
use crate::error::GanzhiError;
use crate::solar_term_data::{SOLAR_TERM_OFFSETS, SOLAR_TERM_FIRST_YEAR, SOLAR_TERM_LAST_YEAR};

/// The 24 solar terms in canonical Gregorian-year order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SolarTerm {
    Xiaohan,
    Dahan,
    Lichun,
    Yushui,
    Jingzhe,
    Chunfen,
    Qingming,
    Guyu,
    Lixia,
    Xiaoman,
    Mangzhong,
    Xiazhi,
    Xiaoshu,
    Dashu,
    Liqiu,
    Chushu,
    Bailu,
    Qiufen,
    Hanlu,
    Shuangjiang,
    Lidong,
    Xiaoxue,
    Daxue,
    Dongzhi,
}

/// All 24 terms in canonical order (0 = Minor Cold, 23 = Winter Solstice).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Xiaohan,
    SolarTerm::Dahan,
    SolarTerm::Lichun,
    SolarTerm::Yushui,
    SolarTerm::Jingzhe,
    SolarTerm::Chunfen,
    SolarTerm::Qingming,
    SolarTerm::Guyu,
    SolarTerm::Lixia,
    SolarTerm::Xiaoman,
    SolarTerm::Mangzhong,
    SolarTerm::Xiazhi,
    SolarTerm::Xiaoshu,
    SolarTerm::Dashu,
    SolarTerm::Liqiu,
    SolarTerm::Chushu,
    SolarTerm::Bailu,
    SolarTerm::Qiufen,
    SolarTerm::Hanlu,
    SolarTerm::Shuangjiang,
    SolarTerm::Lidong,
    SolarTerm::Xiaoxue,
    SolarTerm::Daxue,
    SolarTerm::Dongzhi,
];

/// Nominal (month, day) of each term, used outside the reference table.
const NOMINAL_DATES: [(u32, u32); 24] = [
    (1, 6),
    (1, 20),
    (2, 4),
    (2, 19),
    (3, 6),
    (3, 21),
    (4, 5),
    (4, 20),
    (5, 6),
    (5, 21),
    (6, 6),
    (6, 21),
    (7, 7),
    (7, 23),
    (8, 8),
    (8, 23),
    (9, 8),
    (9, 23),
    (10, 8),
    (10, 23),
    (11, 7),
    (11, 22),
    (12, 7),
    (12, 22),
];

impl SolarTerm {
    /// 0-based canonical index (Xiaohan=0 .. Dongzhi=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term for a canonical index, `None` outside 0..24.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 24 {
            Some(ALL_SOLAR_TERMS[index as usize])
        } else {
            None
        }
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xiaohan => "Xiaohan",
            Self::Dahan => "Dahan",
            Self::Lichun => "Lichun",
            Self::Yushui => "Yushui",
            Self::Jingzhe => "Jingzhe",
            Self::Chunfen => "Chunfen",
            Self::Qingming => "Qingming",
            Self::Guyu => "Guyu",
            Self::Lixia => "Lixia",
            Self::Xiaoman => "Xiaoman",
            Self::Mangzhong => "Mangzhong",
            Self::Xiazhi => "Xiazhi",
            Self::Xiaoshu => "Xiaoshu",
            Self::Dashu => "Dashu",
            Self::Liqiu => "Liqiu",
            Self::Chushu => "Chushu",
            Self::Bailu => "Bailu",
            Self::Qiufen => "Qiufen",
            Self::Hanlu => "Hanlu",
            Self::Shuangjiang => "Shuangjiang",
            Self::Lidong => "Lidong",
            Self::Xiaoxue => "Xiaoxue",
            Self::Daxue => "Daxue",
            Self::Dongzhi => "Dongzhi",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Xiaohan => "Minor Cold",
            Self::Dahan => "Major Cold",
            Self::Lichun => "Start of Spring",
            Self::Yushui => "Rain Water",
            Self::Jingzhe => "Awakening of Insects",
            Self::Chunfen => "Spring Equinox",
            Self::Qingming => "Clear and Bright",
            Self::Guyu => "Grain Rain",
            Self::Lixia => "Start of Summer",
            Self::Xiaoman => "Grain Buds",
            Self::Mangzhong => "Grain in Ear",
            Self::Xiazhi => "Summer Solstice",
            Self::Xiaoshu => "Minor Heat",
            Self::Dashu => "Major Heat",
            Self::Liqiu => "Start of Autumn",
            Self::Chushu => "End of Heat",
            Self::Bailu => "White Dew",
            Self::Qiufen => "Autumn Equinox",
            Self::Hanlu => "Cold Dew",
            Self::Shuangjiang => "Frost's Descent",
            Self::Lidong => "Start of Winter",
            Self::Xiaoxue => "Minor Snow",
            Self::Daxue => "Major Snow",
            Self::Dongzhi => "Winter Solstice",
        }
    }

    /// Hanja name.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Xiaohan => "小寒",
            Self::Dahan => "大寒",
            Self::Lichun => "立春",
            Self::Yushui => "雨水",
            Self::Jingzhe => "驚蟄",
            Self::Chunfen => "春分",
            Self::Qingming => "清明",
            Self::Guyu => "穀雨",
            Self::Lixia => "立夏",
            Self::Xiaoman => "小滿",
            Self::Mangzhong => "芒種",
            Self::Xiazhi => "夏至",
            Self::Xiaoshu => "小暑",
            Self::Dashu => "大暑",
            Self::Liqiu => "立秋",
            Self::Chushu => "處暑",
            Self::Bailu => "白露",
            Self::Qiufen => "秋分",
            Self::Hanlu => "寒露",
            Self::Shuangjiang => "霜降",
            Self::Lidong => "立冬",
            Self::Xiaoxue => "小雪",
            Self::Daxue => "大雪",
            Self::Dongzhi => "冬至",
        }
    }

    /// Apparent solar longitude at which the term begins, in degrees.
    pub const fn longitude_deg(self) -> u16 {
        (285 + 15 * self.index() as u16) % 360
    }

    /// True for the 12 month-opening (jie) terms.
    pub const fn is_sectional(self) -> bool {
        self.index() % 2 == 0
    }

    /// Solar-month index (1 = Tiger month .. 12 = Ox month) opened by this
    /// term, `None` for the 12 principal (zhongqi) terms.
    pub const fn month_index(self) -> Option<u8> {
        if !self.is_sectional() {
            return None;
        }
        match self.index() / 2 {
            0 => Some(12),
            n => Some(n),
        }
    }

    /// Nominal Gregorian (month, day) of the term.
    pub const fn nominal_date(self) -> (u32, u32) {
        NOMINAL_DATES[self.index() as usize]
    }
}

/// Branch of a solar month: month 1 is Yin (Tiger), month 12 is Chou (Ox).
pub const fn month_branch(month_index: u8) -> Option<EarthlyBranch> {
    if month_index == 0 || month_index > 12 {
        return None;
    }
    Some(EarthlyBranch::Yin.offset(month_index as i64 - 1))
}

/// A solar term resolved to an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolarTermInstant {
    /// Gregorian year the term falls in.
    pub year: i32,
    /// The term.
    pub term: SolarTerm,
    /// UTC instant of the term.
    pub instant: Instant,
    /// True when resolved by the nominal-date fallback.
    pub approximate: bool,
}

/// Whether `year` resolves from the precomputed table.
pub const fn is_solar_term_year_covered(year: i32) -> bool {
    year >= SOLAR_TERM_FIRST_YEAR && year <= SOLAR_TERM_LAST_YEAR
}

/// Resolve one solar term of one Gregorian year.
///
/// Never fails: years outside the table fall back to the term's nominal date
/// at 12:00 on the +08:00 reference meridian.
pub fn solar_term_instant(year: i32, term: SolarTerm) -> SolarTermInstant {
    if is_solar_term_year_covered(year) {
        let row = &SOLAR_TERM_OFFSETS[(year - SOLAR_TERM_FIRST_YEAR) as usize];
        let year_start = Instant::utc_midnight(calendar_to_jdn(year, 1, 1));
        return SolarTermInstant {
            year,
            term,
            instant: year_start.add_seconds(row[term.index() as usize] as i64),
            approximate: false,
        };
    }

    tracing::debug!(
        year,
        term = term.name(),
        "solar term outside reference table, using nominal date"
    );
    let (month, day) = term.nominal_date();
    let noon = CivilTime {
        year,
        month,
        day,
        hour: 12,
        minute: 0,
        second: 0,
    };
    SolarTermInstant {
        year,
        term,
        instant: Instant::from_civil(&noon, UtcOffset::CHINA_STANDARD),
        approximate: true,
    }
}

/// All 24 terms of a Gregorian year in canonical order.
pub fn solar_terms_for_year(year: i32) -> [SolarTermInstant; 24] {
    std::array::from_fn(|i| solar_term_instant(year, ALL_SOLAR_TERMS[i]))
}

/// First term strictly after `instant` that satisfies `accept`.
fn first_after(
    instant: Instant,
    accept: impl Fn(SolarTerm) -> bool,
) -> Result<SolarTermInstant, GanzhiError> {
    let year = instant.utc_year()?;
    // Every term of year Y lies inside Y in UTC, so Y and Y+1 always hold
    // a later term.
    for y in [year, year + 1] {
        for term in ALL_SOLAR_TERMS.into_iter().filter(|t| accept(*t)) {
            let resolved = solar_term_instant(y, term);
            if resolved.instant > instant {
                return Ok(resolved);
            }
        }
    }
    Err(GanzhiError::invariant(
        "solar term search",
        format!("no accepted term after {instant} in {year}..={}", year + 1),
    ))
}

/// Last term at or before `instant` that satisfies `accept`.
fn last_at_or_before(
    instant: Instant,
    accept: impl Fn(SolarTerm) -> bool,
) -> Result<SolarTermInstant, GanzhiError> {
    let year = instant.utc_year()?;
    for y in [year, year - 1] {
        for term in ALL_SOLAR_TERMS.into_iter().rev().filter(|t| accept(*t)) {
            let resolved = solar_term_instant(y, term);
            if resolved.instant <= instant {
                return Ok(resolved);
            }
        }
    }
    Err(GanzhiError::invariant(
        "solar term search",
        format!("no accepted term at or before {instant} in {}..={year}", year - 1),
    ))
}

/// The first of the 24 terms strictly after `instant`.
///
/// Fails with a time error when `instant` lies outside the supported year
/// range.
pub fn next_solar_term(instant: Instant) -> Result<SolarTermInstant, GanzhiError> {
    first_after(instant, |_| true)
}

/// The first month-opening term strictly after `instant`.
pub fn next_sectional_term(instant: Instant) -> Result<SolarTermInstant, GanzhiError> {
    first_after(instant, SolarTerm::is_sectional)
}

/// The last month-opening term at or before `instant`.
///
/// A term instant belongs to the month it opens, so an `instant` equal to a
/// term instant returns that term.
pub fn prev_sectional_term(instant: Instant) -> Result<SolarTermInstant, GanzhiError> {
    last_at_or_before(instant, SolarTerm::is_sectional)
}
