//! Four-pillar derivation: year, month, day and hour pillars of a birth moment.
//!
//! Year and month pillars follow the solar terms, not the civil calendar:
//! the year turns at Start of Spring and each month at a sectional term. The
//! day pillar counts local calendar days, and the hour pillar counts two-hour
//! slots of the local clock.
//!
//! All stem lookups go through fully-populated tables that are checked at
//! compile time. A lookup that still fails at runtime aborts the derivation
//! with [`GanzhiError::Invariant`].

use ganzhi_time::{CivilDate, CivilTime, Instant, UtcOffset};

use crate::branch::EarthlyBranch;
use crate::error::GanzhiError;
use crate::pillar::{FourPillarChart, Pillar};
use crate::sexagenary::{SexagenaryIndex, year_index};
use crate::solar_term::{
    SolarTerm, SolarTermInstant, month_branch, prev_sectional_term, solar_term_instant,
};
use crate::stem::HeavenlyStem;

/// Month stem by year stem (row) and solar-month index − 1 (column).
///
/// "Five tigers": the year stem fixes the stem of the Tiger month, and the
/// following eleven months step forward one stem each.
pub const MONTH_STEM_TABLE: [[HeavenlyStem; 12]; 10] = {
    use HeavenlyStem::*;
    [
        // Jia
        [Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding],
        // Yi
        [Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji],
        // Bing
        [Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin],
        // Ding
        [Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui],
        // Wu
        [Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi],
        // Ji
        [Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding],
        // Geng
        [Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji],
        // Xin
        [Geng, Xin, Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin],
        // Ren
        [Ren, Gui, Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui],
        // Gui
        [Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui, Jia, Yi],
    ]
};

/// Stem of the Zi hour by day stem ("five rats").
///
/// Day stems five apart (Jia/Ji, Yi/Geng, Bing/Xin, Ding/Ren, Wu/Gui) share
/// a start stem; all other pairs must differ.
pub const HOUR_START_STEMS: [HeavenlyStem; 10] = {
    use HeavenlyStem::*;
    [Jia, Bing, Wu, Geng, Ren, Jia, Bing, Wu, Geng, Ren]
};

const fn month_table_is_consistent() -> bool {
    let mut year = 0;
    while year < 10 {
        let tiger = (2 * year + 2) % 10;
        let mut m = 0;
        while m < 12 {
            let stem = MONTH_STEM_TABLE[year][m].index() as usize;
            if stem != (tiger + m) % 10 {
                return false;
            }
            // Month 1 is Yin (branch 2); stem and branch parity must agree.
            if stem % 2 != (m + 2) % 2 {
                return false;
            }
            m += 1;
        }
        year += 1;
    }
    true
}

const fn hour_table_is_consistent() -> bool {
    let mut a = 0;
    while a < 10 {
        let sa = HOUR_START_STEMS[a].index() as usize;
        // Zi is yang, so the start stem must be yang.
        if sa % 2 != 0 || sa != (2 * a) % 10 {
            return false;
        }
        let mut b = 0;
        while b < 10 {
            let sb = HOUR_START_STEMS[b].index() as usize;
            let paired = a % 5 == b % 5;
            if paired != (sa == sb) {
                return false;
            }
            b += 1;
        }
        a += 1;
    }
    true
}

const _: () = assert!(month_table_is_consistent(), "five-tigers table is inconsistent");
const _: () = assert!(hour_table_is_consistent(), "five-rats table conflates day stems");

/// Julian day number of 1900-01-01, a Jia-Xu day.
const DAY_REFERENCE_JDN: i64 = 2_415_021;
/// Cycle position of the reference day.
const DAY_REFERENCE_INDEX: i64 = 10;

/// The solar month containing an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolarMonth {
    /// 1 = Tiger month (opened by Start of Spring) .. 12 = Ox month.
    pub index: u8,
    /// Astrological year the month belongs to.
    pub astrological_year: i32,
    /// Month branch.
    pub branch: EarthlyBranch,
    /// Sectional term that opened the month.
    pub opened_by: SolarTermInstant,
}

/// Astrological year of an instant: the Gregorian year, or the one before
/// it while the instant precedes that year's Start of Spring.
pub fn astrological_year(instant: Instant) -> Result<i32, GanzhiError> {
    let year = instant.utc_year()?;
    let lichun = solar_term_instant(year, SolarTerm::Lichun);
    Ok(if instant < lichun.instant { year - 1 } else { year })
}

/// Solar month containing an instant.
///
/// An instant exactly on a sectional term belongs to the month it opens.
pub fn solar_month_at(instant: Instant) -> Result<SolarMonth, GanzhiError> {
    let opened_by = prev_sectional_term(instant)?;
    let index = opened_by.term.month_index().ok_or_else(|| {
        GanzhiError::invariant(
            "solar month index",
            format!("{} is not a sectional term", opened_by.term.name()),
        )
    })?;
    let branch = month_branch(index).ok_or_else(|| {
        GanzhiError::invariant("month branch", format!("no branch for month {index}"))
    })?;
    // Minor Cold opens the last month of the previous astrological year.
    let astrological_year = if opened_by.term == SolarTerm::Xiaohan {
        opened_by.year - 1
    } else {
        opened_by.year
    };
    Ok(SolarMonth {
        index,
        astrological_year,
        branch,
        opened_by,
    })
}

/// Year pillar of an astrological year.
pub const fn year_pillar_for(astrological_year: i32) -> Pillar {
    Pillar::from_index(year_index(astrological_year))
}

/// Stem of a solar month from the five-tigers table.
pub fn month_stem(year_stem: HeavenlyStem, month_index: u8) -> Result<HeavenlyStem, GanzhiError> {
    let row = MONTH_STEM_TABLE.get(year_stem.index() as usize).copied();
    month_index
        .checked_sub(1)
        .and_then(|col| row?.get(col as usize).copied())
        .ok_or_else(|| {
            GanzhiError::invariant(
                "month stem table",
                format!("year stem {} month {month_index}", year_stem.name()),
            )
        })
}

/// Day pillar of a local calendar date.
pub fn day_pillar_for(date: CivilDate) -> Pillar {
    Pillar::from_index(SexagenaryIndex::from_count(
        date.jdn() - DAY_REFERENCE_JDN + DAY_REFERENCE_INDEX,
    ))
}

/// Hour branch of a local clock hour.
///
/// Slot 0 (Zi) covers 23:00–00:59, so hours 23 and 0 share a branch.
pub fn hour_branch_for(hour: u32) -> Result<EarthlyBranch, GanzhiError> {
    if hour > 23 {
        return Err(ganzhi_time::TimeError::InvalidHour(hour).into());
    }
    let slot = ((hour + 1) / 2) % 12;
    Ok(EarthlyBranch::Zi.offset(slot as i64))
}

/// Stem of the Zi hour for a day stem.
pub fn hour_start_stem(day_stem: HeavenlyStem) -> Result<HeavenlyStem, GanzhiError> {
    HOUR_START_STEMS
        .get(day_stem.index() as usize)
        .copied()
        .ok_or_else(|| {
            GanzhiError::invariant("hour start stem table", format!("day stem {}", day_stem.name()))
        })
}

/// Derive the four pillars of a local civil time.
///
/// `offset` is the local clock's offset from UTC; it places the moment
/// against the solar terms. Day and hour pillars use the local clock as
/// given, and hour 23 stays on its calendar day.
pub fn four_pillars(time: &CivilTime, offset: UtcOffset) -> Result<FourPillarChart, GanzhiError> {
    time.validate()?;
    let instant = Instant::from_civil(time, offset);

    let astro_year = astrological_year(instant)?;
    let year = year_pillar_for(astro_year);

    let solar_month = solar_month_at(instant)?;
    if solar_month.astrological_year != astro_year {
        return Err(GanzhiError::invariant(
            "solar month year",
            format!(
                "month opened by {} {} belongs to {}, year pillar uses {astro_year}",
                solar_month.opened_by.term.name(),
                solar_month.opened_by.year,
                solar_month.astrological_year
            ),
        ));
    }
    let month = Pillar::new(
        month_stem(year.stem(), solar_month.index)?,
        solar_month.branch,
        "month stem table",
    )?;

    let day = day_pillar_for(time.date());

    let hour_branch = hour_branch_for(time.hour)?;
    let hour_stem = hour_start_stem(day.stem())?.offset(hour_branch.index() as i64);
    let hour = Pillar::new(hour_stem, hour_branch, "hour start stem table")?;

    tracing::trace!(%time, %year, %month, %day, %hour, "derived four pillars");
    Ok(FourPillarChart {
        year,
        month,
        day,
        hour,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> CivilTime {
        CivilTime::new(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn hour_slots() {
        assert_eq!(hour_branch_for(23).unwrap(), EarthlyBranch::Zi);
        assert_eq!(hour_branch_for(0).unwrap(), EarthlyBranch::Zi);
        assert_eq!(hour_branch_for(1).unwrap(), EarthlyBranch::Chou);
        assert_eq!(hour_branch_for(2).unwrap(), EarthlyBranch::Chou);
        assert_eq!(hour_branch_for(12).unwrap(), EarthlyBranch::Wu);
        assert_eq!(hour_branch_for(22).unwrap(), EarthlyBranch::Hai);
        assert!(hour_branch_for(24).is_err());
    }

    #[test]
    fn hour_start_stems_pair_by_five() {
        for stem in HeavenlyStem::all() {
            assert_eq!(
                hour_start_stem(*stem).unwrap(),
                hour_start_stem(stem.partner()).unwrap()
            );
        }
        assert_ne!(
            hour_start_stem(HeavenlyStem::Ji).unwrap(),
            hour_start_stem(HeavenlyStem::Wu).unwrap()
        );
    }

    #[test]
    fn month_stem_lookup() {
        assert_eq!(month_stem(HeavenlyStem::Jia, 1).unwrap(), HeavenlyStem::Bing);
        assert_eq!(month_stem(HeavenlyStem::Geng, 4).unwrap(), HeavenlyStem::Xin);
        assert_eq!(month_stem(HeavenlyStem::Ji, 8).unwrap(), HeavenlyStem::Gui);
        assert!(matches!(
            month_stem(HeavenlyStem::Jia, 0),
            Err(GanzhiError::Invariant(_))
        ));
        assert!(matches!(
            month_stem(HeavenlyStem::Jia, 13),
            Err(GanzhiError::Invariant(_))
        ));
    }

    #[test]
    fn day_reference_points() {
        let d = day_pillar_for(CivilDate::new(1900, 1, 1).unwrap());
        assert_eq!(d.to_string(), "Jia-Xu");
        let d = day_pillar_for(CivilDate::new(2000, 1, 1).unwrap());
        assert_eq!(d.index().value(), 54);
        assert_eq!(d.to_string(), "Wu-Wu");
    }

    #[test]
    fn solar_month_of_mid_october_1989() {
        let instant = Instant::from_civil(&t(1989, 10, 6, 12, 0), UtcOffset::CHINA_STANDARD);
        let m = solar_month_at(instant).unwrap();
        assert_eq!(m.index, 8);
        assert_eq!(m.branch, EarthlyBranch::You);
        assert_eq!(m.opened_by.term, SolarTerm::Bailu);
        assert_eq!(m.astrological_year, 1989);
    }

    #[test]
    fn early_january_is_ox_month_of_previous_year() {
        let instant = Instant::from_civil(&t(2024, 1, 20, 12, 0), UtcOffset::CHINA_STANDARD);
        let m = solar_month_at(instant).unwrap();
        assert_eq!(m.index, 12);
        assert_eq!(m.branch, EarthlyBranch::Chou);
        assert_eq!(m.astrological_year, 2023);
        assert_eq!(astrological_year(instant).unwrap(), 2023);
    }

    #[test]
    fn regression_1989_10_06_noon() {
        let chart = four_pillars(&t(1989, 10, 6, 12, 0), UtcOffset::CHINA_STANDARD).unwrap();
        assert_eq!(chart.year.to_string(), "Ji-Si");
        assert_eq!(chart.month.to_string(), "Gui-You");
        assert_eq!(chart.day.to_string(), "Ji-Hai");
        assert_eq!(chart.hour.to_string(), "Geng-Wu");
    }

    #[test]
    fn extreme_years_rejected_before_lookup() {
        for year in [i32::MIN, i32::MAX] {
            let bad = CivilTime {
                year,
                month: 6,
                day: 1,
                hour: 12,
                minute: 0,
                second: 0,
            };
            assert_eq!(
                four_pillars(&bad, UtcOffset::CHINA_STANDARD),
                Err(GanzhiError::Time(ganzhi_time::TimeError::YearOutOfRange(year)))
            );
        }
        let out = Instant::from_unix_seconds(i64::MAX);
        assert!(matches!(astrological_year(out), Err(GanzhiError::Time(_))));
        assert!(matches!(solar_month_at(out), Err(GanzhiError::Time(_))));
    }

    #[test]
    fn rejects_invalid_time_before_lookup() {
        let bad = CivilTime {
            year: 2000,
            month: 1,
            day: 1,
            hour: 24,
            minute: 0,
            second: 0,
        };
        assert!(matches!(
            four_pillars(&bad, UtcOffset::CHINA_STANDARD),
            Err(GanzhiError::Time(_))
        ));
    }
}
