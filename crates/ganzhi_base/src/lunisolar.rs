//! Gregorian ↔ Chinese lunisolar date conversion.
//!
//! Lunar years 1900–2100 are converted exactly from the reference table.
//! Outside it a mean-lunation model takes over: months of 29.530588853 days
//! and years of 12.368267 months. The model is anchored to the table's edges
//! (lunar 1900-01-01 for earlier years, lunar 2101-01-01 for later ones), so
//! the two meet without a gap or an overlap. In the model a 13-month year
//! reports its last month as leap month 12.

use std::fmt::{Display, Formatter};

use ganzhi_time::{CivilDate, is_supported_year};

use crate::error::GanzhiError;
use crate::lunisolar_data::{LUNAR_FIRST_YEAR, LUNAR_LAST_YEAR, LUNAR_YEARS, LunarYearData};

/// Mean synodic month in days.
pub const MEAN_SYNODIC_MONTH: f64 = 29.530588853;

/// Mean number of lunations per tropical year.
const MEAN_MONTHS_PER_YEAR: f64 = 12.368267;

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LunisolarDate {
    /// Lunar year, numbered by the Gregorian year its new year falls in.
    pub year: i32,
    /// Month 1–12.
    pub month: u8,
    /// Day 1–30.
    pub day: u8,
    /// True for the intercalary month that repeats `month`.
    pub is_leap_month: bool,
    /// True when produced by the mean-lunation model.
    pub approximate: bool,
}

impl Display for LunisolarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let leap = if self.is_leap_month { "leap " } else { "" };
        write!(f, "{}-{}{:02}-{:02}", self.year, leap, self.month, self.day)?;
        if self.approximate {
            write!(f, " (approx.)")?;
        }
        Ok(())
    }
}

/// Whether a lunar year converts from the reference table.
pub const fn is_lunar_year_covered(year: i32) -> bool {
    year >= LUNAR_FIRST_YEAR && year <= LUNAR_LAST_YEAR
}

fn table_entry(year: i32) -> Option<&'static LunarYearData> {
    if is_lunar_year_covered(year) {
        LUNAR_YEARS.get((year - LUNAR_FIRST_YEAR) as usize)
    } else {
        None
    }
}

fn table_new_year_jdn(year: i32, data: &LunarYearData) -> i64 {
    ganzhi_time::calendar_to_jdn(year, data.new_year_month as u32, data.new_year_day as u32)
}

/// Sequence position of a month inside a table year, `None` if the year has
/// no such month.
fn table_slot(data: &LunarYearData, month: u8, is_leap: bool) -> Option<u8> {
    if !(1..=12).contains(&month) {
        return None;
    }
    if is_leap {
        return (data.leap_month == month).then_some(month);
    }
    if data.leap_month != 0 && month > data.leap_month {
        Some(month)
    } else {
        Some(month - 1)
    }
}

/// Month number and leap flag for a sequence position of a table year.
fn table_month_at(data: &LunarYearData, slot: u8) -> (u8, bool) {
    let leap = data.leap_month;
    if leap == 0 || slot < leap {
        (slot + 1, false)
    } else if slot == leap {
        (leap, true)
    } else {
        (slot, false)
    }
}

fn table_year_days(data: &LunarYearData) -> u32 {
    (0..data.month_count()).map(|s| data.slot_days(s) as u32).sum()
}

/// Walk a table year from its new year to `jdn`, `None` if `jdn` lies
/// outside the year.
fn walk_table_year(year: i32, data: &LunarYearData, jdn: i64) -> Option<LunisolarDate> {
    let mut offset = jdn - table_new_year_jdn(year, data);
    if offset < 0 {
        return None;
    }
    for slot in 0..data.month_count() {
        let len = data.slot_days(slot) as i64;
        if offset < len {
            let (month, is_leap_month) = table_month_at(data, slot);
            return Some(LunisolarDate {
                year,
                month,
                day: offset as u8 + 1,
                is_leap_month,
                approximate: false,
            });
        }
        offset -= len;
    }
    None
}

/// JDN of the table's first day, lunar 1900-01-01.
fn table_first_jdn() -> i64 {
    table_new_year_jdn(LUNAR_FIRST_YEAR, &LUNAR_YEARS[0])
}

/// JDN of the day after the table's last day, lunar 2101-01-01.
fn table_end_jdn() -> i64 {
    let last = &LUNAR_YEARS[LUNAR_YEARS.len() - 1];
    table_new_year_jdn(LUNAR_LAST_YEAR, last) + table_year_days(last) as i64
}

// ---------------------------------------------------------------------------
// Mean-lunation model
// ---------------------------------------------------------------------------

/// Mean-lunation model whose lunation 0 is the first month of lunar `year`,
/// beginning on `jdn`. Years are `i64` so that neighbours of any `i32` year
/// stay representable.
#[derive(Debug, Clone, Copy)]
struct MeanModel {
    jdn: i64,
    year: i64,
}

impl MeanModel {
    /// Model for years before the table, ending where the table begins.
    fn before_table() -> Self {
        Self {
            jdn: table_first_jdn(),
            year: LUNAR_FIRST_YEAR as i64,
        }
    }

    /// Model for years after the table, starting where the table ends.
    fn after_table() -> Self {
        Self {
            jdn: table_end_jdn(),
            year: LUNAR_LAST_YEAR as i64 + 1,
        }
    }

    /// Model responsible for an uncovered lunar year.
    fn for_year(year: i64) -> Self {
        if year < LUNAR_FIRST_YEAR as i64 {
            Self::before_table()
        } else {
            Self::after_table()
        }
    }

    /// Model responsible for an uncovered day.
    fn for_jdn(jdn: i64) -> Self {
        if jdn < table_first_jdn() {
            Self::before_table()
        } else {
            Self::after_table()
        }
    }

    /// JDN on which lunation `k` begins.
    fn month_start(self, k: i64) -> i64 {
        self.jdn + (k as f64 * MEAN_SYNODIC_MONTH).floor() as i64
    }

    fn month_days(self, k: i64) -> u8 {
        (self.month_start(k + 1) - self.month_start(k)) as u8
    }

    /// Lunation index of the first month of lunar `year`.
    fn year_start(self, year: i64) -> i64 {
        ((year - self.year) as f64 * MEAN_MONTHS_PER_YEAR).round() as i64
    }

    fn month_count(self, year: i64) -> i64 {
        self.year_start(year + 1) - self.year_start(year)
    }

    fn year_days(self, year: i64) -> u32 {
        (self.month_start(self.year_start(year + 1)) - self.month_start(self.year_start(year)))
            as u32
    }

    /// Lunar (year, month, day, leap) of a day.
    fn date_of(self, jdn: i64) -> (i64, u8, u8, bool) {
        let mut k = ((jdn - self.jdn) as f64 / MEAN_SYNODIC_MONTH).floor() as i64;
        while self.month_start(k + 1) <= jdn {
            k += 1;
        }
        while self.month_start(k) > jdn {
            k -= 1;
        }

        let mut year = self.year + (k as f64 / MEAN_MONTHS_PER_YEAR).floor() as i64;
        while self.year_start(year + 1) <= k {
            year += 1;
        }
        while self.year_start(year) > k {
            year -= 1;
        }

        let position = k - self.year_start(year);
        let (month, is_leap_month) = if position < 12 {
            (position as u8 + 1, false)
        } else {
            (12, true)
        };
        let day = (jdn - self.month_start(k)) as u8 + 1;
        (year, month, day, is_leap_month)
    }

    /// Lunation index of a month, `None` if the year has no such month.
    fn lunation(self, year: i64, month: u8, is_leap: bool) -> Option<i64> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let position = if is_leap {
            if month != 12 || self.month_count(year) != 13 {
                return None;
            }
            12
        } else {
            month as i64 - 1
        };
        Some(self.year_start(year) + position)
    }
}

// ---------------------------------------------------------------------------
// Public conversions
// ---------------------------------------------------------------------------

/// Convert a Gregorian date to its lunisolar date.
///
/// The date is validated first, so a date outside the supported year range
/// fails before any lookup.
pub fn to_lunisolar(date: CivilDate) -> Result<LunisolarDate, GanzhiError> {
    date.validate()?;
    let jdn = date.jdn();
    for year in [date.year, date.year - 1] {
        if let Some(found) = table_entry(year).and_then(|d| walk_table_year(year, d, jdn)) {
            return Ok(found);
        }
    }
    tracing::debug!(%date, "date outside lunisolar table, using mean lunation model");
    let (year, month, day, is_leap_month) = MeanModel::for_jdn(jdn).date_of(jdn);
    let year = i32::try_from(year)
        .map_err(|_| GanzhiError::InvalidInput("lunar year outside supported range"))?;
    Ok(LunisolarDate {
        year,
        month,
        day,
        is_leap_month,
        approximate: true,
    })
}

/// Convert a lunisolar date to its Gregorian date.
///
/// Rejects a year outside the supported range, a month outside 1–12, a day
/// outside 1–30, a leap flag for a month that is not the year's leap month,
/// and a day past the end of the month.
pub fn to_gregorian(
    year: i32,
    month: u8,
    day: u8,
    is_leap_month: bool,
) -> Result<CivilDate, GanzhiError> {
    if !is_supported_year(year) {
        return Err(GanzhiError::InvalidInput("lunar year outside supported range"));
    }
    if !(1..=12).contains(&month) {
        return Err(GanzhiError::InvalidInput("lunar month must be 1-12"));
    }
    if !(1..=30).contains(&day) {
        return Err(GanzhiError::InvalidInput("lunar day must be 1-30"));
    }

    let (month_start, month_days) = if let Some(data) = table_entry(year) {
        let slot = table_slot(data, month, is_leap_month)
            .ok_or(GanzhiError::InvalidInput("no such leap month in lunar year"))?;
        let preceding: i64 = (0..slot).map(|s| data.slot_days(s) as i64).sum();
        (
            table_new_year_jdn(year, data) + preceding,
            data.slot_days(slot),
        )
    } else {
        tracing::debug!(year, "lunar year outside table, using mean lunation model");
        let model = MeanModel::for_year(year as i64);
        let k = model
            .lunation(year as i64, month, is_leap_month)
            .ok_or(GanzhiError::InvalidInput("no such leap month in lunar year"))?;
        (model.month_start(k), model.month_days(k))
    };

    if day > month_days {
        return Err(GanzhiError::InvalidInput("lunar day past end of month"));
    }
    Ok(CivilDate::from_jdn(month_start + day as i64 - 1))
}

/// The month a year's leap month repeats, `None` when the year has none.
pub fn leap_month(year: i32) -> Option<u8> {
    match table_entry(year) {
        Some(data) => (data.leap_month != 0).then_some(data.leap_month),
        None => {
            let year = year as i64;
            (MeanModel::for_year(year).month_count(year) == 13).then_some(12)
        }
    }
}

/// Length in days of a lunar month, `None` if the year has no such month.
pub fn lunar_month_days(year: i32, month: u8, is_leap_month: bool) -> Option<u8> {
    match table_entry(year) {
        Some(data) => table_slot(data, month, is_leap_month).map(|s| data.slot_days(s)),
        None => {
            let model = MeanModel::for_year(year as i64);
            model
                .lunation(year as i64, month, is_leap_month)
                .map(|k| model.month_days(k))
        }
    }
}

/// Length in days of a lunar year.
pub fn lunar_year_days(year: i32) -> u32 {
    match table_entry(year) {
        Some(data) => table_year_days(data),
        None => MeanModel::for_year(year as i64).year_days(year as i64),
    }
}

/// Gregorian date of the first day of a lunar year.
pub fn lunar_new_year(year: i32) -> CivilDate {
    match table_entry(year) {
        Some(data) => CivilDate::from_jdn(table_new_year_jdn(year, data)),
        None => {
            let model = MeanModel::for_year(year as i64);
            CivilDate::from_jdn(model.month_start(model.year_start(year as i64)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn table_years_have_sane_shape() {
        for data in LUNAR_YEARS.iter() {
            assert!(data.new_year_month == 1 || data.new_year_month == 2);
            assert!(data.leap_month <= 12);
            let days = table_year_days(data);
            if data.leap_month == 0 {
                assert!((353..=355).contains(&days), "{days}");
            } else {
                assert!((383..=385).contains(&days), "{days}");
            }
        }
    }

    #[test]
    fn consecutive_table_years_abut() {
        for year in LUNAR_FIRST_YEAR..LUNAR_LAST_YEAR {
            let this = lunar_new_year(year).jdn();
            let next = lunar_new_year(year + 1).jdn();
            assert_eq!(this + lunar_year_days(year) as i64, next, "year {year}");
        }
    }

    #[test]
    fn new_year_2024() {
        assert_eq!(lunar_new_year(2024), date(2024, 2, 10));
        let d = to_lunisolar(date(2024, 2, 10)).unwrap();
        assert_eq!((d.year, d.month, d.day, d.is_leap_month), (2024, 1, 1, false));
        let eve = to_lunisolar(date(2024, 2, 9)).unwrap();
        assert_eq!((eve.year, eve.month, eve.day), (2023, 12, 30));
    }

    #[test]
    fn slot_mapping_with_leap() {
        let data = LunarYearData {
            new_year_month: 1,
            new_year_day: 22,
            leap_month: 2,
            long_months: 0,
        };
        assert_eq!(table_slot(&data, 2, false), Some(1));
        assert_eq!(table_slot(&data, 2, true), Some(2));
        assert_eq!(table_slot(&data, 3, false), Some(3));
        assert_eq!(table_slot(&data, 3, true), None);
        assert_eq!(table_month_at(&data, 2), (2, true));
        assert_eq!(table_month_at(&data, 3), (3, false));
        assert_eq!(table_month_at(&data, 12), (12, false));
    }

    #[test]
    fn models_meet_the_table() {
        let before = MeanModel::before_table();
        assert_eq!(before.month_start(0), table_first_jdn());
        assert_eq!(before.year_start(LUNAR_FIRST_YEAR as i64), 0);
        let (year, ..) = before.date_of(table_first_jdn() - 1);
        assert_eq!(year, LUNAR_FIRST_YEAR as i64 - 1);

        let after = MeanModel::after_table();
        assert_eq!(
            after.date_of(table_end_jdn()),
            (LUNAR_LAST_YEAR as i64 + 1, 1, 1, false)
        );
        assert_eq!(lunar_new_year(LUNAR_LAST_YEAR + 1).jdn(), table_end_jdn());
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        for year in [i32::MIN, i32::MAX] {
            assert!(matches!(leap_month(year), None | Some(12)));
            assert!((353..=385).contains(&lunar_year_days(year)), "{year}");
            assert!(lunar_month_days(year, 1, false).is_some());
            let _ = lunar_new_year(year);
            assert_eq!(
                to_gregorian(year, 1, 1, false),
                Err(GanzhiError::InvalidInput("lunar year outside supported range"))
            );
        }
        let unchecked = CivilDate {
            year: i32::MIN,
            month: 6,
            day: 1,
        };
        assert!(matches!(to_lunisolar(unchecked), Err(GanzhiError::Time(_))));
    }

    #[test]
    fn approximate_round_trip() {
        for year in [1700, 1850, 2150, 2400] {
            let start = lunar_new_year(year);
            for offset in (0..lunar_year_days(year) as i64).step_by(7) {
                let d = start.add_days(offset);
                let lunar = to_lunisolar(d).unwrap();
                assert!(lunar.approximate);
                assert_eq!(lunar.year, year);
                let back =
                    to_gregorian(lunar.year, lunar.month, lunar.day, lunar.is_leap_month).unwrap();
                assert_eq!(back, d);
            }
        }
    }

    #[test]
    fn approximate_leap_is_month_twelve() {
        let year = (1700..1800).find(|y| leap_month(*y).is_some()).unwrap();
        assert_eq!(leap_month(year), Some(12));
        assert!(lunar_month_days(year, 12, true).is_some());
        assert!(lunar_month_days(year, 11, true).is_none());
    }

    #[test]
    fn display_marks_leap_and_approx() {
        let d = LunisolarDate {
            year: 2023,
            month: 2,
            day: 1,
            is_leap_month: true,
            approximate: false,
        };
        assert_eq!(d.to_string(), "2023-leap 02-01");
        let a = LunisolarDate {
            approximate: true,
            is_leap_month: false,
            ..d
        };
        assert_eq!(a.to_string(), "2023-02-01 (approx.)");
    }
}
