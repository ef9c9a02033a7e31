//! Golden-value tests for Gregorian ↔ lunisolar conversion.

use ganzhi_base::{
    GanzhiError, LUNAR_FIRST_YEAR, LUNAR_LAST_YEAR, leap_month, lunar_month_days, lunar_new_year,
    lunar_year_days, to_gregorian, to_lunisolar,
};
use ganzhi_time::CivilDate;

fn date(y: i32, m: u32, d: u32) -> CivilDate {
    CivilDate::new(y, m, d).unwrap()
}

fn assert_lunar(g: CivilDate, year: i32, month: u8, day: u8, leap: bool) {
    let l = to_lunisolar(g).unwrap();
    assert!(!l.approximate, "{g} should come from the table");
    assert_eq!(
        (l.year, l.month, l.day, l.is_leap_month),
        (year, month, day, leap),
        "{g}"
    );
}

#[test]
fn known_dates() {
    assert_lunar(date(1989, 10, 6), 1989, 9, 7, false);
    assert_lunar(date(1990, 5, 15), 1990, 4, 21, false);
    assert_lunar(date(2000, 1, 1), 1999, 11, 25, false);
    assert_lunar(date(2024, 2, 9), 2023, 12, 30, false);
    assert_lunar(date(2024, 2, 10), 2024, 1, 1, false);
}

#[test]
fn leap_month_2023() {
    assert_eq!(leap_month(2023), Some(2));
    assert_lunar(date(2023, 3, 22), 2023, 2, 1, true);
    assert_lunar(date(2023, 4, 19), 2023, 2, 29, true);
    assert_lunar(date(2023, 4, 20), 2023, 3, 1, false);
    assert_eq!(lunar_month_days(2023, 2, true), Some(29));
}

#[test]
fn other_leap_months() {
    assert_eq!(leap_month(1900), Some(8));
    assert_eq!(leap_month(1984), Some(10));
    assert_eq!(leap_month(1990), Some(5));
    assert_eq!(leap_month(2017), Some(6));
    assert_eq!(leap_month(2020), Some(4));
    assert_eq!(leap_month(2024), None);
    assert_eq!(leap_month(2025), Some(6));
    assert_eq!(leap_month(2033), Some(11));
    assert_lunar(date(2020, 5, 23), 2020, 4, 1, true);
    assert_lunar(date(2033, 12, 22), 2033, 11, 1, true);
}

#[test]
fn year_lengths() {
    assert_eq!(lunar_year_days(2020), 384);
    assert_eq!(lunar_year_days(2023), 384);
    assert_eq!(lunar_year_days(2024), 354);
}

#[test]
fn table_edges() {
    assert_eq!(lunar_new_year(1900), date(1900, 1, 31));
    assert_lunar(date(1900, 1, 31), 1900, 1, 1, false);
    assert_lunar(date(2100, 12, 31), 2100, 12, 1, false);
    let eve = to_lunisolar(date(1900, 1, 30)).unwrap();
    assert!(eve.approximate);
    assert_eq!(eve.year, 1899);
}

#[test]
fn round_trip_every_table_day() {
    let first = lunar_new_year(LUNAR_FIRST_YEAR);
    let end = lunar_new_year(LUNAR_LAST_YEAR).add_days(lunar_year_days(LUNAR_LAST_YEAR) as i64);
    let mut d = first;
    while d < end {
        let l = to_lunisolar(d).unwrap();
        assert!(!l.approximate, "{d}");
        let back = to_gregorian(l.year, l.month, l.day, l.is_leap_month).unwrap();
        assert_eq!(back, d, "{d} -> {l}");
        d = d.add_days(1);
    }
}

#[test]
fn to_gregorian_rejects_invalid() {
    let invalid = |r: Result<CivilDate, GanzhiError>| matches!(r, Err(GanzhiError::InvalidInput(_)));
    assert!(invalid(to_gregorian(2024, 0, 1, false)));
    assert!(invalid(to_gregorian(2024, 13, 1, false)));
    assert!(invalid(to_gregorian(2024, 1, 0, false)));
    assert!(invalid(to_gregorian(2024, 1, 31, false)));
    // 2024 has no leap month; 2023's is the second.
    assert!(invalid(to_gregorian(2024, 2, 1, true)));
    assert!(invalid(to_gregorian(2023, 3, 1, true)));
    // Leap second month of 2023 has 29 days.
    assert!(invalid(to_gregorian(2023, 2, 30, true)));
    assert_eq!(to_gregorian(2023, 2, 1, true).unwrap(), date(2023, 3, 22));
}

/// Walk every day from `from` up to `to` and check that each lunar label
/// converts back to its own day and that labels never step backwards.
fn assert_seam(from: CivilDate, to: CivilDate) {
    let mut d = from;
    let mut prev: Option<(i32, u8, bool, u8)> = None;
    while d < to {
        let l = to_lunisolar(d).unwrap();
        let in_table = (LUNAR_FIRST_YEAR..=LUNAR_LAST_YEAR).contains(&l.year);
        assert_eq!(l.approximate, !in_table, "{d} -> {l}");
        let back = to_gregorian(l.year, l.month, l.day, l.is_leap_month).unwrap();
        assert_eq!(back, d, "{d} -> {l}");
        let key = (l.year, l.month, l.is_leap_month, l.day);
        if let Some(p) = prev {
            assert!(p < key, "{d} -> {l} does not follow {p:?}");
        }
        prev = Some(key);
        d = d.add_days(1);
    }
}

#[test]
fn table_start_seam_round_trips() {
    assert_seam(date(1899, 12, 1), date(1900, 3, 1));
    assert_eq!(to_gregorian(1900, 1, 1, false).unwrap(), date(1900, 1, 31));
    let last_model_day = to_lunisolar(date(1900, 1, 30)).unwrap();
    assert_eq!(
        to_gregorian(
            last_model_day.year,
            last_model_day.month,
            last_model_day.day,
            last_model_day.is_leap_month
        )
        .unwrap(),
        date(1900, 1, 30)
    );
}

#[test]
fn table_end_seam_round_trips() {
    assert_seam(date(2101, 1, 1), date(2101, 4, 1));
    let first_model_day = lunar_new_year(LUNAR_LAST_YEAR + 1);
    let l = to_lunisolar(first_model_day).unwrap();
    assert!(l.approximate);
    assert_eq!((l.year, l.month, l.day, l.is_leap_month), (2101, 1, 1, false));
    assert_eq!(
        first_model_day.add_days(-1),
        lunar_new_year(LUNAR_LAST_YEAR).add_days(lunar_year_days(LUNAR_LAST_YEAR) as i64 - 1)
    );
}

#[test]
fn extreme_years_are_rejected() {
    for year in [i32::MIN, i32::MAX] {
        assert!(matches!(
            to_gregorian(year, 6, 1, false),
            Err(GanzhiError::InvalidInput(_))
        ));
        let unchecked = CivilDate { year, month: 6, day: 1 };
        assert!(matches!(to_lunisolar(unchecked), Err(GanzhiError::Time(_))));
        // Year queries stay total.
        assert!(lunar_year_days(year) > 350);
        assert!(leap_month(year).is_none_or(|m| m == 12));
    }
}
