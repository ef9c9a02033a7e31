//! Proleptic Gregorian day numbers.
//!
//! Day numbers are Julian Day Numbers (JDN): the integer day count whose
//! noon-to-noon span contains the civil date. JDN 2_440_588 is 1970-01-01.
//! All arithmetic is integer, so a date maps to exactly one day number with
//! no floating-point drift.

/// JDN of 1970-01-01.
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Earliest Gregorian year accepted by validated dates.
pub const MIN_YEAR: i32 = -1_000_000;

/// Latest Gregorian year accepted by validated dates.
pub const MAX_YEAR: i32 = 1_000_000;

/// Days from 0000-03-01 to 1970-01-01 in the proleptic Gregorian calendar.
const DAYS_0000_03_01_TO_UNIX: i64 = 719_468;

/// Days in one 400-year Gregorian era.
const DAYS_PER_ERA: i64 = 146_097;

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Whether `year` lies in `MIN_YEAR..=MAX_YEAR`.
pub const fn is_supported_year(year: i32) -> bool {
    year >= MIN_YEAR && year <= MAX_YEAR
}

/// Number of days in a Gregorian month, `None` if the month is not 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            if is_leap_year(year) {
                Some(29)
            } else {
                Some(28)
            }
        }
        _ => None,
    }
}

/// Convert a Gregorian calendar date to its Julian Day Number.
///
/// The date is not validated; out-of-range days roll over arithmetically.
pub const fn calendar_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let m = month as i64;
    let y = year as i64 - (m <= 2) as i64;
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    // March-based month so the leap day falls at the end of the year.
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - DAYS_0000_03_01_TO_UNIX + UNIX_EPOCH_JDN
}

/// Convert a Julian Day Number back to a Gregorian `(year, month, day)`.
pub fn jdn_to_calendar(jdn: i64) -> (i32, u32, u32) {
    let z = jdn - UNIX_EPOCH_JDN + DAYS_0000_03_01_TO_UNIX;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year as i32, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch() {
        assert_eq!(calendar_to_jdn(1970, 1, 1), UNIX_EPOCH_JDN);
        assert_eq!(jdn_to_calendar(UNIX_EPOCH_JDN), (1970, 1, 1));
    }

    #[test]
    fn j2000_day() {
        // JD 2451545.0 is 2000-01-01 12:00, so the civil day has JDN 2451545.
        assert_eq!(calendar_to_jdn(2000, 1, 1), 2_451_545);
    }

    #[test]
    fn meeus_reference_dates() {
        assert_eq!(calendar_to_jdn(1957, 10, 4), 2_436_116);
        assert_eq!(calendar_to_jdn(1900, 1, 1), 2_415_021);
        assert_eq!(calendar_to_jdn(1600, 1, 1), 2_305_448);
    }

    #[test]
    fn leap_day_roundtrip() {
        let jdn = calendar_to_jdn(2024, 2, 29);
        assert_eq!(jdn_to_calendar(jdn), (2024, 2, 29));
        assert_eq!(jdn_to_calendar(jdn + 1), (2024, 3, 1));
    }

    #[test]
    fn negative_years() {
        let jdn = calendar_to_jdn(-100, 3, 1);
        assert_eq!(jdn_to_calendar(jdn), (-100, 3, 1));
    }

    #[test]
    fn supported_years() {
        assert!(is_supported_year(MIN_YEAR));
        assert!(is_supported_year(MAX_YEAR));
        assert!(!is_supported_year(i32::MAX));
        assert!(!is_supported_year(i32::MIN));
        // Far ends convert without overflow.
        assert_eq!(jdn_to_calendar(calendar_to_jdn(MAX_YEAR, 12, 31)), (MAX_YEAR, 12, 31));
        assert_eq!(jdn_to_calendar(calendar_to_jdn(MIN_YEAR, 1, 1)), (MIN_YEAR, 1, 1));
    }

    #[test]
    fn leap_rules() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2024, 4), Some(30));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 13), None);
        assert_eq!(days_in_month(2024, 0), None);
    }
}
