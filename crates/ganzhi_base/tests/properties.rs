//! Property tests over the whole derivation pipeline.

use ganzhi_base::{
    Gender, LuckConfig, SexagenaryIndex, StartAgeRule, day_pillar_for, four_pillars,
    generate_luck_cycle, hour_branch_for, solar_month_at, to_gregorian, to_lunisolar,
};
use ganzhi_time::{CivilDate, CivilTime, Instant, UtcOffset};
use proptest::prelude::*;

/// JDNs of 1900-02-01 .. 2100-12-01, inside both reference tables.
const TABLE_JDNS: std::ops::Range<i64> = 2_415_052..2_488_405;

fn civil_time() -> impl Strategy<Value = CivilTime> {
    (TABLE_JDNS, 0u32..24, 0u32..60, 0u32..60).prop_map(|(jdn, hour, minute, second)| {
        let d = CivilDate::from_jdn(jdn);
        CivilTime {
            year: d.year,
            month: d.month,
            day: d.day,
            hour,
            minute,
            second,
        }
    })
}

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn rule() -> impl Strategy<Value = StartAgeRule> {
    prop_oneof![Just(StartAgeRule::NextBoundary), Just(StartAgeRule::Directional)]
}

#[test]
fn every_cycle_position_shares_polarity() {
    for i in SexagenaryIndex::all() {
        assert_eq!(i.stem().polarity(), i.branch().polarity());
    }
}

proptest! {
    #[test]
    fn day_pillar_repeats_every_sixty_days(jdn in 0i64..5_000_000) {
        let d = CivilDate::from_jdn(jdn);
        prop_assert_eq!(day_pillar_for(d), day_pillar_for(d.add_days(60)));
        prop_assert_ne!(day_pillar_for(d), day_pillar_for(d.add_days(1)));
    }

    #[test]
    fn lunisolar_round_trip(jdn in TABLE_JDNS) {
        let d = CivilDate::from_jdn(jdn);
        let l = to_lunisolar(d).unwrap();
        prop_assert!(!l.approximate);
        prop_assert_eq!(to_gregorian(l.year, l.month, l.day, l.is_leap_month).unwrap(), d);
    }

    #[test]
    fn approximate_round_trip(jdn in 1_000_000i64..2_400_000) {
        let d = CivilDate::from_jdn(jdn);
        let l = to_lunisolar(d).unwrap();
        prop_assert!(l.approximate);
        prop_assert_eq!(to_gregorian(l.year, l.month, l.day, l.is_leap_month).unwrap(), d);
    }

    #[test]
    fn pillars_always_derive(time in civil_time(), offset in -720i32..=840) {
        let offset = UtcOffset::from_minutes(offset).unwrap();
        let chart = four_pillars(&time, offset).unwrap();
        let month = solar_month_at(Instant::from_civil(&time, offset)).unwrap();
        prop_assert_eq!(chart.month.branch(), month.branch);
        prop_assert_eq!(chart.day, day_pillar_for(time.date()));
        prop_assert_eq!(chart.hour.branch(), hour_branch_for(time.hour).unwrap());
        for p in chart.pillars() {
            prop_assert_eq!(p.stem().polarity(), p.branch().polarity());
        }
    }

    #[test]
    fn hour_23_never_rolls_the_day(jdn in TABLE_JDNS) {
        let d = CivilDate::from_jdn(jdn);
        let at = |hour| CivilTime { year: d.year, month: d.month, day: d.day, hour, minute: 30, second: 0 };
        let early = four_pillars(&at(0), UtcOffset::CHINA_STANDARD).unwrap();
        let late = four_pillars(&at(23), UtcOffset::CHINA_STANDARD).unwrap();
        prop_assert_eq!(early.day, late.day);
        prop_assert_eq!(early.hour, late.hour);
    }

    #[test]
    fn luck_cycle_is_contiguous(
        time in civil_time(),
        gender in gender(),
        rule in rule(),
        age in 0u32..100,
    ) {
        let offset = UtcOffset::CHINA_STANDARD;
        let chart = four_pillars(&time, offset).unwrap();
        let config = LuckConfig { start_age_rule: rule };
        let r = generate_luck_cycle(
            Instant::from_civil(&time, offset),
            gender,
            &chart,
            &config,
            Some(age),
        )
        .unwrap();
        prop_assert!((1..=10).contains(&r.starting_age));
        prop_assert_eq!(r.segments[0].start_age, r.starting_age);
        for pair in r.segments.windows(2) {
            prop_assert_eq!(pair[0].end_age + 1, pair[1].start_age);
            prop_assert_eq!(pair[0].end_age - pair[0].start_age, 9);
            prop_assert_eq!(
                pair[1].pillar.index(),
                pair[0].pillar.index().offset(r.direction.step())
            );
        }
        match r.current_segment_index {
            Some(i) => prop_assert!(r.segments[i].contains_age(age)),
            None => prop_assert!(age < r.starting_age || age > r.segments[7].end_age),
        }
    }
}
