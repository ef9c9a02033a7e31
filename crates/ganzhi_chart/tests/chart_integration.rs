//! End-to-end birth-chart tests.

use ganzhi_base::{Gender, LuckDirection, SolarTerm, StartAgeRule};
use ganzhi_chart::{
    BirthDescriptor, ChartConfig, ChartError, age_on, chart_for_birth, normalize_birth,
};
use ganzhi_time::{CivilDate, TimeError, UtcOffset};
use proptest::prelude::*;

fn pillar_names(desc: &BirthDescriptor, config: &ChartConfig) -> [String; 4] {
    chart_for_birth(desc, config, None)
        .unwrap()
        .pillars
        .pillars()
        .map(|p| p.to_string())
}

#[test]
fn solar_birth_1990() {
    let desc = BirthDescriptor::solar(1990, 5, 15, 10, Some(0), Gender::Male);
    let chart = chart_for_birth(&desc, &ChartConfig::default(), Some(34)).unwrap();

    assert_eq!(
        chart.pillars.pillars().map(|p| p.to_string()),
        ["Geng-Wu", "Xin-Si", "Geng-Chen", "Xin-Si"]
    );
    assert_eq!(
        (chart.lunisolar.year, chart.lunisolar.month, chart.lunisolar.day),
        (1990, 4, 21)
    );
    assert_eq!(chart.solar_month.opened_by.term, SolarTerm::Lixia);
    assert_eq!(chart.luck.direction, LuckDirection::Forward);
    assert_eq!(chart.luck.starting_age, 7);
    assert_eq!(chart.luck.current_segment_index, Some(2));
    assert!(!chart.is_approximate());
}

#[test]
fn female_reverses() {
    let desc = BirthDescriptor::solar(1990, 5, 15, 10, None, Gender::Female);
    let chart = chart_for_birth(&desc, &ChartConfig::default(), None).unwrap();
    assert_eq!(chart.luck.direction, LuckDirection::Reverse);
    assert_eq!(chart.luck.current_segment_index, None);

    let directional = ChartConfig {
        start_age_rule: StartAgeRule::Directional,
        ..ChartConfig::default()
    };
    let chart = chart_for_birth(&desc, &directional, None).unwrap();
    assert_eq!(chart.luck.starting_age, 3);
}

#[test]
fn regression_1989_10_06() {
    let desc = BirthDescriptor::solar(1989, 10, 6, 12, None, Gender::Male);
    assert_eq!(
        pillar_names(&desc, &ChartConfig::default()),
        ["Ji-Si", "Gui-You", "Ji-Hai", "Geng-Wu"]
    );
}

#[test]
fn lunar_and_solar_input_agree() {
    let solar = BirthDescriptor::solar(1989, 10, 6, 12, None, Gender::Male);
    let lunar = BirthDescriptor::lunar(1989, 9, 7, false, 12, None, Gender::Male);
    let config = ChartConfig::default();
    let a = chart_for_birth(&solar, &config, None).unwrap();
    let b = chart_for_birth(&lunar, &config, None).unwrap();
    assert_eq!(a, b);
}

#[test]
fn lunar_input_errors_surface() {
    let desc = BirthDescriptor::lunar(2024, 2, 1, true, 12, None, Gender::Male);
    assert!(matches!(
        chart_for_birth(&desc, &ChartConfig::default(), None),
        Err(ChartError::Ganzhi(_))
    ));
    let desc = BirthDescriptor::lunar(2024, 300, 1, false, 12, None, Gender::Male);
    assert!(matches!(
        normalize_birth(&desc),
        Err(ChartError::InvalidDescriptor(_))
    ));
}

#[test]
fn korean_clock_shifts_the_year_boundary() {
    // 16:30 on Start of Spring 2024: after the term in Beijing time,
    // before it in Seoul time.
    let desc = BirthDescriptor::solar(2024, 2, 4, 16, Some(30), Gender::Male);
    let china = pillar_names(&desc, &ChartConfig::default());
    let korea = pillar_names(
        &desc,
        &ChartConfig {
            utc_offset: UtcOffset::KOREA_STANDARD,
            ..ChartConfig::default()
        },
    );
    assert_eq!(china[0], "Jia-Chen");
    assert_eq!(korea[0], "Gui-Mao");
    assert_eq!(china[2], korea[2]);
}

#[test]
fn fallback_years_flagged() {
    let desc = BirthDescriptor::solar(1850, 6, 15, 8, None, Gender::Female);
    let chart = chart_for_birth(&desc, &ChartConfig::default(), None).unwrap();
    assert!(chart.is_approximate());
    assert!(chart.lunisolar.approximate);
}

#[test]
fn age_feeds_current_segment() {
    let birth = CivilDate::new(1990, 5, 15).unwrap();
    let today = CivilDate::new(2026, 10, 17).unwrap();
    let age = age_on(birth, today);
    assert_eq!(age, Some(36));
    let desc = BirthDescriptor::solar(1990, 5, 15, 10, None, Gender::Male);
    let chart = chart_for_birth(&desc, &ChartConfig::default(), age).unwrap();
    let current = chart.luck.current_segment().unwrap();
    assert!(current.contains_age(36));
}

#[test]
fn extreme_years_are_rejected_not_computed() {
    let config = ChartConfig::default();
    for year in [i32::MIN, i32::MAX] {
        let solar = BirthDescriptor::solar(year, 6, 1, 12, None, Gender::Male);
        assert_eq!(
            chart_for_birth(&solar, &config, None),
            Err(ChartError::Time(TimeError::YearOutOfRange(year)))
        );
        let lunar = BirthDescriptor::lunar(year, 6, 1, false, 12, None, Gender::Male);
        assert!(matches!(
            chart_for_birth(&lunar, &config, None),
            Err(ChartError::Ganzhi(_))
        ));
    }
    // The supported range itself still computes.
    let far = BirthDescriptor::solar(ganzhi_time::MAX_YEAR, 6, 1, 12, None, Gender::Female);
    assert!(chart_for_birth(&far, &config, None).unwrap().is_approximate());
}

proptest! {
    #[test]
    fn lunar_round_trip_gives_same_chart(
        year in 1901i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
    ) {
        let solar = BirthDescriptor::solar(year, month, day, hour, None, Gender::Female);
        let config = ChartConfig::default();
        let a = chart_for_birth(&solar, &config, None).unwrap();
        let l = a.lunisolar;
        let lunar = BirthDescriptor::lunar(
            l.year,
            l.month as u32,
            l.day as u32,
            l.is_leap_month,
            hour,
            None,
            Gender::Female,
        );
        let b = chart_for_birth(&lunar, &config, None).unwrap();
        prop_assert_eq!(a, b);
    }
}
