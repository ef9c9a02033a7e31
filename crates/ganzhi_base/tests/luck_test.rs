//! Luck-cycle scenarios built on real four-pillar charts.

use ganzhi_base::{
    Gender, LuckConfig, LuckCycleResult, LuckDirection, SolarTerm, StartAgeRule, four_pillars,
    generate_luck_cycle,
};
use ganzhi_time::{CivilTime, Instant, UtcOffset};

fn cycle(gender: Gender, rule: StartAgeRule, current_age: Option<u32>) -> LuckCycleResult {
    // 1990-05-15 10:00 Beijing time.
    let time = CivilTime::new(1990, 5, 15, 10, 0, 0).unwrap();
    let offset = UtcOffset::CHINA_STANDARD;
    let pillars = four_pillars(&time, offset).unwrap();
    let config = LuckConfig {
        start_age_rule: rule,
    };
    generate_luck_cycle(
        Instant::from_civil(&time, offset),
        gender,
        &pillars,
        &config,
        current_age,
    )
    .unwrap()
}

#[test]
fn yang_year_male_runs_forward() {
    let r = cycle(Gender::Male, StartAgeRule::NextBoundary, None);
    assert_eq!(r.direction, LuckDirection::Forward);
    assert_eq!(r.boundary.term, SolarTerm::Mangzhong);
    // 21.9 days to Grain in Ear.
    assert_eq!(r.starting_age, 7);
    let names: Vec<String> = r.segments.iter().map(|s| s.pillar.to_string()).collect();
    assert_eq!(
        names,
        ["Ren-Wu", "Gui-Wei", "Jia-Shen", "Yi-You", "Bing-Xu", "Ding-Hai", "Wu-Zi", "Ji-Chou"]
    );
    assert_eq!((r.segments[0].start_age, r.segments[0].end_age), (7, 16));
    assert_eq!((r.segments[7].start_age, r.segments[7].end_age), (77, 86));
}

#[test]
fn yang_year_female_runs_reverse() {
    let r = cycle(Gender::Female, StartAgeRule::NextBoundary, None);
    assert_eq!(r.direction, LuckDirection::Reverse);
    assert_eq!(r.starting_age, 7);
    let names: Vec<String> = r.segments.iter().map(|s| s.pillar.to_string()).collect();
    assert_eq!(
        names,
        ["Geng-Chen", "Ji-Mao", "Wu-Yin", "Ding-Chou", "Bing-Zi", "Yi-Hai", "Jia-Xu", "Gui-You"]
    );
    assert!(r.segments.iter().all(|s| s.direction == LuckDirection::Reverse));
}

#[test]
fn directional_rule_counts_back_for_reverse() {
    let r = cycle(Gender::Female, StartAgeRule::Directional, None);
    assert_eq!(r.boundary.term, SolarTerm::Lixia);
    // 9.3 days back to Start of Summer.
    assert_eq!(r.starting_age, 3);

    let forward = cycle(Gender::Male, StartAgeRule::Directional, None);
    assert_eq!(forward.boundary.term, SolarTerm::Mangzhong);
    assert_eq!(forward.starting_age, 7);
}

#[test]
fn current_segment_lookup() {
    let r = cycle(Gender::Male, StartAgeRule::NextBoundary, Some(35));
    assert_eq!(r.current_segment_index, Some(2));
    assert_eq!(r.current_segment().map(|s| s.order), Some(3));

    let young = cycle(Gender::Male, StartAgeRule::NextBoundary, Some(3));
    assert_eq!(young.current_segment_index, None);

    let old = cycle(Gender::Male, StartAgeRule::NextBoundary, Some(87));
    assert_eq!(old.current_segment_index, None);
    assert!(old.segment_for_age(86).is_some());
}

#[test]
fn segments_contiguous() {
    for gender in [Gender::Male, Gender::Female] {
        let r = cycle(gender, StartAgeRule::NextBoundary, None);
        for pair in r.segments.windows(2) {
            assert_eq!(pair[0].end_age + 1, pair[1].start_age);
            assert_eq!(pair[0].order + 1, pair[1].order);
        }
    }
}
