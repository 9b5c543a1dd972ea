//! End-to-end resolver behaviour on the built-in weekly template.
//!
//! Monday: first period 08:55, seven 45-minute classes, 10-minute breaks,
//! lunch 12:25-13:10.

use chrono::NaiveDate;
use classclock_core::{
    current_day_key, ClockTime, DayKey, ResolvedState, Timetable, TimetableConfig,
};
use proptest::prelude::*;

fn t(s: &str) -> ClockTime {
    s.parse().unwrap()
}

fn timetable() -> Timetable {
    Timetable::from_config(&TimetableConfig::default()).unwrap()
}

#[test]
fn start_of_first_period_is_in_class() {
    match timetable().resolve(Some(DayKey::Mon), t("08:55")) {
        ResolvedState::InClass { period } => {
            assert_eq!(period.index, 1);
            assert_eq!(period.end, t("09:40"));
        }
        other => panic!("Expected InClass, got {other:?}"),
    }
}

#[test]
fn end_of_first_period_is_break() {
    match timetable().resolve(Some(DayKey::Mon), t("09:40")) {
        ResolvedState::Break { next } => {
            assert_eq!(next.index, 2);
            assert_eq!(next.start, t("09:50"));
        }
        other => panic!("Expected Break, got {other:?}"),
    }
}

#[test]
fn start_of_lunch() {
    match timetable().resolve(Some(DayKey::Mon), t("12:25")) {
        ResolvedState::Lunch { window, next } => {
            assert_eq!(window.end, t("13:10"));
            assert_eq!(next.unwrap().index, 5);
        }
        other => panic!("Expected Lunch, got {other:?}"),
    }
}

#[test]
fn end_of_lunch_is_next_class() {
    match timetable().resolve(Some(DayKey::Mon), t("13:10")) {
        ResolvedState::InClass { period } => assert_eq!(period.index, 5),
        other => panic!("Expected InClass, got {other:?}"),
    }
}

#[test]
fn late_evening_is_after_school_with_tuesday_preview() {
    match timetable().resolve(Some(DayKey::Mon), t("23:59")) {
        ResolvedState::AfterSchool { next_day, first } => {
            assert_eq!(next_day, DayKey::Tue);
            let first = first.expect("tuesday has periods");
            assert_eq!(first.index, 1);
            assert_eq!(first.subject, "数学");
            assert_eq!(first.start, t("08:55"));
            assert_eq!(first.end, t("09:45"));
        }
        other => panic!("Expected AfterSchool, got {other:?}"),
    }
}

#[test]
fn saturday_is_holiday_all_day() {
    let timetable = timetable();
    let saturday = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
    let day = current_day_key(saturday);
    assert_eq!(day, None);
    for minutes in [0u16, 540, 745, 1439] {
        let now = ClockTime::from_minutes(minutes).unwrap();
        assert_eq!(timetable.resolve(day, now), ResolvedState::Holiday);
    }
}

#[test]
fn status_at_on_a_sunday() {
    let sunday = NaiveDate::from_ymd_opt(2026, 10, 18)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let status = timetable().status_at(sunday);
    assert_eq!(status.day, None);
    assert_eq!(status.state, ResolvedState::Holiday);
}

#[test]
fn every_minute_of_the_week_resolves() {
    let timetable = timetable();
    let days = DayKey::ALL.into_iter().map(Some).chain([None]);
    for day in days {
        let mut in_class = 0;
        for minutes in 0..1440u16 {
            let now = ClockTime::from_minutes(minutes).unwrap();
            if let ResolvedState::InClass { period } = timetable.resolve(day, now) {
                assert!(period.contains(now));
                in_class += 1;
            }
        }
        let expected: u32 = day
            .map(|d| timetable.schedule(d).iter().map(|p| u32::from(p.duration_min())).sum())
            .unwrap_or(0);
        assert_eq!(in_class, expected, "class minutes on {day:?}");
    }
}

fn arb_config() -> impl Strategy<Value = TimetableConfig> {
    (
        0u16..600,
        0u32..10,
        1u32..90,
        0u32..30,
        1u32..8,
        proptest::option::of((0u16..1400, 1u16..90)),
    )
        .prop_map(|(start, periods, class_minutes, break_minutes, lunch_after, lunch)| {
            let mut config = TimetableConfig::default();
            config.settings.break_minutes = break_minutes;
            config.settings.lunch_after_period = lunch_after;
            if let Some(mon) = config.days.mon.as_mut() {
                mon.first_start = ClockTime::from_minutes(start).unwrap();
                mon.periods = periods;
                mon.class_minutes = class_minutes;
                mon.lunch = lunch.and_then(|(s, len)| {
                    let start = ClockTime::from_minutes(s)?;
                    let end = ClockTime::from_minutes(s + len)?;
                    Some(classclock_core::LunchWindow { start, end })
                });
            }
            config
        })
}

proptest! {
    #[test]
    fn built_schedules_are_strictly_increasing(config in arb_config()) {
        if let Ok(timetable) = Timetable::from_config(&config) {
            let periods = timetable.schedule(DayKey::Mon);
            for p in periods {
                prop_assert!(p.start < p.end);
            }
            for pair in periods.windows(2) {
                prop_assert!(pair[0].end <= pair[1].start);
                prop_assert_eq!(pair[0].index + 1, pair[1].index);
            }
        }
    }

    #[test]
    fn resolve_is_total_and_idempotent(config in arb_config(), minutes in 0u16..1440) {
        if let Ok(timetable) = Timetable::from_config(&config) {
            let now = ClockTime::from_minutes(minutes).unwrap();
            let first = timetable.resolve(Some(DayKey::Mon), now);
            let second = timetable.resolve(Some(DayKey::Mon), now);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(timetable.resolve(None, now), ResolvedState::Holiday);
        }
    }

    #[test]
    fn period_end_is_never_in_that_period(config in arb_config()) {
        if let Ok(timetable) = Timetable::from_config(&config) {
            for p in timetable.schedule(DayKey::Mon) {
                if let ResolvedState::InClass { period } = timetable.resolve(Some(DayKey::Mon), p.end) {
                    prop_assert_ne!(period.index, p.index);
                }
            }
        }
    }
}
