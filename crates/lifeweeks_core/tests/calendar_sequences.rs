use lifeweeks_core::annotation::notes::set_note;
use lifeweeks_core::calendar::math::{lived_weeks, progress_percentage, total_weeks};
use lifeweeks_core::{
    generate_day_sequence, generate_goal_day_sequence, generate_week_sequence, Goal, GoalMap,
    NoteMap, UnitStatus,
};
use chrono::{NaiveDate, NaiveDateTime};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("test dates should be valid")
}

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(8, 0, 0).expect("valid time")
}

fn count_status<'a>(statuses: impl Iterator<Item = &'a UnitStatus>, wanted: UnitStatus) -> usize {
    statuses.filter(|status| **status == wanted).count()
}

#[test]
fn default_profile_scenario() {
    let birthdate = date(2002, 11, 3);
    let now = date(2024, 11, 3).and_hms_opt(0, 0, 0).expect("valid time");

    let lived = lived_weeks(birthdate, now);
    assert_eq!(lived, 22 * 52 + 4);
    assert_eq!(total_weeks(100), 5200);
    let progress = progress_percentage(lived, total_weeks(100));
    assert!((progress - 22.08).abs() < 0.01);

    let weeks = generate_week_sequence(birthdate, 100, &NoteMap::new(), now);
    assert_eq!(weeks.len(), 5200);
    assert_eq!(weeks[1148].status, UnitStatus::Current);
    assert_eq!(weeks[1147].status, UnitStatus::Past);
    assert_eq!(weeks[1149].status, UnitStatus::Future);
}

#[test]
fn exactly_one_current_week_for_many_reference_times() {
    let birthdate = date(1985, 2, 14);
    for year in [1985, 1990, 2001, 2024, 2044] {
        let weeks = generate_week_sequence(birthdate, 60, &NoteMap::new(), at(year, 7, 1));
        let statuses = weeks.iter().map(|week| &week.status);
        assert_eq!(count_status(statuses, UnitStatus::Current), 1, "year {year}");
    }
}

#[test]
fn outlived_lifespan_is_all_past_and_unborn_is_all_future() {
    let birthdate = date(1900, 1, 1);
    let weeks = generate_week_sequence(birthdate, 60, &NoteMap::new(), at(2024, 1, 1));
    assert!(weeks.iter().all(|week| week.status == UnitStatus::Past));

    let weeks = generate_week_sequence(date(2030, 1, 1), 60, &NoteMap::new(), at(2024, 1, 1));
    assert!(weeks.iter().all(|week| week.status == UnitStatus::Future));
}

#[test]
fn week_descriptors_carry_dates_positions_and_annotations() {
    let birthdate = date(2002, 11, 3);
    let notes = set_note(&NoteMap::new(), 53, "first steps", None, None);
    let notes = set_note(&notes, 60, "", None, Some("Moved house".to_string()));
    let weeks = generate_week_sequence(birthdate, 80, &notes, at(2024, 1, 1));

    assert_eq!(weeks[0].date, birthdate);
    assert_eq!(weeks[0].index, 0);
    assert_eq!(weeks[53].date, date(2003, 11, 9));
    assert_eq!((weeks[53].year_offset, weeks[53].position_in_year), (1, 2));
    assert_eq!(weeks[53].annotation.as_ref().expect("week 53 has a note").text, "first steps");
    assert!(!weeks[53].is_life_event());
    assert!(weeks[60].is_life_event());
    assert!(weeks[61].annotation.is_none());
    assert!(weeks.iter().enumerate().all(|(i, week)| week.index as usize == i));
}

#[test]
fn shrinking_lifespan_leaves_orphaned_notes_unrendered() {
    let birthdate = date(1990, 1, 1);
    let notes = set_note(&NoteMap::new(), 52 * 90, "retirement trip", None, None);

    let long = generate_week_sequence(birthdate, 100, &notes, at(2024, 1, 1));
    assert!(long[52 * 90].annotation.is_some());

    let short = generate_week_sequence(birthdate, 80, &notes, at(2024, 1, 1));
    assert_eq!(short.len(), 52 * 80);
    assert!(short.iter().all(|week| week.annotation.is_none()));
    assert_eq!(notes.len(), 1);
}

#[test]
fn leap_year_day_sequence_around_march_first() {
    let days = generate_day_sequence(2024, at(2024, 3, 1));
    assert_eq!(days.len(), 366);

    let march_first = days
        .iter()
        .position(|day| day.date == date(2024, 3, 1))
        .expect("2024 contains March 1");
    assert_eq!(march_first, 60);
    assert_eq!(days[0].status, UnitStatus::Past);
    assert_eq!(days[march_first].status, UnitStatus::Current);
    assert!(days[..march_first].iter().all(|day| day.status == UnitStatus::Past));
    assert!(days[march_first + 1..]
        .iter()
        .all(|day| day.status == UnitStatus::Future));
}

#[test]
fn common_year_has_365_days() {
    let days = generate_day_sequence(2023, at(2024, 3, 1));
    assert_eq!(days.len(), 365);
    assert_eq!(days[364].date, date(2023, 12, 31));
}

#[test]
fn goal_days_list_completing_goals_for_that_year_only() {
    let mut run = Goal::new("Run", "#22c55e");
    run.completed_days.entry(2024).or_default().insert(5);
    let mut read = Goal::new("Read", "#3b82f6");
    read.completed_days.entry(2024).or_default().insert(5);
    read.completed_days.entry(2023).or_default().insert(6);

    let mut goals = GoalMap::new();
    goals.insert("run".to_string(), run);
    goals.insert("read".to_string(), read);

    let days = generate_goal_day_sequence(2024, at(2024, 6, 1), &goals);
    assert_eq!(days.len(), 366);
    assert_eq!(days[5].completed_goals, vec!["read".to_string(), "run".to_string()]);
    assert!(days[6].completed_goals.is_empty());
}
