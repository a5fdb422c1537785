use lifeweeks_core::annotation::goals::{add_goal, palette_color, toggle_goal_day};
use lifeweeks_core::annotation::notes::{delete_note, life_events, set_note};
use lifeweeks_core::{AnnotationError, GoalMap, NoteMap};

fn sample_notes() -> NoteMap {
    let notes = set_note(&NoteMap::new(), 1, "one", None, None);
    set_note(&notes, 7, "seven", Some("travel".to_string()), None)
}

fn goal_map_with(name: &str) -> (GoalMap, String) {
    add_goal(&GoalMap::new(), name, palette_color).expect("non-blank goal name should be accepted")
}

#[test]
fn empty_note_removes_entry_and_is_idempotent() {
    let notes = sample_notes();
    let once = set_note(&notes, 7, "", None, None);
    let twice = set_note(&once, 7, "", None, None);

    assert!(!once.contains_key(&7));
    assert_eq!(once, twice);
    assert_eq!(set_note(&NoteMap::new(), 3, "", None, None), NoteMap::new());
}

#[test]
fn set_then_delete_restores_previous_map() {
    let before = sample_notes();
    let with_note = set_note(&before, 42, "new job", None, Some("Started".to_string()));
    assert_eq!(with_note.len(), before.len() + 1);

    let after = delete_note(&with_note, 42);
    assert_eq!(after, before);
}

#[test]
fn event_name_alone_keeps_entry() {
    let notes = set_note(&NoteMap::new(), 9, "   ", None, Some("Wedding".to_string()));
    let entry = notes.get(&9).expect("event-only note should be stored");
    assert_eq!(entry.event_name.as_deref(), Some("Wedding"));
    assert!(entry.is_life_event());
}

#[test]
fn empty_event_name_counts_as_absent() {
    let notes = set_note(&sample_notes(), 1, "", None, Some(String::new()));
    assert!(!notes.contains_key(&1));
}

#[test]
fn life_events_skip_weeks_past_last_week() {
    let notes = set_note(&sample_notes(), 20, "", None, Some("Graduated".to_string()));
    let notes = set_note(&notes, 52 * 90, "", None, Some("Retired".to_string()));

    let under_eighty: Vec<u32> = life_events(&notes, 80).iter().map(|(i, _)| *i).collect();
    assert_eq!(under_eighty, vec![20]);
    let under_hundred: Vec<u32> = life_events(&notes, 100).iter().map(|(i, _)| *i).collect();
    assert_eq!(under_hundred, vec![20, 52 * 90]);
}

#[test]
fn toggle_goal_day_is_an_involution() {
    let (goals, id) = goal_map_with("Meditate");
    let goals = toggle_goal_day(&goals, &id, 2024, 10).expect("day 10 exists in 2024");
    let original = goals[&id].completed_days.clone();

    let toggled = toggle_goal_day(&goals, &id, 2024, 11).expect("day 11 exists in 2024");
    assert!(toggled[&id].is_completed(2024, 11));
    let restored = toggle_goal_day(&toggled, &id, 2024, 11).expect("untoggle should succeed");
    assert_eq!(restored[&id].completed_days, original);

    let removed = toggle_goal_day(&goals, &id, 2024, 10).expect("untoggle should succeed");
    let back = toggle_goal_day(&removed, &id, 2024, 10).expect("retoggle should succeed");
    assert_eq!(back, goals);
}

#[test]
fn toggle_unknown_goal_reports_error() {
    let err = toggle_goal_day(&GoalMap::new(), "missing", 2024, 0)
        .expect_err("empty goal map has no goals");
    assert_eq!(err, AnnotationError::GoalNotFound("missing".to_string()));
    assert_eq!(err.to_string(), "goal not found: missing");
}

#[test]
fn toggle_rejects_days_that_do_not_exist() {
    let (goals, id) = goal_map_with("Walk");
    for day in 365..400 {
        let err = toggle_goal_day(&goals, &id, 2023, day)
            .expect_err("2023 has day indices 0..365 only");
        assert_eq!(
            err,
            AnnotationError::DayOutOfRange {
                year: 2023,
                day_index: day
            }
        );
    }
    assert_eq!(
        toggle_goal_day(&goals, &id, 2023, 365)
            .expect_err("out of range")
            .to_string(),
        "day 365 does not exist in 2023"
    );
    assert!(toggle_goal_day(&goals, &id, 2023, 364).is_ok());
}

#[test]
fn goal_ids_stay_unique_across_many_inserts() {
    let mut goals = GoalMap::new();
    for n in 0..50 {
        let (next, _) = add_goal(&goals, &format!("goal {n}"), palette_color)
            .expect("numbered goal names are not blank");
        goals = next;
    }
    assert_eq!(goals.len(), 50);
}
