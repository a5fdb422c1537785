//! Daily goals with per-year completion sets.
//!
//! Completions are keyed by `(year, day_index)`; the same day index in two
//! different years refers to two different days.

use super::{AnnotationError, AnnotationResult};
use crate::calendar::math::days_in_year;
use crate::model::record::{Goal, GoalId, GoalMap, UnitIndex};
use uuid::Uuid;

/// Colors cycled through by [`palette_color`].
pub const GOAL_PALETTE: [&str; 5] = ["#f97316", "#22c55e", "#3b82f6", "#a855f7", "#ec4899"];

/// Default color picker: cycles the palette by current goal count.
pub fn palette_color(goal_count: usize) -> String {
    GOAL_PALETTE[goal_count % GOAL_PALETTE.len()].to_string()
}

/// Adds a goal with an empty completion set and returns its new id.
///
/// `pick_color` receives the number of goals before insertion.
///
/// # Errors
/// - [`AnnotationError::EmptyGoalName`] when `name` is blank.
pub fn add_goal(
    goals: &GoalMap,
    name: &str,
    pick_color: impl FnOnce(usize) -> String,
) -> AnnotationResult<(GoalMap, GoalId)> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AnnotationError::EmptyGoalName);
    }

    let mut id = Uuid::new_v4().to_string();
    while goals.contains_key(&id) {
        id = Uuid::new_v4().to_string();
    }

    let mut next = goals.clone();
    next.insert(id.clone(), Goal::new(name, pick_color(goals.len())));
    Ok((next, id))
}

/// Removes a goal; absent ids are a no-op.
pub fn remove_goal(goals: &GoalMap, goal_id: &str) -> GoalMap {
    let mut next = goals.clone();
    next.remove(goal_id);
    next
}

/// Flips completion of `day_index` in `year` for one goal.
///
/// Applying the same toggle twice restores the original set. A year whose
/// set becomes empty is dropped from the goal.
///
/// # Errors
/// - [`AnnotationError::GoalNotFound`] when `goal_id` is not in `goals`.
/// - [`AnnotationError::DayOutOfRange`] when `day_index >= days_in_year(year)`.
pub fn toggle_goal_day(
    goals: &GoalMap,
    goal_id: &str,
    year: i32,
    day_index: UnitIndex,
) -> AnnotationResult<GoalMap> {
    if !goals.contains_key(goal_id) {
        return Err(AnnotationError::GoalNotFound(goal_id.to_string()));
    }
    if day_index >= days_in_year(year) {
        return Err(AnnotationError::DayOutOfRange { year, day_index });
    }

    let mut next = goals.clone();
    if let Some(goal) = next.get_mut(goal_id) {
        let days = goal.completed_days.entry(year).or_default();
        if !days.remove(&day_index) {
            days.insert(day_index);
        }
        if days.is_empty() {
            goal.completed_days.remove(&year);
        }
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::{add_goal, palette_color, remove_goal, toggle_goal_day, GOAL_PALETTE};
    use crate::annotation::AnnotationError;
    use crate::model::record::GoalMap;

    #[test]
    fn palette_cycles() {
        assert_eq!(palette_color(0), GOAL_PALETTE[0]);
        assert_eq!(palette_color(5), GOAL_PALETTE[0]);
        assert_eq!(palette_color(7), GOAL_PALETTE[2]);
    }

    #[test]
    fn add_goal_trims_name_and_picks_color_from_count() {
        let (goals, first) = add_goal(&GoalMap::new(), "  Run  ", palette_color)
            .expect("padded name should trim to a non-blank one");
        let (goals, second) = add_goal(&goals, "Read", palette_color).expect("second goal should be added");
        assert_ne!(first, second);
        assert_eq!(goals[&first].name, "Run");
        assert_eq!(goals[&first].color, GOAL_PALETTE[0]);
        assert_eq!(goals[&second].color, GOAL_PALETTE[1]);
        assert!(goals[&second].completed_days.is_empty());
    }

    #[test]
    fn add_goal_rejects_blank_name() {
        let err =
            add_goal(&GoalMap::new(), "   ", palette_color).expect_err("blank name must fail");
        assert_eq!(err, AnnotationError::EmptyGoalName);
    }

    #[test]
    fn toggle_same_index_in_different_years_is_independent() {
        let (goals, id) = add_goal(&GoalMap::new(), "Stretch", palette_color).expect("name is not blank");
        let goals = toggle_goal_day(&goals, &id, 2023, 42).expect("day 42 exists in 2023");
        let goals = toggle_goal_day(&goals, &id, 2024, 42).expect("day 42 exists in 2024");
        let goals = toggle_goal_day(&goals, &id, 2023, 42).expect("untoggle should succeed");
        assert!(!goals[&id].is_completed(2023, 42));
        assert!(goals[&id].is_completed(2024, 42));
        assert!(!goals[&id].completed_days.contains_key(&2023));
    }

    #[test]
    fn toggle_rejects_day_past_end_of_year() {
        let (goals, id) = add_goal(&GoalMap::new(), "Swim", palette_color)
            .expect("non-blank name should be accepted");

        let err = toggle_goal_day(&goals, &id, 2023, 365)
            .expect_err("2023 has no day index 365");
        assert_eq!(
            err,
            AnnotationError::DayOutOfRange {
                year: 2023,
                day_index: 365
            }
        );
        assert!(toggle_goal_day(&goals, &id, 2023, 400).is_err());

        let leap = toggle_goal_day(&goals, &id, 2024, 365).expect("2024 is a leap year");
        assert!(leap[&id].is_completed(2024, 365));
    }

    #[test]
    fn remove_goal_drops_entry() {
        let (goals, id) = add_goal(&GoalMap::new(), "Walk", palette_color).expect("name is not blank");
        assert!(remove_goal(&goals, &id).is_empty());
        assert_eq!(remove_goal(&goals, "missing"), goals);
    }
}
