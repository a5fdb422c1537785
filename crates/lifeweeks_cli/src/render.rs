//! Plain-text and JSON output for computed views.

use lifeweeks_core::calendar::math::quarter_label;
use lifeweeks_core::{
    Annotation, DayGrouping, Goal, GoalDayUnit, GoalProgress, LifeStats, UnitStatus, WeekUnit,
    YearStats,
};
use serde_json::json;
use std::error::Error;

type RenderResult = Result<(), Box<dyn Error>>;

pub fn life_stats(stats: &LifeStats, as_json: bool) -> RenderResult {
    if as_json {
        return print_json(&json!(stats));
    }
    println!("Age            {} years {} months", stats.age_years, stats.age_months);
    println!("Current week   {} of 52", stats.current_week);
    println!("Weeks lived    {} of {}", stats.weeks_lived, stats.total_weeks);
    println!("Weeks left     {}", stats.weeks_remaining);
    println!("Progress       {:.1}%", stats.progress_percent);
    Ok(())
}

pub fn year_stats(stats: &YearStats, as_json: bool) -> RenderResult {
    if as_json {
        return print_json(&json!(stats));
    }
    println!(
        "{}: day {} of {}, {} days left, {:.1}% complete",
        stats.year, stats.day_of_year, stats.total_days, stats.days_left, stats.progress_percent
    );
    Ok(())
}

/// One row per `cols` weeks: `#` past, `@` current, `.` future, `*` life event.
pub fn grid(weeks: &[WeekUnit], cols: usize, as_json: bool) -> RenderResult {
    if as_json {
        return print_json(&json!(weeks));
    }
    for (row, chunk) in weeks.chunks(cols.max(1)).enumerate() {
        let cells: String = chunk.iter().map(cell).collect();
        println!("{row:>4} {cells}");
    }
    Ok(())
}

fn cell(week: &WeekUnit) -> char {
    if week.is_life_event() {
        return '*';
    }
    match week.status {
        UnitStatus::Past => '#',
        UnitStatus::Current => '@',
        UnitStatus::Future => '.',
    }
}

pub fn note(index: u32, annotation: Option<&Annotation>, as_json: bool) -> RenderResult {
    if as_json {
        return print_json(&json!({ "index": index, "note": annotation }));
    }
    match annotation {
        Some(annotation) => println!("week {index}: {}", describe(annotation)),
        None => println!("week {index}: no note"),
    }
    Ok(())
}

pub fn events(events: &[(u32, &Annotation)], as_json: bool) -> RenderResult {
    if as_json {
        let rows: Vec<_> = events
            .iter()
            .map(|(index, annotation)| json!({ "index": index, "note": annotation }))
            .collect();
        return print_json(&json!(rows));
    }
    if events.is_empty() {
        println!("no life events");
    }
    for (index, annotation) in events {
        println!("week {index:>5}  {}", describe(annotation));
    }
    Ok(())
}

pub fn goals(rows: &[(&str, &Goal, GoalProgress)], as_json: bool) -> RenderResult {
    if as_json {
        let rows: Vec<_> = rows
            .iter()
            .map(|(id, goal, progress)| {
                json!({
                    "id": id,
                    "name": goal.name,
                    "color": goal.color,
                    "progress": progress,
                })
            })
            .collect();
        return print_json(&json!(rows));
    }
    if rows.is_empty() {
        println!("no goals");
    }
    for (id, goal, progress) in rows {
        println!(
            "{id}  {} ({})  {} days in {}, {:.0}% completion",
            goal.name, goal.color, progress.completed_days, progress.year, progress.completion_percent
        );
    }
    Ok(())
}

/// Goal legend followed by one row per group. A day prints the number of
/// goals completed on it, otherwise `-` past, `@` today, `.` future.
pub fn goal_calendar(
    year: i32,
    rows: &[(&str, &Goal, GoalProgress)],
    groups: &[Vec<&GoalDayUnit>],
    grouping: DayGrouping,
    as_json: bool,
) -> RenderResult {
    if as_json {
        let goals: Vec<_> = rows
            .iter()
            .map(|(id, goal, progress)| {
                json!({ "id": id, "name": goal.name, "color": goal.color, "progress": progress })
            })
            .collect();
        let groups: Vec<_> = groups
            .iter()
            .map(|days| json!({ "label": group_label(days, grouping), "days": days }))
            .collect();
        return print_json(&json!({ "year": year, "goals": goals, "groups": groups }));
    }

    goals(rows, false)?;
    for days in groups {
        let cells: String = days.iter().map(|unit| goal_cell(unit)).collect();
        println!("{:>4} {cells}", group_label(days, grouping));
    }
    Ok(())
}

fn group_label(days: &[&GoalDayUnit], grouping: DayGrouping) -> String {
    let Some(first) = days.first() else {
        return String::new();
    };
    match grouping {
        DayGrouping::Months => first.day.date.format("%b").to_string(),
        DayGrouping::Quarters => quarter_label(first.day.month).to_string(),
        DayGrouping::Weeks => format!("W{}", first.day.week_of_year + 1),
    }
}

fn goal_cell(unit: &GoalDayUnit) -> char {
    match unit.completed_goals.len() {
        0 => match unit.day.status {
            UnitStatus::Past => '-',
            UnitStatus::Current => '@',
            UnitStatus::Future => '.',
        },
        count => char::from_digit(count.min(9) as u32, 10).unwrap_or('9'),
    }
}

pub fn message(text: &str, as_json: bool) -> RenderResult {
    if as_json {
        return print_json(&json!({ "message": text }));
    }
    println!("{text}");
    Ok(())
}

fn describe(annotation: &Annotation) -> String {
    let mut parts = Vec::new();
    if let Some(event_name) = annotation.event_name.as_deref() {
        parts.push(format!("[{event_name}]"));
    }
    if let Some(category) = annotation.category.as_deref() {
        parts.push(format!("({category})"));
    }
    if !annotation.text.trim().is_empty() {
        parts.push(annotation.text.clone());
    }
    parts.join(" ")
}

fn print_json(value: &serde_json::Value) -> RenderResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
