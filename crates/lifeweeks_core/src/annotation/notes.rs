//! Week annotations: plain notes and life events.

use crate::calendar::math::total_weeks;
use crate::model::record::{Annotation, NoteMap, UnitIndex};

/// Inserts or replaces the annotation at `index`.
///
/// Blank `text` with no `event_name` removes the entry instead, so applying
/// an empty note is idempotent.
pub fn set_note(
    notes: &NoteMap,
    index: UnitIndex,
    text: impl Into<String>,
    category: Option<String>,
    event_name: Option<String>,
) -> NoteMap {
    let annotation = Annotation::new(text, category, event_name);
    let mut next = notes.clone();
    if annotation.is_empty() {
        next.remove(&index);
    } else {
        next.insert(index, annotation);
    }
    next
}

/// Removes the annotation at `index`; absent keys are a no-op.
pub fn delete_note(notes: &NoteMap, index: UnitIndex) -> NoteMap {
    let mut next = notes.clone();
    next.remove(&index);
    next
}

/// Visible annotations carrying an event name, ordered by week index.
pub fn life_events(notes: &NoteMap, life_expectancy: u32) -> Vec<(UnitIndex, &Annotation)> {
    visible_notes(notes, life_expectancy)
        .into_iter()
        .filter(|(_, annotation)| annotation.is_life_event())
        .collect()
}

/// Annotations that fall inside a lifespan of `life_expectancy` years.
///
/// Entries past the last week stay stored but are not shown.
pub fn visible_notes(notes: &NoteMap, life_expectancy: u32) -> Vec<(UnitIndex, &Annotation)> {
    let total = total_weeks(life_expectancy);
    notes
        .iter()
        .take_while(|(index, _)| u64::from(**index) < total)
        .map(|(index, annotation)| (*index, annotation))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{delete_note, life_events, set_note, visible_notes};
    use crate::model::record::NoteMap;

    #[test]
    fn set_note_overwrites_existing_entry() {
        let notes = set_note(&NoteMap::new(), 4, "first", None, None);
        let notes = set_note(&notes, 4, "second", Some("work".to_string()), None);
        let entry = notes.get(&4).expect("note at week 4 was just set");
        assert_eq!(entry.text, "second");
        assert_eq!(entry.category.as_deref(), Some("work"));
    }

    #[test]
    fn whitespace_text_without_event_removes_entry() {
        let notes = set_note(&NoteMap::new(), 4, "keep", None, None);
        let cleared = set_note(&notes, 4, "  \n", Some("work".to_string()), None);
        assert!(cleared.is_empty());
        assert_eq!(notes.len(), 1, "input map must stay untouched");
    }

    #[test]
    fn delete_absent_key_is_noop() {
        let notes = set_note(&NoteMap::new(), 1, "a", None, None);
        assert_eq!(delete_note(&notes, 99), notes);
    }

    #[test]
    fn life_events_and_visibility() {
        let mut notes = NoteMap::new();
        notes = set_note(&notes, 10, "", None, Some("Moved".to_string()));
        notes = set_note(&notes, 3, "note", None, None);
        notes = set_note(&notes, 52 * 80, "beyond", None, Some("Late".to_string()));

        let events = life_events(&notes, 80);
        assert_eq!(events.iter().map(|(i, _)| *i).collect::<Vec<_>>(), vec![10]);
        let events = life_events(&notes, 81);
        assert_eq!(events.iter().map(|(i, _)| *i).collect::<Vec<_>>(), vec![10, 4160]);

        let visible = visible_notes(&notes, 80);
        assert_eq!(visible.iter().map(|(i, _)| *i).collect::<Vec<_>>(), vec![3, 10]);
        assert_eq!(visible_notes(&notes, 81).len(), 3);
    }
}
