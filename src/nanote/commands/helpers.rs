use crate::model::{Note, NoteCollection, NoteId};
use chrono::{DateTime, Utc};
use std::rc::Rc;

/// Rebuilds `notes`, passing a copy of the note with `id` through `edit` and
/// stamping it with `now`. Every other element is shared with the input.
pub fn replace_note<F>(notes: &NoteCollection, id: &NoteId, now: DateTime<Utc>, edit: F) -> NoteCollection
where
    F: Fn(&mut Note),
{
    notes
        .entries()
        .iter()
        .map(|entry| {
            if &entry.id != id {
                return Rc::clone(entry);
            }
            let mut note = Note::clone(entry);
            edit(&mut note);
            // never let a skewed clock move a note before its creation
            note.updated_at = now.max(note.created_at);
            Rc::new(note)
        })
        .collect()
}
