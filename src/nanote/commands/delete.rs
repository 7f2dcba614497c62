use crate::model::{NoteCollection, NoteId};
use std::collections::HashSet;
use std::rc::Rc;

/// Permanently removes the note with `id`. There is no tombstone.
pub fn run(notes: &NoteCollection, id: &NoteId) -> NoteCollection {
    run_many(notes, std::slice::from_ref(id))
}

/// Removes every note whose id is in `ids`; unknown ids are ignored.
pub fn run_many(notes: &NoteCollection, ids: &[NoteId]) -> NoteCollection {
    let doomed: HashSet<&NoteId> = ids.iter().collect();
    notes
        .entries()
        .iter()
        .filter(|note| !doomed.contains(&note.id))
        .map(Rc::clone)
        .collect()
}
