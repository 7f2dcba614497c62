use crate::model::{Note, NoteCollection, NoteId};

/// Notes shown in the main list, in collection order.
pub fn active(notes: &NoteCollection) -> Vec<&Note> {
    notes.iter().filter(|note| !note.archived).collect()
}

/// Notes shown in the archive dialog, in collection order.
pub fn archived(notes: &NoteCollection) -> Vec<&Note> {
    notes.iter().filter(|note| note.archived).collect()
}

/// First note eligible to become active.
pub fn first_active(notes: &NoteCollection) -> Option<&Note> {
    notes.iter().find(|note| !note.archived)
}

/// The note with `id` if it exists and is not archived.
pub fn find_active<'a>(notes: &'a NoteCollection, id: &NoteId) -> Option<&'a Note> {
    notes.find(id).filter(|note| !note.archived)
}
