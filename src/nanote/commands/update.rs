use crate::commands::helpers::replace_note;
use crate::commands::NoteUpdate;
use crate::model::{NoteCollection, NoteId};
use chrono::{DateTime, Utc};

/// Merges `updates` onto the note with `id` and refreshes its `updated_at`.
pub fn run(notes: &NoteCollection, id: &NoteId, updates: &NoteUpdate) -> NoteCollection {
    run_at(notes, id, updates, Utc::now())
}

pub fn run_at(
    notes: &NoteCollection,
    id: &NoteId,
    updates: &NoteUpdate,
    now: DateTime<Utc>,
) -> NoteCollection {
    replace_note(notes, id, now, |note| {
        if let Some(title) = &updates.title {
            note.title = title.clone();
        }
        if let Some(content) = &updates.content {
            note.content = content.clone();
        }
        if let Some(archived) = updates.archived {
            note.archived = archived;
        }
    })
}
