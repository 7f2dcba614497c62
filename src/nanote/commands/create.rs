use crate::model::{untitled_title, Note, NoteCollection, DEFAULT_UNTITLED_PREFIX};
use chrono::{DateTime, Utc};
use std::rc::Rc;

/// Prepends a brand-new note. An absent or empty title gets the untitled default.
pub fn run(notes: &NoteCollection, title: Option<&str>) -> NoteCollection {
    run_at(notes, title, Utc::now())
}

pub fn run_at(notes: &NoteCollection, title: Option<&str>, now: DateTime<Utc>) -> NoteCollection {
    let title = match title {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => untitled_title(DEFAULT_UNTITLED_PREFIX, now),
    };
    let note = Rc::new(Note::new(title, now));

    // New note is always the newest, so it goes first
    std::iter::once(note)
        .chain(notes.entries().iter().cloned())
        .collect()
}
