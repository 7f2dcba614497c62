use crate::commands::helpers::replace_note;
use crate::model::{NoteCollection, NoteId};
use chrono::{DateTime, Utc};

pub fn archive(notes: &NoteCollection, id: &NoteId) -> NoteCollection {
    archive_at(notes, id, Utc::now())
}

pub fn archive_at(notes: &NoteCollection, id: &NoteId, now: DateTime<Utc>) -> NoteCollection {
    set_archived(notes, id, true, now)
}

pub fn unarchive(notes: &NoteCollection, id: &NoteId) -> NoteCollection {
    unarchive_at(notes, id, Utc::now())
}

pub fn unarchive_at(notes: &NoteCollection, id: &NoteId, now: DateTime<Utc>) -> NoteCollection {
    set_archived(notes, id, false, now)
}

fn set_archived(
    notes: &NoteCollection,
    id: &NoteId,
    archived: bool,
    now: DateTime<Utc>,
) -> NoteCollection {
    replace_note(notes, id, now, |note| note.archived = archived)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::test_utils::{collection_of, fixed_now};
    use chrono::Duration;
    use uuid::Uuid;

    #[test]
    fn archives_note_in_place() {
        let notes = collection_of(&["First", "Second"]);
        let id = notes.first().unwrap().id;
        let result = archive(&notes, &id);

        assert_eq!(result.len(), 2);
        assert!(result.first().unwrap().archived);
        assert_eq!(result.first().unwrap().id, id);
        assert_eq!(list::active(&result).len(), 1);
        assert_eq!(list::archived(&result).len(), 1);
    }

    #[test]
    fn archive_then_unarchive_restores_fields() {
        let notes = collection_of(&["First"]);
        let id = notes.first().unwrap().id;
        let archived = archive_at(&notes, &id, fixed_now() + Duration::seconds(1));
        let restored = unarchive_at(&archived, &id, fixed_now() + Duration::seconds(2));

        let original = notes.first().unwrap();
        let note = restored.first().unwrap();
        assert!(!note.archived);
        assert_eq!(note.title, original.title);
        assert_eq!(note.content, original.content);
        assert_eq!(note.created_at, original.created_at);
        assert_eq!(note.updated_at, fixed_now() + Duration::seconds(2));
    }

    #[test]
    fn unarchive_of_active_note_keeps_it_active() {
        let notes = collection_of(&["First"]);
        let id = notes.first().unwrap().id;
        let result = unarchive(&notes, &id);
        assert!(!result.first().unwrap().archived);
    }

    #[test]
    fn missing_id_is_a_noop() {
        let notes = collection_of(&["First"]);
        assert_eq!(archive(&notes, &Uuid::new_v4()), notes);
        assert_eq!(unarchive(&notes, &Uuid::new_v4()), notes);
    }
}
