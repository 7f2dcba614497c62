//! Multi-select state for bulk actions in the archive dialog.
//!
//! Selection is UI state, not part of a note: it is never persisted and does not
//! survive a reload.

use crate::model::{NoteCollection, NoteId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<NoteId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `id`, or deselects it if already selected. Returns the new state.
    pub fn toggle(&mut self, id: NoteId) -> bool {
        match self.ids.iter().position(|selected| *selected == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        }
    }

    pub fn is_selected(&self, id: &NoteId) -> bool {
        self.ids.contains(id)
    }

    /// Selected ids in the order they were picked.
    pub fn ids(&self) -> &[NoteId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drops ids whose notes no longer exist.
    pub fn retain_existing(&mut self, notes: &NoteCollection) {
        self.ids.retain(|id| notes.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::delete;
    use crate::test_utils::collection_of;

    #[test]
    fn toggle_adds_then_removes() {
        let notes = collection_of(&["A", "B"]);
        let (a, b) = (notes.get(0).unwrap().id, notes.get(1).unwrap().id);
        let mut selection = Selection::new();

        assert!(selection.toggle(b));
        assert!(selection.toggle(a));
        assert_eq!(selection.ids(), &[b, a]);
        assert!(!selection.toggle(b));
        assert_eq!(selection.ids(), &[a]);
        assert!(selection.is_selected(&a));
        assert!(!selection.is_selected(&b));
    }

    #[test]
    fn retain_existing_drops_deleted() {
        let notes = collection_of(&["A", "B"]);
        let (a, b) = (notes.get(0).unwrap().id, notes.get(1).unwrap().id);
        let mut selection = Selection::new();
        selection.toggle(a);
        selection.toggle(b);

        let notes = delete::run(&notes, &a);
        selection.retain_existing(&notes);
        assert_eq!(selection.ids(), &[b]);

        selection.clear();
        assert!(selection.is_empty());
    }
}
