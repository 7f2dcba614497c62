//! # API Facade
//!
//! [`NanoteApi`] is the single entry point UIs drive. It owns the live collection, the
//! active-note pointer and the persistence lifecycle:
//!
//! - **Dispatches** intents to the pure Note Store functions in `commands/`
//! - **Reselects** the active note after archive and delete
//! - **Persists** the resulting collection after every settle
//!
//! ## Startup
//!
//! Construction loads the store. An empty store gets a welcome note, which becomes
//! active and is saved right away; otherwise the first non-archived note becomes
//! active. Nothing is written before loading finishes, so a slow or failed load can
//! never overwrite durable state with an empty collection.
//!
//! ## Failure Semantics
//!
//! Every method is infallible. Missing ids are no-ops and the store absorbs its own
//! errors, so the in-memory collection is always the source of truth.

use crate::commands::export::NoteExport;
use crate::commands::{archive, create, delete, export, list, update, NoteUpdate};
use crate::config::NanoteConfig;
use crate::model::{untitled_title, Note, NoteCollection, NoteId};
use crate::store::NoteStore;
use chrono::Utc;
use log::{debug, info};

/// The orchestrator for a single-user note session.
///
/// Generic over `NoteStore` to allow different persistence backends.
pub struct NanoteApi<S: NoteStore> {
    store: S,
    config: NanoteConfig,
    notes: NoteCollection,
    active_id: Option<NoteId>,
    loaded: bool,
}

impl<S: NoteStore> NanoteApi<S> {
    pub fn new(store: S, config: NanoteConfig) -> Self {
        let mut api = Self {
            store,
            config,
            notes: NoteCollection::new(),
            active_id: None,
            loaded: false,
        };
        api.start();
        api
    }

    fn start(&mut self) {
        let stored = self.store.load();

        if stored.is_empty() {
            let notes = create::run(&stored, Some(&self.config.welcome_title));
            self.active_id = notes.first().map(|note| note.id);
            self.notes = notes;
            self.store.save(&self.notes);
            info!("Seeded empty store with welcome note");
        } else {
            self.active_id = list::first_active(&stored).map(|note| note.id);
            info!("Loaded {} notes", stored.len());
            self.notes = stored;
        }

        self.loaded = true;
    }

    /// Replaces the collection with the next version and persists it.
    fn settle(&mut self, notes: NoteCollection) {
        self.notes = notes;
        if self.loaded {
            self.store.save(&self.notes);
        }
    }

    fn untitled(&self) -> String {
        untitled_title(&self.config.untitled_prefix, Utc::now())
    }

    fn title_or_untitled(&self, title: Option<&str>) -> String {
        match title {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => self.untitled(),
        }
    }

    pub fn loaded(&self) -> bool {
        self.loaded
    }

    pub fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    pub fn config(&self) -> &NanoteConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn active_notes(&self) -> Vec<&Note> {
        list::active(&self.notes)
    }

    pub fn archived_notes(&self) -> Vec<&Note> {
        list::archived(&self.notes)
    }

    /// The raw selection pointer, which may name a note that is gone or archived.
    pub fn active_note_id(&self) -> Option<NoteId> {
        self.active_id
    }

    pub fn set_active_note_id(&mut self, id: Option<NoteId>) {
        self.active_id = id;
    }

    /// The note the editor shows.
    ///
    /// With a pointer set this is that note, unless it is missing or archived. Without
    /// one it is the first non-archived note.
    pub fn active_note(&self) -> Option<&Note> {
        match &self.active_id {
            Some(id) => list::find_active(&self.notes, id),
            None => list::first_active(&self.notes),
        }
    }

    fn active_note_key(&self) -> Option<NoteId> {
        self.active_note().map(|note| note.id)
    }

    /// Creates a note at the top of the list and makes it active.
    pub fn create_note(&mut self, title: Option<&str>) -> Note {
        let title = self.title_or_untitled(title);
        let notes = create::run(&self.notes, Some(&title));
        let note = notes
            .first()
            .cloned()
            .unwrap_or_else(|| Note::new(title, Utc::now()));
        debug!("Created note {}", note.id);

        self.active_id = Some(note.id);
        self.settle(notes);
        note
    }

    pub fn update_note(&mut self, id: &NoteId, updates: &NoteUpdate) {
        let notes = update::run(&self.notes, id, updates);
        self.settle(notes);
    }

    /// Renames a note from the list's inline editor.
    ///
    /// The title is trimmed; blank or unchanged titles are ignored. Returns whether
    /// the note was renamed.
    pub fn rename_note(&mut self, id: &NoteId, title: &str) -> bool {
        let title = title.trim();
        let renamable = self
            .notes
            .find(id)
            .is_some_and(|note| !title.is_empty() && note.title != title);
        if renamable {
            self.update_note(id, &NoteUpdate::new().title(title));
        }
        renamable
    }

    /// Binds the editor textbox: writes `content` into the active note, if any.
    pub fn update_active_content(&mut self, content: &str) -> bool {
        match self.active_note_key() {
            Some(id) => {
                self.update_note(&id, &NoteUpdate::new().content(content));
                true
            }
            None => false,
        }
    }

    /// Archives a note. When it was the active one, the next non-archived note in
    /// display order takes over, or a fresh untitled note when none is left.
    pub fn archive_note(&mut self, id: &NoteId) {
        let was_active = self.active_note_key() == Some(*id);
        let position = self.notes.iter().position(|note| &note.id == id);
        let mut notes = archive::archive(&self.notes, id);

        if was_active {
            let after = position.map_or(0, |p| p + 1);
            let next = notes
                .iter()
                .skip(after)
                .find(|note| !note.archived)
                .or_else(|| list::first_active(&notes))
                .map(|note| note.id);

            self.active_id = match next {
                Some(next) => Some(next),
                None => {
                    let title = self.untitled();
                    notes = create::run(&notes, Some(&title));
                    debug!("Archived the last active note, created {}", title);
                    notes.first().map(|note| note.id)
                }
            };
        }

        debug!("Archived note {}", id);
        self.settle(notes);
    }

    /// Archives whatever the editor is showing. Returns whether a note was archived.
    pub fn archive_active(&mut self) -> bool {
        match self.active_note_key() {
            Some(id) => {
                self.archive_note(&id);
                true
            }
            None => false,
        }
    }

    pub fn unarchive_note(&mut self, id: &NoteId) {
        let notes = archive::unarchive(&self.notes, id);
        debug!("Unarchived note {}", id);
        self.settle(notes);
    }

    /// Permanently deletes notes. A deleted active pointer moves to the first
    /// remaining non-archived note; deleting everything leaves one untitled note.
    pub fn delete_notes(&mut self, ids: &[NoteId]) {
        let mut notes = delete::run_many(&self.notes, ids);
        debug!("Deleted {} notes", self.notes.len() - notes.len());

        let removes_active = self.active_id.is_some_and(|active| ids.contains(&active));
        if removes_active {
            self.active_id = list::first_active(&notes).map(|note| note.id);
        }

        if notes.is_empty() {
            let title = self.untitled();
            notes = create::run(&notes, Some(&title));
            self.active_id = notes.first().map(|note| note.id);
        }

        self.settle(notes);
    }

    /// Forces a write of the current collection.
    pub fn save(&mut self) {
        if self.loaded {
            self.store.save(&self.notes);
        }
    }

    pub fn export_note(&self, id: &NoteId) -> Option<NoteExport> {
        self.notes.find(id).map(export::run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_STORAGE_KEY;
    use crate::store::mem_backend::MemBackend;
    use crate::store::slot_store::SlotStore;
    use crate::test_utils::{collection_of, init_logging};
    use uuid::Uuid;

    type TestApi = NanoteApi<SlotStore<MemBackend>>;

    fn empty_api() -> TestApi {
        NanoteApi::new(SlotStore::with_backend(MemBackend::new()), NanoteConfig::default())
    }

    fn api_with(notes: &NoteCollection) -> TestApi {
        let json = serde_json::to_string(notes).unwrap();
        let backend = MemBackend::with_slot(DEFAULT_STORAGE_KEY, &json);
        NanoteApi::new(SlotStore::with_backend(backend), NanoteConfig::default())
    }

    fn persisted(api: &TestApi) -> NoteCollection {
        api.store().try_load().unwrap().unwrap()
    }

    fn titles(api: &TestApi) -> Vec<String> {
        api.notes().iter().map(|n| n.title.clone()).collect()
    }

    #[test]
    fn empty_store_gets_welcome_note() {
        let api = empty_api();
        assert!(api.loaded());
        assert_eq!(api.notes().len(), 1);

        let welcome = api.notes().first().unwrap();
        assert_eq!(welcome.title, "Welcome to nanote");
        assert_eq!(api.active_note_id(), Some(welcome.id));
        assert_eq!(api.active_note().unwrap().id, welcome.id);
        assert_eq!(persisted(&api), *api.notes());
        assert_eq!(api.store().backend().write_count(), 1);
    }

    #[test]
    fn welcome_title_comes_from_config() {
        let config = NanoteConfig {
            welcome_title: "Hi".into(),
            ..NanoteConfig::default()
        };
        let api = NanoteApi::new(SlotStore::with_backend(MemBackend::new()), config);
        assert_eq!(api.notes().first().unwrap().title, "Hi");
    }

    #[test]
    fn loading_existing_notes_does_not_write() {
        let notes = collection_of(&["A", "B"]);
        let api = api_with(&notes);

        assert_eq!(*api.notes(), notes);
        assert_eq!(api.active_note_id(), Some(notes.first().unwrap().id));
        assert_eq!(api.store().backend().write_count(), 0);
    }

    #[test]
    fn startup_skips_archived_notes() {
        let notes = collection_of(&["A", "B"]);
        let a = notes.first().unwrap().id;
        let notes = archive::archive(&notes, &a);
        let api = api_with(&notes);

        assert_eq!(api.active_note().unwrap().title, "B");
    }

    #[test]
    fn startup_with_only_archived_notes_has_no_active() {
        let notes = collection_of(&["A"]);
        let a = notes.first().unwrap().id;
        let api = api_with(&archive::archive(&notes, &a));

        assert_eq!(api.notes().len(), 1);
        assert!(api.active_note_id().is_none());
        assert!(api.active_note().is_none());
    }

    #[test]
    fn create_note_becomes_active_and_persists() {
        let mut api = empty_api();
        let note = api.create_note(Some("My note"));

        assert_eq!(api.active_note_id(), Some(note.id));
        assert_eq!(api.notes().first().unwrap().id, note.id);
        assert_eq!(persisted(&api), *api.notes());
    }

    #[test]
    fn create_note_twice_is_most_recent_first() {
        let mut api = empty_api();
        let first = api.create_note(Some("My note"));
        let second = api.create_note(Some("My note"));

        assert_eq!(api.notes().get(0).unwrap().id, second.id);
        assert_eq!(api.notes().get(1).unwrap().id, first.id);
        assert_eq!(api.active_note_id(), Some(second.id));
    }

    #[test]
    fn create_note_without_title_uses_prefix() {
        let config = NanoteConfig {
            untitled_prefix: "draft".into(),
            ..NanoteConfig::default()
        };
        let mut api = NanoteApi::new(SlotStore::with_backend(MemBackend::new()), config);
        let note = api.create_note(None);
        assert!(note.title.starts_with("draft_"));
    }

    #[test]
    fn update_note_keeps_selection() {
        let notes = collection_of(&["A", "B"]);
        let b = notes.get(1).unwrap().id;
        let mut api = api_with(&notes);
        let active = api.active_note_id();

        api.update_note(&b, &NoteUpdate::new().content("hello"));
        assert_eq!(api.notes().find(&b).unwrap().content, "hello");
        assert_eq!(api.active_note_id(), active);
        assert_eq!(persisted(&api).find(&b).unwrap().content, "hello");
    }

    #[test]
    fn rename_trims_and_ignores_blank() {
        let notes = collection_of(&["A"]);
        let a = notes.first().unwrap().id;
        let mut api = api_with(&notes);

        assert!(api.rename_note(&a, "  Renamed  "));
        assert_eq!(api.notes().first().unwrap().title, "Renamed");
        assert!(!api.rename_note(&a, "   "));
        assert!(!api.rename_note(&a, "Renamed"));
        assert!(!api.rename_note(&Uuid::new_v4(), "Other"));
        assert_eq!(api.notes().first().unwrap().title, "Renamed");
    }

    #[test]
    fn update_active_content_targets_active_note() {
        let notes = collection_of(&["A", "B"]);
        let b = notes.get(1).unwrap().id;
        let mut api = api_with(&notes);
        api.set_active_note_id(Some(b));

        assert!(api.update_active_content("typed"));
        assert_eq!(api.notes().find(&b).unwrap().content, "typed");
        assert!(api.notes().first().unwrap().content.is_empty());
    }

    #[test]
    fn archive_active_selects_next() {
        let notes = collection_of(&["A", "B"]);
        let (a, b) = (notes.get(0).unwrap().id, notes.get(1).unwrap().id);
        let mut api = api_with(&notes);

        api.archive_note(&a);
        assert!(api.notes().find(&a).unwrap().archived);
        assert_eq!(api.active_note_id(), Some(b));
        assert_eq!(api.notes().len(), 2);
    }

    #[test]
    fn archive_active_prefers_following_note() {
        let notes = collection_of(&["A", "B", "C"]);
        let (b, c) = (notes.get(1).unwrap().id, notes.get(2).unwrap().id);
        let mut api = api_with(&notes);
        api.set_active_note_id(Some(b));

        api.archive_note(&b);
        assert_eq!(api.active_note_id(), Some(c));
    }

    #[test]
    fn archive_last_in_list_falls_back_to_earlier() {
        let notes = collection_of(&["A", "B"]);
        let (a, b) = (notes.get(0).unwrap().id, notes.get(1).unwrap().id);
        let mut api = api_with(&notes);
        api.set_active_note_id(Some(b));

        api.archive_note(&b);
        assert_eq!(api.active_note_id(), Some(a));
    }

    #[test]
    fn archive_only_note_creates_untitled() {
        let notes = collection_of(&["A"]);
        let a = notes.first().unwrap().id;
        let mut api = api_with(&notes);

        api.archive_note(&a);
        assert_eq!(api.notes().len(), 2);
        assert!(api.notes().find(&a).unwrap().archived);

        let fresh = api.active_note().unwrap();
        assert_ne!(fresh.id, a);
        assert!(fresh.title.starts_with("untitled_"));
        assert_eq!(api.active_note_id(), Some(fresh.id));
        assert_eq!(persisted(&api), *api.notes());
    }

    #[test]
    fn archive_inactive_note_keeps_selection() {
        let notes = collection_of(&["A", "B"]);
        let (a, b) = (notes.get(0).unwrap().id, notes.get(1).unwrap().id);
        let mut api = api_with(&notes);

        api.archive_note(&b);
        assert_eq!(api.active_note_id(), Some(a));
        assert_eq!(api.notes().len(), 2);
    }

    #[test]
    fn archive_active_command() {
        let notes = collection_of(&["A", "B"]);
        let a = notes.first().unwrap().id;
        let mut api = api_with(&notes);

        assert!(api.archive_active());
        assert!(api.notes().find(&a).unwrap().archived);
    }

    #[test]
    fn unarchive_restores_without_reselecting() {
        let notes = collection_of(&["A", "B"]);
        let (a, b) = (notes.get(0).unwrap().id, notes.get(1).unwrap().id);
        let mut api = api_with(&notes);
        api.archive_note(&a);

        api.unarchive_note(&a);
        assert!(!api.notes().find(&a).unwrap().archived);
        assert_eq!(api.active_note_id(), Some(b));
        assert_eq!(api.active_notes().len(), 2);
    }

    #[test]
    fn delete_all_leaves_one_active_note() {
        let notes = collection_of(&["A", "B"]);
        let mut api = api_with(&notes);

        api.delete_notes(&notes.ids());
        assert_eq!(api.notes().len(), 1);
        let survivor = api.notes().first().unwrap();
        assert!(!notes.contains(&survivor.id));
        assert_eq!(api.active_note_id(), Some(survivor.id));
        assert_eq!(persisted(&api), *api.notes());
    }

    #[test]
    fn delete_active_selects_first_remaining() {
        let notes = collection_of(&["A", "B", "C"]);
        let (a, b) = (notes.get(0).unwrap().id, notes.get(1).unwrap().id);
        let mut api = api_with(&notes);
        api.set_active_note_id(Some(b));

        api.delete_notes(&[b]);
        assert_eq!(api.active_note_id(), Some(a));
        assert_eq!(titles(&api), vec!["A", "C"]);
    }

    #[test]
    fn delete_active_with_only_archived_left_clears_pointer() {
        let notes = collection_of(&["A", "B"]);
        let (a, b) = (notes.get(0).unwrap().id, notes.get(1).unwrap().id);
        let mut api = api_with(&archive::archive(&notes, &b));

        api.delete_notes(&[a]);
        assert_eq!(api.notes().len(), 1);
        assert!(api.active_note_id().is_none());
        assert!(api.active_note().is_none());
    }

    #[test]
    fn delete_archived_keeps_selection() {
        let notes = collection_of(&["A", "B"]);
        let (a, b) = (notes.get(0).unwrap().id, notes.get(1).unwrap().id);
        let mut api = api_with(&archive::archive(&notes, &b));

        api.delete_notes(&[b]);
        assert_eq!(api.active_note_id(), Some(a));
        assert_eq!(api.archived_notes().len(), 0);
    }

    #[test]
    fn active_note_ignores_archived_pointer() {
        let notes = collection_of(&["A", "B"]);
        let b = notes.get(1).unwrap().id;
        let mut api = api_with(&archive::archive(&notes, &b));

        api.set_active_note_id(Some(b));
        assert!(api.active_note().is_none());
        api.set_active_note_id(Some(Uuid::new_v4()));
        assert!(api.active_note().is_none());
        api.set_active_note_id(None);
        assert_eq!(api.active_note().unwrap().title, "A");
    }

    #[test]
    fn missing_ids_are_noops() {
        let notes = collection_of(&["A"]);
        let mut api = api_with(&notes);
        let ghost = Uuid::new_v4();

        api.update_note(&ghost, &NoteUpdate::new().title("x"));
        api.archive_note(&ghost);
        api.unarchive_note(&ghost);
        api.delete_notes(&[ghost]);
        assert_eq!(*api.notes(), notes);
    }

    #[test]
    fn write_failures_do_not_block_mutation() {
        init_logging();
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let mut api = NanoteApi::new(SlotStore::with_backend(backend), NanoteConfig::default());

        let note = api.create_note(Some("In memory only"));
        api.update_note(&note.id, &NoteUpdate::new().content("still here"));
        api.save();

        assert_eq!(api.notes().len(), 2);
        assert_eq!(api.active_note().unwrap().content, "still here");
        assert_eq!(api.store().backend().write_count(), 0);
    }

    #[test]
    fn export_note_by_id() {
        let notes = collection_of(&["Todo"]);
        let id = notes.first().unwrap().id;
        let mut api = api_with(&notes);
        api.update_note(&id, &NoteUpdate::new().content("one\ntwo"));

        let export = api.export_note(&id).unwrap();
        assert_eq!(export.file_name, "Todo.txt");
        assert_eq!(export.content, "one\ntwo");
        assert!(api.export_note(&Uuid::new_v4()).is_none());
    }
}
