use super::backend::SlotBackend;
use super::NoteStore;
use crate::config::DEFAULT_STORAGE_KEY;
use crate::error::{NanoteError, Result};
use crate::model::NoteCollection;
use log::{debug, error, warn};

/// JSON persistence of the whole collection in a single backend slot.
pub struct SlotStore<B: SlotBackend> {
    /// The underlying storage backend.
    pub(crate) backend: B,
    key: String,
}

impl<B: SlotBackend> SlotStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Fallible save, for callers that want the error instead of a log line.
    pub fn try_save(&self, notes: &NoteCollection) -> Result<()> {
        let json = serde_json::to_string(notes).map_err(NanoteError::Serialization)?;
        self.backend.write(&self.key, &json)
    }

    /// Fallible load. `Ok(None)` means the slot was never written.
    pub fn try_load(&self) -> Result<Option<NoteCollection>> {
        match self.backend.read(&self.key)? {
            None => Ok(None),
            Some(raw) => {
                let notes = serde_json::from_str(&raw).map_err(NanoteError::Serialization)?;
                Ok(Some(notes))
            }
        }
    }
}

impl<B: SlotBackend> NoteStore for SlotStore<B> {
    fn save(&mut self, notes: &NoteCollection) {
        match self.try_save(notes) {
            Ok(()) => debug!("Saved {} notes to slot {}", notes.len(), self.key),
            Err(e) => error!("Failed to save notes to slot {}: {}", self.key, e),
        }
    }

    fn load(&self) -> NoteCollection {
        match self.try_load() {
            Ok(Some(notes)) => {
                debug!("Loaded {} notes from slot {}", notes.len(), self.key);
                notes
            }
            Ok(None) => {
                debug!("Slot {} is empty", self.key);
                NoteCollection::new()
            }
            Err(e) => {
                warn!("Failed to load notes from slot {}: {}", self.key, e);
                NoteCollection::new()
            }
        }
    }
}
