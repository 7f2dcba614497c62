//! # Storage Layer
//!
//! The [`NoteStore`] trait is the persistence adapter the orchestrator talks to. It has
//! exactly two operations and neither can fail from the caller's point of view:
//!
//! - `save` writes the whole collection as one durable record
//! - `load` reads it back, or yields an empty collection
//!
//! Problems (missing slot, broken JSON, unwritable disk) are logged and absorbed at
//! this boundary so the session can keep working in memory.
//!
//! ## Implementations
//!
//! - [`slot_store::SlotStore`]: JSON over any [`backend::SlotBackend`]
//!   - [`fs_backend::FsBackend`]: one file per slot key in a data directory
//!   - [`mem_backend::MemBackend`]: in-memory slots for testing, with failure simulation
//!
//! ## Storage Layout
//!
//! For `FsBackend` with the default key:
//! ```text
//! <data dir>/
//! ├── config.json         # NanoteConfig
//! └── nanote-data.json    # [{id, title, content, archived, createdAt, updatedAt}, ...]
//! ```

use crate::model::NoteCollection;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod slot_store;

/// Durable home of the note collection.
///
/// The store is exclusively owned by one orchestrator; nothing else writes its slot.
pub trait NoteStore {
    /// Persist the full collection. Failures are logged, never returned.
    fn save(&mut self, notes: &NoteCollection);

    /// Read the last saved collection. Empty when nothing was saved or it is unreadable.
    fn load(&self) -> NoteCollection;
}
