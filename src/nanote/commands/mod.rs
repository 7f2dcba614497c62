//! # Note Store
//!
//! Pure operations over a [`NoteCollection`]. Each module exposes `run`-style
//! functions that borrow the current collection and return the next one:
//!
//! - the input is never modified; a caller holding the old version keeps it intact
//! - notes an operation does not touch are shared with the old version
//! - a missing id is never an error, the operation degrades to a no-op
//!
//! [`NoteCollection`]: crate::model::NoteCollection

pub mod archive;
pub mod create;
pub mod delete;
pub mod export;
pub(crate) mod helpers;
pub mod list;
pub mod update;

/// Fields to merge onto a note. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub archived: Option<bool>,
}

impl NoteUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.archived.is_none()
    }
}
