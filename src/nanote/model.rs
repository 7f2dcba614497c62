use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use uuid::Uuid;

pub type NoteId = Uuid;

pub const DEFAULT_UNTITLED_PREFIX: &str = "untitled";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    // Records written before archiving existed carry no flag
    #[serde(default)]
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// A fresh note: new id, empty content, not archived, both timestamps at `now`.
    pub fn new(title: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content: String::new(),
            archived: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Title as rendered by list rows and the status bar.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    /// Relative age of the last edit, e.g. "5 minutes ago".
    pub fn updated_ago(&self, now: DateTime<Utc>) -> String {
        let elapsed = now.signed_duration_since(self.updated_at);
        timeago::Formatter::new().convert(elapsed.to_std().unwrap_or_default())
    }
}

/// Title given to notes created without one: `untitled_2024_01_15_14_30_00`.
pub fn untitled_title(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{}_{}", prefix, now.format("%Y_%m_%d_%H_%M_%S"))
}

/// Ordered notes, most recently created first.
///
/// Elements are shared: a new collection produced from an old one reuses every
/// note it did not touch, so unchanged notes stay pointer-equal across versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteCollection(Vec<Rc<Note>>);

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.0.iter().map(|note| note.as_ref())
    }

    /// Shared handles, for callers that need to compare versions by identity.
    pub fn entries(&self) -> &[Rc<Note>] {
        &self.0
    }

    pub fn first(&self) -> Option<&Note> {
        self.0.first().map(|note| note.as_ref())
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.0.get(index).map(|note| note.as_ref())
    }

    pub fn find(&self, id: &NoteId) -> Option<&Note> {
        self.iter().find(|note| &note.id == id)
    }

    pub fn contains(&self, id: &NoteId) -> bool {
        self.find(id).is_some()
    }

    pub fn ids(&self) -> Vec<NoteId> {
        self.iter().map(|note| note.id).collect()
    }
}

impl From<Vec<Note>> for NoteCollection {
    fn from(notes: Vec<Note>) -> Self {
        notes.into_iter().collect()
    }
}

impl FromIterator<Note> for NoteCollection {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        Self(iter.into_iter().map(Rc::new).collect())
    }
}

impl FromIterator<Rc<Note>> for NoteCollection {
    fn from_iter<I: IntoIterator<Item = Rc<Note>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
