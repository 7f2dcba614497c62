//! Editor mode state machine.
//!
//! ```text
//!            enter_insert            enter_visual
//!   Insert <────────────── Normal ──────────────> Visual
//!     │                     ▲  ▲                    │
//!     └──── enter_normal ───┘  └─── enter_normal ───┘
//! ```
//!
//! `cancel` (the Escape key) returns to `Normal` from anywhere. Insert and Visual do
//! not lead into each other directly.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorMode {
    #[default]
    Normal,
    Insert,
    Visual,
}

impl EditorMode {
    /// Status bar text for the mode.
    pub fn status_message(&self) -> &'static str {
        match self {
            EditorMode::Normal => "-- NORMAL --",
            EditorMode::Insert => "-- INSERT --",
            EditorMode::Visual => "-- VISUAL --",
        }
    }

    fn can_enter(&self, target: EditorMode) -> bool {
        *self == target || *self == EditorMode::Normal || target == EditorMode::Normal
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditorMode::Normal => "normal",
            EditorMode::Insert => "insert",
            EditorMode::Visual => "visual",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModeController {
    mode: EditorMode,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn status_message(&self) -> &'static str {
        self.mode.status_message()
    }

    pub fn enter_insert(&mut self) -> bool {
        self.transition(EditorMode::Insert)
    }

    pub fn enter_visual(&mut self) -> bool {
        self.transition(EditorMode::Visual)
    }

    pub fn enter_normal(&mut self) -> bool {
        self.transition(EditorMode::Normal)
    }

    /// External cancel signal: always lands in `Normal`.
    pub fn cancel(&mut self) {
        self.mode = EditorMode::Normal;
    }

    /// Moves to `target` if the edge exists. Returns false and stays put otherwise.
    pub fn transition(&mut self, target: EditorMode) -> bool {
        if !self.mode.can_enter(target) {
            return false;
        }
        self.mode = target;
        true
    }
}
