//! # Nanote Architecture
//!
//! Nanote is a **UI-agnostic note-taking core**. The editor textbox, the note list,
//! the dialogs and the command palette widget are clients; everything they need to
//! render and every intent they can raise lives here.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App (app.rs, palette.rs, mode.rs)                          │
//! │  - Command table bound to shortcuts                         │
//! │  - Editor mode (normal / insert / visual) and theme         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the live collection and the active-note pointer     │
//! │  - Reselects after archive / delete, persists after settle  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure functions: collection in, new collection out        │
//! │  - Never mutates its input, never fails on a missing id     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore trait (save / load), SlotStore over a backend  │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never panics on
//! persistence trouble. Storage failures are logged through the `log` facade and the
//! session keeps running in memory. Call [`logging::init`] from the client to see them.
//!
//! ## Module Overview
//!
//! - [`api`]: The orchestrator, entry point for all note operations
//! - [`commands`]: Pure Note Store operations
//! - [`store`]: Persistence adapter and slot backends
//! - [`model`]: Core data types (`Note`, `NoteCollection`)
//! - [`selection`]: Ephemeral multi-select state
//! - [`mode`]: Editor mode state machine
//! - [`palette`]: Command registry
//! - [`app`]: Default command table bound to an app session
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod mode;
pub mod model;
pub mod palette;
pub mod selection;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
