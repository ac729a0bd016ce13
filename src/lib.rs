//! Core library for Taskive: the in-memory project store, its entity
//! model, and the terminal UI built on top of it.
//!
//! The store is the single owner of all session state. The UI (and any
//! other caller) mutates it exclusively through the two intents
//! [`store::ProjectStore::create_project`] and
//! [`store::ProjectStore::toggle_task`], plus profile updates, and reads
//! it back through shared borrows.

pub mod models;
pub mod progress;
pub mod store;
pub mod tui;
