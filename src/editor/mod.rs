//! Toolkit independent models of composed editor widgets.

mod tags;
mod undo_history;

pub use tags::{TagEditor, TagsAction, ToggleTag, ToggleTags};
pub use undo_history::{HistoryJump, UndoHistoryEntry, UndoHistoryPanel, UndoIcon, UndoStack};
