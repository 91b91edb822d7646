use crate::{DekitError, DekitResult};

/// Read access to an undo stack as needed by [`UndoHistoryPanel`].
///
/// Actions are indexed oldest first. The last `redo_count` actions have been
/// undone and can be redone.
pub trait UndoStack {
    fn count(&self) -> usize;
    fn redo_count(&self) -> usize;
    fn short_info(&self, index: usize) -> String;
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UndoIcon {
    /// The action is applied and can be undone.
    Undo,
    /// The action was undone and can be redone.
    Redo,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UndoHistoryEntry {
    pub text: String,
    pub icon: UndoIcon,
}

/// What to do with the stack to make a given entry the last applied action.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HistoryJump {
    Undo(usize),
    Redo(usize),
    Stay,
}

/// List model mirroring an undo stack, one entry per action.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UndoHistoryPanel {
    entries: Vec<UndoHistoryEntry>,
    selection: Option<usize>,
}

impl UndoHistoryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[UndoHistoryEntry] {
        &self.entries
    }

    /// Index of the last applied action, `None` if every action is undone.
    pub const fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Index of the first entry that can be redone.
    pub fn redo_boundary(&self) -> usize {
        self.entries
            .iter()
            .position(|entry| entry.icon == UndoIcon::Redo)
            .unwrap_or(self.entries.len())
    }

    /// Rebuilds the entries from `stack`.
    pub fn update<S: UndoStack + ?Sized>(&mut self, stack: &S) {
        let count = stack.count();
        let boundary = count.saturating_sub(stack.redo_count());

        self.entries = (0..count)
            .map(|index| UndoHistoryEntry {
                text: stack.short_info(index),
                icon: if index >= boundary {
                    UndoIcon::Redo
                } else {
                    UndoIcon::Undo
                },
            })
            .collect();
        self.selection = boundary.checked_sub(1);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.selection = None;
    }

    /// Steps needed on the stack so that `index` becomes the last applied
    /// action.
    ///
    /// # Errors
    /// `DekitError::InvalidParam` if `index` is out of range.
    pub fn jump_to(&self, index: usize) -> DekitResult<HistoryJump> {
        if index >= self.entries.len() {
            return Err(DekitError::invalid_param(format!(
                "history index {} out of range (count {})",
                index,
                self.entries.len()
            )));
        }

        let applied = self.redo_boundary();
        let target = index.saturating_add(1);
        Ok(if target < applied {
            HistoryJump::Undo(applied.saturating_sub(target))
        } else if target > applied {
            HistoryJump::Redo(target.saturating_sub(applied))
        } else {
            HistoryJump::Stay
        })
    }
}
