use std::collections::BTreeSet;

use crate::{DekitError, DekitResult};

/// Receives the tag set whenever the user commits a change.
pub trait TagsAction {
    fn tags_changed(&mut self, tags: &BTreeSet<String>);
}

/// Model of the tag editing widget: a combo box to type or pick a tag, a
/// sorted list of the current tags and add, remove and clear buttons.
///
/// Changes made through the user operations ([`TagEditor::add_tag`],
/// [`TagEditor::remove_selected`], [`TagEditor::clear`]) notify the action.
/// Programmatic updates through [`TagEditor::set_tags`] do not.
#[derive(Default)]
pub struct TagEditor {
    tags: BTreeSet<String>,
    available_tags: BTreeSet<String>,
    combo_text: String,
    selection: Option<String>,
    action: Option<Box<dyn TagsAction>>,
}

impl std::fmt::Debug for TagEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagEditor")
            .field("tags", &self.tags)
            .field("available_tags", &self.available_tags)
            .field("combo_text", &self.combo_text)
            .field("selection", &self.selection)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

impl TagEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_action(&mut self, action: Box<dyn TagsAction>) {
        self.action = Some(action);
    }

    pub fn clear_action(&mut self) {
        self.action = None;
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Replaces the tag list without notifying the action. The selection is
    /// kept if the selected tag survives.
    pub fn set_tags<I, T>(&mut self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self.drop_stale_selection();
    }

    /// Tags offered by the combo box drop down.
    pub fn available_tags(&self) -> &BTreeSet<String> {
        &self.available_tags
    }

    pub fn set_available_tags<I, T>(&mut self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.available_tags = tags.into_iter().map(Into::into).collect();
    }

    pub fn combo_text(&self) -> &str {
        &self.combo_text
    }

    pub fn set_combo_text<T: Into<String>>(&mut self, text: T) {
        self.combo_text = text.into();
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Selects `tag` in the list.
    ///
    /// # Errors
    /// `DekitError::InvalidParam` if `tag` is not in the list.
    pub fn select(&mut self, tag: &str) -> DekitResult<()> {
        if !self.tags.contains(tag) {
            return Err(DekitError::invalid_param(format!("tag {} is not in the list", tag)));
        }
        self.selection = Some(tag.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Adds the trimmed combo box text as a tag and selects it.
    ///
    /// Returns `false` without notifying if the text is empty or the tag is
    /// already present.
    pub fn add_tag(&mut self) -> bool {
        let tag = self.combo_text.trim();
        if tag.is_empty() || self.tags.contains(tag) {
            return false;
        }

        let tag = tag.to_string();
        self.tags.insert(tag.clone());
        self.selection = Some(tag);
        self.notify();
        true
    }

    /// Removes the selected tag. Returns `false` if nothing is selected.
    pub fn remove_selected(&mut self) -> bool {
        let Some(tag) = self.selection.take() else {
            return false;
        };

        if !self.tags.remove(&tag) {
            return false;
        }
        self.notify();
        true
    }

    /// Removes every tag. Returns `false` if the list was already empty.
    pub fn clear(&mut self) -> bool {
        if self.tags.is_empty() {
            return false;
        }

        self.tags.clear();
        self.selection = None;
        self.notify();
        true
    }

    fn drop_stale_selection(&mut self) {
        if self
            .selection
            .as_ref()
            .is_some_and(|selected| !self.tags.contains(selected))
        {
            self.selection = None;
        }
    }

    fn notify(&mut self) {
        if let Some(action) = self.action.as_mut() {
            action.tags_changed(&self.tags);
        }
    }
}

/// Model of the toggle tags widget: a list of known tags, each with a check
/// box, plus enable all and disable all buttons.
#[derive(Default)]
pub struct ToggleTags {
    entries: Vec<ToggleTag>,
    action: Option<Box<dyn TagsAction>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToggleTag {
    pub name: String,
    pub enabled: bool,
}

impl std::fmt::Debug for ToggleTags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleTags")
            .field("entries", &self.entries)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

impl ToggleTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_action(&mut self, action: Box<dyn TagsAction>) {
        self.action = Some(action);
    }

    pub fn clear_action(&mut self) {
        self.action = None;
    }

    /// Sorted list of known tags with their state.
    pub fn entries(&self) -> &[ToggleTag] {
        &self.entries
    }

    /// Replaces the known tags. Tags that stay keep their state, new tags
    /// start disabled. Does not notify.
    pub fn set_tags<I, T>(&mut self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let names: BTreeSet<String> = tags.into_iter().map(Into::into).collect();
        let enabled = self.enabled_tags();

        self.entries = names
            .into_iter()
            .map(|name| ToggleTag {
                enabled: enabled.contains(&name),
                name,
            })
            .collect();
    }

    pub fn is_enabled(&self, tag: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.enabled && entry.name == tag)
    }

    pub fn enabled_tags(&self) -> BTreeSet<String> {
        self.entries
            .iter()
            .filter(|entry| entry.enabled)
            .map(|entry| entry.name.clone())
            .collect()
    }

    /// Sets exactly the given tags enabled. Unknown tags are ignored. Does
    /// not notify.
    pub fn set_enabled_tags(&mut self, tags: &BTreeSet<String>) {
        for entry in &mut self.entries {
            entry.enabled = tags.contains(&entry.name);
        }
    }

    /// Flips the state of `tag` and notifies.
    ///
    /// # Errors
    /// `DekitError::InvalidParam` if `tag` is not known.
    pub fn toggle(&mut self, tag: &str) -> DekitResult<()> {
        let entry = self.entry_mut(tag)?;
        entry.enabled = !entry.enabled;
        self.notify();
        Ok(())
    }

    /// Sets the state of `tag`, notifying if it changed.
    ///
    /// # Errors
    /// `DekitError::InvalidParam` if `tag` is not known.
    pub fn set_enabled(&mut self, tag: &str, enabled: bool) -> DekitResult<()> {
        let entry = self.entry_mut(tag)?;
        if entry.enabled == enabled {
            return Ok(());
        }
        entry.enabled = enabled;
        self.notify();
        Ok(())
    }

    pub fn enable_all(&mut self) {
        self.set_all(true);
    }

    pub fn disable_all(&mut self) {
        self.set_all(false);
    }

    fn set_all(&mut self, enabled: bool) {
        let mut changed = false;
        for entry in &mut self.entries {
            if entry.enabled != enabled {
                entry.enabled = enabled;
                changed = true;
            }
        }

        if changed {
            self.notify();
        }
    }

    fn entry_mut(&mut self, tag: &str) -> DekitResult<&mut ToggleTag> {
        self.entries
            .iter_mut()
            .find(|entry| entry.name == tag)
            .ok_or_else(|| DekitError::invalid_param(format!("unknown tag {}", tag)))
    }

    fn notify(&mut self) {
        if self.action.is_none() {
            return;
        }

        let enabled = self.enabled_tags();
        if let Some(action) = self.action.as_mut() {
            action.tags_changed(&enabled);
        }
    }
}
