use std::collections::BTreeSet;

use crate::gamedef::billboard::Billboard;
use crate::gamedef::force_field::ForceField;
use crate::gamedef::light::Light;
use crate::gamedef::list::ObjectList;
use crate::gamedef::navigation_space::NavigationSpaceDef;

/// How instances of a class may be scaled in the world editor.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ScaleMode {
    Fixed,
    #[default]
    Uniform,
    Free,
}

impl ScaleMode {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Uniform => "uniform",
            Self::Free => "free",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [Self::Fixed, Self::Uniform, Self::Free]
            .into_iter()
            .find(|mode| mode.keyword() == keyword)
    }
}

/// An object class of a game definition together with the elements that
/// make up its instances.
///
/// Cloning is deep: every element handle of the copy is new, so editing the
/// copy never touches the original. Cloning panics if an element is
/// mutably borrowed at the time.
#[derive(Debug, PartialEq)]
pub struct ObjectClass {
    pub name: String,
    pub description: String,
    pub category: String,
    pub scale_mode: ScaleMode,
    pub hide_tags: BTreeSet<String>,
    pub partial_hide_tags: BTreeSet<String>,
    pub is_ghost: bool,
    pub can_instantiate: bool,
    pub billboards: ObjectList<Billboard>,
    pub lights: ObjectList<Light>,
    pub navigation_spaces: ObjectList<NavigationSpaceDef>,
    pub force_fields: ObjectList<ForceField>,
}

impl ObjectClass {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category: String::new(),
            scale_mode: ScaleMode::Uniform,
            hide_tags: BTreeSet::new(),
            partial_hide_tags: BTreeSet::new(),
            is_ghost: false,
            can_instantiate: true,
            billboards: ObjectList::new(),
            lights: ObjectList::new(),
            navigation_spaces: ObjectList::new(),
            force_fields: ObjectList::new(),
        }
    }

    /// Number of elements over all element lists.
    pub fn element_count(&self) -> usize {
        [
            self.billboards.count(),
            self.lights.count(),
            self.navigation_spaces.count(),
            self.force_fields.count(),
        ]
        .into_iter()
        .fold(0, usize::saturating_add)
    }
}

impl Default for ObjectClass {
    fn default() -> Self {
        Self::new("")
    }
}

impl Clone for ObjectClass {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            scale_mode: self.scale_mode,
            hide_tags: self.hide_tags.clone(),
            partial_hide_tags: self.partial_hide_tags.clone(),
            is_ghost: self.is_ghost,
            can_instantiate: self.can_instantiate,
            billboards: self.billboards.deep_copy(),
            lights: self.lights.deep_copy(),
            navigation_spaces: self.navigation_spaces.deep_copy(),
            force_fields: self.force_fields.deep_copy(),
        }
    }
}
