use std::collections::BTreeMap;

/// A fixed set of roles an object class element can bind to a class
/// property, for example the skin of a billboard.
pub trait PropertyRole: Copy + Ord + std::fmt::Debug + 'static {
    /// Every role, in declaration order.
    const ALL: &'static [Self];

    /// The `target` attribute used for this role in game definition files.
    fn link_target(self) -> &'static str;

    fn from_link_target(target: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.link_target() == target)
    }
}

/// Maps property roles to the names of the class properties bound to them.
///
/// A role without a binding reads as the empty string.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyNames<P: PropertyRole> {
    names: BTreeMap<P, String>,
}

impl<P: PropertyRole> Default for PropertyNames<P> {
    fn default() -> Self {
        Self {
            names: BTreeMap::new(),
        }
    }
}

impl<P: PropertyRole> PropertyNames<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, role: P) -> &str {
        self.names.get(&role).map_or("", String::as_str)
    }

    /// Binds `role` to `name`. An empty name removes the binding.
    pub fn set<T: Into<String>>(&mut self, role: P, name: T) {
        let name = name.into();
        if name.is_empty() {
            self.names.remove(&role);
        } else {
            self.names.insert(role, name);
        }
    }

    pub fn is_set(&self, role: P) -> bool {
        self.names.contains_key(&role)
    }

    /// Whether any role is bound to the property `name`.
    pub fn has_property_with_name(&self, name: &str) -> bool {
        self.names.values().any(|bound| bound == name)
    }

    /// Roles bound to the property `name`.
    pub fn roles_with_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = P> + 'a {
        self.names
            .iter()
            .filter(move |(_, bound)| bound.as_str() == name)
            .map(|(role, _)| *role)
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Bound roles in role order.
    pub fn iter(&self) -> impl Iterator<Item = (P, &str)> {
        self.names.iter().map(|(role, name)| (*role, name.as_str()))
    }
}
