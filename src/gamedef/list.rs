use std::cell::RefCell;
use std::rc::Rc;

use crate::{DekitError, DekitResult};

/// Shared, mutable handle to an element of an [`ObjectList`].
pub type Handle<T> = Rc<RefCell<T>>;

/// Ordered set of shared handles.
///
/// Membership is decided by handle identity: two handles holding equal values
/// are still different elements, while the same handle can only be added
/// once.
#[derive(Debug, PartialEq)]
pub struct ObjectList<T> {
    objects: Vec<Handle<T>>,
}

impl<T> Default for ObjectList<T> {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
        }
    }
}

impl<T> ObjectList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn index_of(&self, object: &Handle<T>) -> Option<usize> {
        self.objects
            .iter()
            .position(|candidate| Rc::ptr_eq(candidate, object))
    }

    pub fn has(&self, object: &Handle<T>) -> bool {
        self.index_of(object).is_some()
    }

    /// # Errors
    /// `DekitError::InvalidParam` if `index` is out of range.
    pub fn get_at(&self, index: usize) -> DekitResult<&Handle<T>> {
        self.objects.get(index).ok_or_else(|| {
            DekitError::invalid_param(format!(
                "index {} out of range (count {})",
                index,
                self.objects.len()
            ))
        })
    }

    /// # Errors
    /// `DekitError::InvalidParam` if the handle is already in the list.
    pub fn add(&mut self, object: Handle<T>) -> DekitResult<()> {
        self.check_absent(&object)?;
        self.objects.push(object);
        Ok(())
    }

    /// Wraps `value` in a new handle, appends it and returns the handle.
    pub fn add_new(&mut self, value: T) -> Handle<T> {
        let object = Rc::new(RefCell::new(value));
        self.objects.push(Rc::clone(&object));
        object
    }

    /// # Errors
    /// `DekitError::InvalidParam` if the handle is already in the list or
    /// `index` is past the end.
    pub fn insert_at(&mut self, index: usize, object: Handle<T>) -> DekitResult<()> {
        self.check_absent(&object)?;
        if index > self.objects.len() {
            return Err(DekitError::invalid_param(format!(
                "insert index {} out of range (count {})",
                index,
                self.objects.len()
            )));
        }
        self.objects.insert(index, object);
        Ok(())
    }

    /// # Errors
    /// `DekitError::InvalidParam` if the handle is not in the list.
    pub fn remove(&mut self, object: &Handle<T>) -> DekitResult<()> {
        let index = self
            .index_of(object)
            .ok_or_else(|| DekitError::invalid_param("object is not in the list"))?;
        self.objects.remove(index);
        Ok(())
    }

    pub fn remove_all(&mut self) {
        self.objects.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Handle<T>> {
        self.objects.iter()
    }

    fn check_absent(&self, object: &Handle<T>) -> DekitResult<()> {
        if self.has(object) {
            return Err(DekitError::invalid_param("object is already in the list"));
        }
        Ok(())
    }
}

impl<T: Clone> ObjectList<T> {
    /// Replaces the content with fresh handles holding copies of the
    /// elements of `other`.
    ///
    /// # Panics
    /// If an element of `other` is mutably borrowed while copying.
    pub fn set_to_deep_copy_from(&mut self, other: &Self) {
        self.objects = other
            .objects
            .iter()
            .map(|object| Rc::new(RefCell::new(object.borrow().clone())))
            .collect();
    }

    /// # Panics
    /// If an element is mutably borrowed while copying.
    pub fn deep_copy(&self) -> Self {
        let mut copy = Self::new();
        copy.set_to_deep_copy_from(self);
        copy
    }
}

impl<'a, T> IntoIterator for &'a ObjectList<T> {
    type Item = &'a Handle<T>;
    type IntoIter = std::slice::Iter<'a, Handle<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
