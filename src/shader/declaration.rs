use crate::shader::generate::{GenerateCode, Position};
use crate::shader::node::{Block, Node};
use crate::shader::types::{DataType, DirectionQualifier};
use crate::{DekitError, DekitResult};

/// Anything stored in a [`NamedList`].
pub trait Named {
    fn name(&self) -> &str;
}

/// Insertion ordered list with linear lookup by name.
///
/// Names are not required to be unique; lookups return the first match.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct NamedList<T> {
    items: Vec<T>,
}

impl<T> Default for NamedList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Named> NamedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of `item` compared by identity, not by value.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|candidate| std::ptr::eq(candidate, item))
    }

    pub fn index_of_named(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|candidate| candidate.name() == name)
    }

    pub fn has(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    pub fn has_named(&self, name: &str) -> bool {
        self.index_of_named(name).is_some()
    }

    /// # Errors
    /// `DekitError::InvalidParam` if `index` is out of range.
    pub fn get_at(&self, index: usize) -> DekitResult<&T> {
        let count = self.items.len();
        self.items.get(index).ok_or_else(|| out_of_range(index, count))
    }

    /// # Errors
    /// `DekitError::InvalidParam` if `index` is out of range.
    pub fn get_at_mut(&mut self, index: usize) -> DekitResult<&mut T> {
        let count = self.items.len();
        self.items.get_mut(index).ok_or_else(|| out_of_range(index, count))
    }

    pub fn get_named(&self, name: &str) -> Option<&T> {
        self.items.iter().find(|candidate| candidate.name() == name)
    }

    pub fn get_named_mut(&mut self, name: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|candidate| candidate.name() == name)
    }

    /// Appends `item` and returns its index.
    pub fn add(&mut self, item: T) -> usize {
        self.items.push(item);
        self.items.len().saturating_sub(1)
    }

    /// # Errors
    /// `DekitError::InvalidParam` if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> DekitResult<T> {
        if index >= self.items.len() {
            return Err(out_of_range(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    /// # Errors
    /// `DekitError::InvalidParam` if no item carries `name`.
    pub fn remove_named(&mut self, name: &str) -> DekitResult<T> {
        let index = self
            .index_of_named(name)
            .ok_or_else(|| DekitError::invalid_param(format!("no entry named {}", name)))?;
        self.remove_at(index)
    }

    pub fn remove_all(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a NamedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn out_of_range(index: usize, count: usize) -> DekitError {
    DekitError::invalid_param(format!("index {} out of range (count {})", index, count))
}

/// A named, typed slot: a global uniform, sampler, input, output or
/// constant, or a function parameter.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub data_type: DataType,
    pub init: Option<Node>,
    pub direction: DirectionQualifier,
}

impl Declaration {
    pub fn new<T: Into<String>>(name: T, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            init: None,
            direction: DirectionQualifier::None,
        }
    }

    pub fn with_init<T: Into<String>>(name: T, data_type: DataType, init: Node) -> Self {
        Self {
            init: Some(init),
            ..Self::new(name, data_type)
        }
    }

    pub fn parameter<T: Into<String>>(
        name: T,
        data_type: DataType,
        direction: DirectionQualifier,
    ) -> Self {
        Self {
            direction,
            ..Self::new(name, data_type)
        }
    }

    /// `<keyword> <type> <name>[ = <init>];` followed by a newline.
    pub(crate) fn generate_global(&self, code: &mut GenerateCode, keyword: &str) -> DekitResult<()> {
        code.push_str(keyword);
        code.push(' ');
        code.push_str(self.data_type.glsl_name());
        code.push(' ');
        code.push_str(&self.name);

        if let Some(init) = &self.init {
            code.push_str(" = ");
            init.generate(code, Position::Expression)?;
        }

        code.push_str(";\n");
        Ok(())
    }

    pub(crate) fn generate_parameter(&self, code: &mut GenerateCode) {
        code.push_str(self.direction.prefix());
        code.push_str(self.data_type.glsl_name());
        code.push(' ');
        code.push_str(&self.name);
    }
}

impl Named for Declaration {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub return_type: DataType,
    pub parameters: DeclarationList,
    pub body: Block,
}

impl Function {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            return_type: DataType::Void,
            parameters: DeclarationList::new(),
            body: Block::new(),
        }
    }

    #[must_use]
    pub fn with_return_type(mut self, return_type: DataType) -> Self {
        self.return_type = return_type;
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: Declaration) -> Self {
        self.parameters.add(parameter);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Block) -> Self {
        self.body = body;
        self
    }

    pub(crate) fn generate(&self, code: &mut GenerateCode) -> DekitResult<()> {
        code.push('\n');
        code.push_str(self.return_type.glsl_name());
        code.push(' ');
        code.push_str(&self.name);

        if self.parameters.is_empty() {
            code.push_str("( void )");
        } else {
            code.push_str("( ");
            for (i, parameter) in self.parameters.iter().enumerate() {
                if i > 0 {
                    code.push_str(", ");
                }
                parameter.generate_parameter(code);
            }
            code.push_str(" )");
        }

        self.body.generate_body(code)?;
        code.push('\n');
        Ok(())
    }
}

impl Named for Function {
    fn name(&self) -> &str {
        &self.name
    }
}

pub type DeclarationList = NamedList<Declaration>;
pub type FunctionList = NamedList<Function>;
