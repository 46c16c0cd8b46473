//! Traversal positions handed to fill handlers.

use std::any::Any;
use std::fmt;

use crate::reflect::{Reflect, indirect_mut};

/// Name given to fields created for sequence elements.
pub const ELEMENT_NAME: &str = "[]";

/// Name given to fields created for map keys and values.
pub const ENTRY_NAME: &str = "{}";

/// Read-only snapshot of an enclosing field.
///
/// Parents carry context only; handlers cannot reach the enclosing value
/// through them.
#[derive(Debug, Clone, Copy)]
pub struct Parent<'a> {
    name: &'a str,
    tag: &'a str,
    parent: Option<&'a Parent<'a>>,
}

impl<'a> Parent<'a> {
    /// Member name of the enclosing field.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Annotation text of the enclosing field.
    #[must_use]
    pub const fn tag(&self) -> &'a str {
        self.tag
    }

    /// The field enclosing this one, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<&'a Parent<'a>> {
        self.parent
    }
}

/// A value location being considered for defaulting.
///
/// # Examples
///
/// ```rust
/// use backfill::Field;
///
/// let mut port = 0_u16;
/// let field = Field::new(&mut port, "8080", "port", None);
/// assert_eq!(field.tag(), "8080");
/// assert_eq!(field.path(), "port");
/// ```
pub struct Field<'a> {
    value: &'a mut dyn Reflect,
    tag: &'a str,
    name: &'a str,
    parent: Option<&'a Parent<'a>>,
    initialized: bool,
}

impl<'a> Field<'a> {
    /// Creates a field over `value` annotated with `tag`.
    #[must_use]
    pub const fn new(
        value: &'a mut dyn Reflect,
        tag: &'a str,
        name: &'a str,
        parent: Option<&'a Parent<'a>>,
    ) -> Self {
        Self {
            value,
            tag,
            name,
            parent,
            initialized: false,
        }
    }

    /// Shared view of the value.
    #[must_use]
    pub const fn value(&self) -> &dyn Reflect {
        &*self.value
    }

    /// Mutable view of the value.
    pub const fn value_mut(&mut self) -> &mut dyn Reflect {
        &mut *self.value
    }

    /// Annotation text; empty when the member carries none.
    #[must_use]
    pub const fn tag(&self) -> &'a str {
        self.tag
    }

    /// Member name, [`ELEMENT_NAME`] or [`ENTRY_NAME`].
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Snapshot of the enclosing field.
    #[must_use]
    pub const fn parent(&self) -> Option<&'a Parent<'a>> {
        self.parent
    }

    /// Snapshot of this field for use as a child's parent.
    #[must_use]
    pub const fn as_parent(&self) -> Parent<'a> {
        Parent {
            name: self.name,
            tag: self.tag,
            parent: self.parent,
        }
    }

    /// Records that a literal explicitly materialised this container.
    ///
    /// A vacant pointer keeps a target marked this way even when the target
    /// is still empty.
    pub const fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    /// Returns `true` once [`Field::mark_initialized`] has been called.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Dotted member path from the root.
    #[must_use]
    pub fn path(&self) -> String {
        let mut names = vec![self.name];
        let mut cursor = self.parent;
        while let Some(parent) = cursor {
            names.push(parent.name);
            cursor = parent.parent;
        }
        let mut path = String::new();
        for name in names.into_iter().rev().filter(|name| !name.is_empty()) {
            if !path.is_empty() && !name.starts_with(['[', '{']) {
                path.push('.');
            }
            path.push_str(name);
        }
        path
    }

    /// Downcasts the value to `T`, following pointers when the value itself
    /// is not a `T`.
    ///
    /// Returns `None` for null pointers or values of another type.
    pub fn downcast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        let direct: &dyn Any = &*self.value;
        if direct.is::<T>() {
            let value: &mut dyn Any = &mut *self.value;
            return value.downcast_mut::<T>();
        }
        let target: &mut dyn Any = indirect_mut(&mut *self.value)?;
        target.downcast_mut::<T>()
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("path", &self.path())
            .field("type", &self.value.type_name())
            .field("tag", &self.tag)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}
