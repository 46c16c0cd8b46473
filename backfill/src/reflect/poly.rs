//! Polymorphic slots.
//!
//! A [`Poly<dyn Trait>`](Poly) holds an optional boxed implementation of a
//! trait. The engine reaches the implementation's own shape through
//! [`Polymorphic`], which the [`polymorphic!`](crate::polymorphic) macro
//! implements for any trait declaring [`Reflect`] as a supertrait.
//!
//! ```rust
//! use backfill::{Fill, Poly, Reflect, Shape, polymorphic};
//!
//! trait Backend: Reflect {
//!     fn endpoint(&self) -> &str;
//! }
//! polymorphic!(Backend);
//!
//! #[derive(Debug, Default, Fill)]
//! struct Http {
//!     #[fill(default = "http://localhost")]
//!     url: String,
//! }
//!
//! impl Backend for Http {
//!     fn endpoint(&self) -> &str {
//!         &self.url
//!     }
//! }
//!
//! let slot: Poly<dyn Backend> = Poly::new(Box::new(Http::default()));
//! assert_eq!(slot.innermost(), Some(Shape::Struct));
//! assert_eq!(Poly::<dyn Backend>::empty().innermost(), None);
//! ```

use std::fmt;

use super::{DynamicValue, Reflect, ReflectMut, Shape};

/// Upcast from a trait object to its [`Reflect`] view.
pub trait Polymorphic: 'static {
    /// Shared view of the implementation.
    fn as_reflect(&self) -> &dyn Reflect;

    /// Mutable view of the implementation.
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect;
}

/// Implements [`Polymorphic`] for `dyn Trait`.
///
/// Each trait must declare [`Reflect`] as a supertrait.
#[macro_export]
macro_rules! polymorphic {
    ($($trait:ident),+ $(,)?) => {$(
        impl $crate::Polymorphic for dyn $trait {
            fn as_reflect(&self) -> &dyn $crate::Reflect {
                self
            }

            fn as_reflect_mut(&mut self) -> &mut dyn $crate::Reflect {
                self
            }
        }
    )+};
}

/// Optional boxed implementation of a polymorphic trait.
pub struct Poly<T: ?Sized>(Option<Box<T>>);

impl<T: ?Sized> Poly<T> {
    /// A slot with no implementation.
    #[must_use]
    pub const fn empty() -> Self {
        Self(None)
    }

    /// A slot holding `implementation`.
    #[must_use]
    pub const fn new(implementation: Box<T>) -> Self {
        Self(Some(implementation))
    }

    /// Returns `true` when no implementation is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Shared access to the implementation.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.0.as_deref()
    }

    /// Mutable access to the implementation.
    #[must_use]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.0.as_deref_mut()
    }

    /// Consumes the slot, yielding the boxed implementation.
    #[must_use]
    pub fn into_inner(self) -> Option<Box<T>> {
        self.0
    }
}

impl<T: ?Sized> Default for Poly<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: ?Sized> From<Box<T>> for Poly<T> {
    fn from(implementation: Box<T>) -> Self {
        Self::new(implementation)
    }
}

/// Trait objects rarely implement `Debug`, so only the implementation's type
/// name is shown.
impl<T: ?Sized + Polymorphic> fmt::Debug for Poly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let implementation = self
            .get()
            .map(|implementation| implementation.as_reflect().type_name());
        f.debug_tuple("Poly").field(&implementation).finish()
    }
}

impl<T: ?Sized + Polymorphic> Reflect for Poly<T> {
    fn shape(&self) -> Shape {
        Shape::Dynamic
    }

    fn innermost(&self) -> Option<Shape> {
        self.get().and_then(|implementation| implementation.as_reflect().innermost())
    }

    fn innermost_of() -> Shape {
        Shape::Dynamic
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Dynamic(self)
    }
}

impl<T: ?Sized + Polymorphic> DynamicValue for Poly<T> {
    fn implementation_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.get_mut().map(Polymorphic::as_reflect_mut)
    }
}
