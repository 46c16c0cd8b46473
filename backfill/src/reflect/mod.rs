//! Run-time shape model walked by the [`Filler`](crate::Filler).
//!
//! Every fillable type implements [`Reflect`], which reports the type's
//! structural [`Shape`], its zero-ness, and hands out a [`ReflectMut`] view
//! through which handlers write defaults. Structs gain their implementation
//! from `#[derive(Fill)]`; the standard library types used in configuration
//! values are covered by the impls in this module's children.
//!
//! ```rust
//! use backfill::{Reflect, Shape};
//!
//! let ports: Vec<u16> = Vec::new();
//! assert_eq!(ports.shape(), Shape::Sequence);
//! assert_eq!(ports.innermost(), Some(Shape::Uint));
//! assert!(ports.is_zero());
//! ```

use std::any::{Any, TypeId};

mod containers;
mod poly;
mod scalars;
mod time;

pub use poly::{Poly, Polymorphic};

/// Coarse structural category of a value.
///
/// Shapes drive the first level of dispatch: the engine looks up a handler
/// by the shape of the current field before consulting the per-type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `bool`.
    Bool,
    /// Signed integers, and durations viewed as nanoseconds.
    Int,
    /// Unsigned integers.
    Uint,
    /// `f32` and `f64`.
    Float,
    /// Textual values such as `String` and `PathBuf`.
    String,
    /// `Vec<u8>`.
    Bytes,
    /// Structs with walkable members.
    Struct,
    /// Nullable (`Option<T>`) or non-null (`Box<T>`) indirection.
    Pointer,
    /// Polymorphic slot holding a trait object ([`Poly`]).
    Dynamic,
    /// Growable sequences such as `Vec<T>`.
    Sequence,
    /// Keyed maps such as `HashMap<K, V>` and `BTreeMap<K, V>`.
    Map,
}

/// Introspection capability required of every fillable value.
pub trait Reflect: Any {
    /// Structural category of this value.
    fn shape(&self) -> Shape;

    /// Shape reached after unwrapping pointer, sequence and map layers.
    ///
    /// Polymorphic slots resolve through their live implementation and
    /// return `None` when empty.
    fn innermost(&self) -> Option<Shape>;

    /// Innermost shape derived from the type alone.
    ///
    /// Containers use this to classify their element type even when they
    /// hold no elements.
    fn innermost_of() -> Shape
    where
        Self: Sized;

    /// Returns `true` when the value equals its type's zero value.
    fn is_zero(&self) -> bool;

    /// Mutable view used by handlers to write defaults.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Concrete type after full pointer indirection.
    fn concrete_type(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Static counterpart of [`Reflect::concrete_type`].
    fn concrete_type_of() -> TypeId
    where
        Self: Sized,
    {
        TypeId::of::<Self>()
    }

    /// Type name used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Mutable, shape-specific view of a value.
pub enum ReflectMut<'a> {
    /// A boolean slot.
    Bool(&'a mut bool),
    /// A signed integer slot.
    Int(&'a mut dyn SignedInt),
    /// An unsigned integer slot.
    Uint(&'a mut dyn UnsignedInt),
    /// A floating point slot.
    Float(&'a mut dyn FloatValue),
    /// A textual slot.
    String(&'a mut dyn TextValue),
    /// A struct whose members can be walked.
    Struct(&'a mut dyn StructValue),
    /// A pointer that may or may not hold a target.
    Pointer(&'a mut dyn PointerValue),
    /// A polymorphic slot.
    Dynamic(&'a mut dyn DynamicValue),
    /// A sequence, including byte sequences.
    Sequence(&'a mut dyn SequenceValue),
    /// A keyed map.
    Map(&'a mut dyn MapValue),
}

/// Signed integer storage.
pub trait SignedInt {
    /// Stores `value`, returning `false` when it does not fit.
    fn set_i128(&mut self, value: i128) -> bool;
}

/// Unsigned integer storage.
pub trait UnsignedInt {
    /// Stores `value`, returning `false` when it does not fit.
    fn set_u128(&mut self, value: u128) -> bool;
}

/// Floating point storage.
pub trait FloatValue {
    /// Stores `value`, narrowing it when the target is smaller than `f64`.
    fn set_f64(&mut self, value: f64);
}

/// Textual storage.
pub trait TextValue {
    /// Replaces the current text.
    fn set_text(&mut self, text: &str);
}

/// A struct whose defaultable members can be visited in declaration order.
pub trait StructValue {
    /// Calls `visit` once per defaultable member.
    fn walk(&mut self, visit: &mut dyn FnMut(Member<'_>));
}

/// Pointer-like indirection.
pub trait PointerValue {
    /// The current target, or `None` for a null pointer.
    fn target_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Allocates a zero-valued target and passes it to `fill`.
    ///
    /// The target is attached only when `fill` returns `true`. Pointers that
    /// can never be null hand their existing target to `fill` instead.
    fn fill_vacant(&mut self, fill: &mut dyn FnMut(&mut dyn Reflect) -> bool);
}

/// Polymorphic slot.
pub trait DynamicValue {
    /// The live implementation, if any.
    fn implementation_mut(&mut self) -> Option<&mut dyn Reflect>;
}

/// Growable sequence.
pub trait SequenceValue {
    /// Byte view, available only for `u8` sequences.
    fn as_bytes_mut(&mut self) -> Option<&mut Vec<u8>>;

    /// Visits every existing element in place.
    fn for_each_mut(&mut self, visit: &mut dyn FnMut(&mut dyn Reflect));

    /// Replaces the contents with an empty sequence.
    fn set_empty(&mut self);

    /// Replaces the contents with one zero-valued element per token, each
    /// populated by `fill`.
    fn rebuild(&mut self, tokens: &[&str], fill: &mut dyn FnMut(&mut dyn Reflect, &str));
}

/// Keyed map.
pub trait MapValue {
    /// Visits every existing value in place; keys are never changed.
    fn for_each_value_mut(&mut self, visit: &mut dyn FnMut(&mut dyn Reflect));

    /// Replaces the contents with an empty map.
    fn set_empty(&mut self);

    /// Replaces the contents with one entry per `(key, value)` text pair.
    ///
    /// `fill` populates a fresh key and then a fresh value; a later duplicate
    /// key overwrites the earlier entry.
    fn rebuild(&mut self, entries: &[(&str, &str)], fill: &mut dyn FnMut(&mut dyn Reflect, &str));
}

/// A struct member as seen by the struct walker.
pub struct Member<'a> {
    name: &'static str,
    annotations: &'static [(&'static str, &'static str)],
    value: &'a mut dyn Reflect,
}

impl<'a> Member<'a> {
    /// Builds a member from its name, its `(tag, text)` annotations and its
    /// storage.
    #[must_use]
    pub const fn new(
        name: &'static str,
        annotations: &'static [(&'static str, &'static str)],
        value: &'a mut dyn Reflect,
    ) -> Self {
        Self {
            name,
            annotations,
            value,
        }
    }

    /// Member name as declared; tuple members use their index.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Trimmed annotation text recorded under `tag`, or `""` when absent.
    #[must_use]
    pub fn annotation(&self, tag: &str) -> &'static str {
        self.annotations
            .iter()
            .find(|(key, _)| *key == tag)
            .map_or("", |(_, text)| text.trim())
    }

    /// Consumes the member, yielding its storage.
    #[must_use]
    pub const fn into_value(self) -> &'a mut dyn Reflect {
        self.value
    }
}

/// Follows pointers until a non-pointer value is reached.
///
/// Returns `None` when a null pointer interrupts the chain.
pub fn indirect_mut(value: &mut dyn Reflect) -> Option<&mut dyn Reflect> {
    if value.shape() != Shape::Pointer {
        return Some(value);
    }
    match value.reflect_mut() {
        ReflectMut::Pointer(pointer) => pointer.target_mut().and_then(indirect_mut),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
