//! `Reflect` impls for pointers, sequences and maps.

use std::any::{Any, TypeId};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::{MapValue, PointerValue, Reflect, ReflectMut, SequenceValue, Shape};

impl<T: Reflect + Default> Reflect for Option<T> {
    fn shape(&self) -> Shape {
        Shape::Pointer
    }

    fn innermost(&self) -> Option<Shape> {
        Some(T::innermost_of())
    }

    fn innermost_of() -> Shape {
        T::innermost_of()
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(self)
    }

    fn concrete_type(&self) -> TypeId {
        T::concrete_type_of()
    }

    fn concrete_type_of() -> TypeId {
        T::concrete_type_of()
    }
}

impl<T: Reflect + Default> PointerValue for Option<T> {
    fn target_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|target| target as &mut dyn Reflect)
    }

    fn fill_vacant(&mut self, fill: &mut dyn FnMut(&mut dyn Reflect) -> bool) {
        let mut target = T::default();
        if fill(&mut target) {
            *self = Some(target);
        }
    }
}

impl<T: Reflect> Reflect for Box<T> {
    fn shape(&self) -> Shape {
        Shape::Pointer
    }

    fn innermost(&self) -> Option<Shape> {
        Some(T::innermost_of())
    }

    fn innermost_of() -> Shape {
        T::innermost_of()
    }

    fn is_zero(&self) -> bool {
        Reflect::is_zero(&**self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(self)
    }

    fn concrete_type(&self) -> TypeId {
        T::concrete_type_of()
    }

    fn concrete_type_of() -> TypeId {
        T::concrete_type_of()
    }
}

impl<T: Reflect> PointerValue for Box<T> {
    fn target_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(&mut **self)
    }

    fn fill_vacant(&mut self, fill: &mut dyn FnMut(&mut dyn Reflect) -> bool) {
        fill(&mut **self);
    }
}

impl<T: Reflect + Default> Reflect for Vec<T> {
    fn shape(&self) -> Shape {
        if TypeId::of::<T>() == TypeId::of::<u8>() {
            Shape::Bytes
        } else {
            Shape::Sequence
        }
    }

    fn innermost(&self) -> Option<Shape> {
        Some(T::innermost_of())
    }

    fn innermost_of() -> Shape {
        T::innermost_of()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Sequence(self)
    }
}

impl<T: Reflect + Default> SequenceValue for Vec<T> {
    fn as_bytes_mut(&mut self) -> Option<&mut Vec<u8>> {
        let any: &mut dyn Any = self;
        any.downcast_mut::<Vec<u8>>()
    }

    fn for_each_mut(&mut self, visit: &mut dyn FnMut(&mut dyn Reflect)) {
        for element in self.iter_mut() {
            visit(element);
        }
    }

    fn set_empty(&mut self) {
        self.clear();
    }

    fn rebuild(&mut self, tokens: &[&str], fill: &mut dyn FnMut(&mut dyn Reflect, &str)) {
        *self = tokens
            .iter()
            .map(|token| {
                let mut element = T::default();
                fill(&mut element, token);
                element
            })
            .collect();
    }
}

/// Builds a fresh key and value from their texts.
fn fresh_entry<K, V>(
    fill: &mut dyn FnMut(&mut dyn Reflect, &str),
    (key_text, value_text): (&str, &str),
) -> (K, V)
where
    K: Reflect + Default,
    V: Reflect + Default,
{
    let mut key = K::default();
    fill(&mut key, key_text);
    let mut value = V::default();
    fill(&mut value, value_text);
    (key, value)
}

impl<K, V, S> Reflect for HashMap<K, V, S>
where
    K: Reflect + Default + Eq + Hash,
    V: Reflect + Default,
    S: BuildHasher + Default + 'static,
{
    fn shape(&self) -> Shape {
        Shape::Map
    }

    fn innermost(&self) -> Option<Shape> {
        Some(V::innermost_of())
    }

    fn innermost_of() -> Shape {
        V::innermost_of()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Map(self)
    }
}

impl<K, V, S> MapValue for HashMap<K, V, S>
where
    K: Reflect + Default + Eq + Hash,
    V: Reflect + Default,
    S: BuildHasher + Default + 'static,
{
    fn for_each_value_mut(&mut self, visit: &mut dyn FnMut(&mut dyn Reflect)) {
        for value in self.values_mut() {
            visit(value);
        }
    }

    fn set_empty(&mut self) {
        self.clear();
    }

    fn rebuild(&mut self, entries: &[(&str, &str)], fill: &mut dyn FnMut(&mut dyn Reflect, &str)) {
        let mut map = Self::with_capacity_and_hasher(entries.len(), S::default());
        for entry in entries {
            let (key, value) = fresh_entry(fill, *entry);
            map.insert(key, value);
        }
        *self = map;
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Reflect + Default + Ord,
    V: Reflect + Default,
{
    fn shape(&self) -> Shape {
        Shape::Map
    }

    fn innermost(&self) -> Option<Shape> {
        Some(V::innermost_of())
    }

    fn innermost_of() -> Shape {
        V::innermost_of()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Map(self)
    }
}

impl<K, V> MapValue for BTreeMap<K, V>
where
    K: Reflect + Default + Ord,
    V: Reflect + Default,
{
    fn for_each_value_mut(&mut self, visit: &mut dyn FnMut(&mut dyn Reflect)) {
        for value in self.values_mut() {
            visit(value);
        }
    }

    fn set_empty(&mut self) {
        self.clear();
    }

    fn rebuild(&mut self, entries: &[(&str, &str)], fill: &mut dyn FnMut(&mut dyn Reflect, &str)) {
        *self = entries
            .iter()
            .map(|entry| fresh_entry(&mut *fill, *entry))
            .collect();
    }
}
