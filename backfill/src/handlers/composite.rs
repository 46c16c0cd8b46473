//! Handlers for composite shapes.
//!
//! Composite handlers recurse through [`Filler::fill_field`], so every nested
//! value is subject to the same dispatch and eligibility rules as a struct
//! member.

use crate::error::FillError;
use crate::field::{ELEMENT_NAME, ENTRY_NAME, Field};
use crate::filler::Filler;
use crate::literal;
use crate::reflect::{ReflectMut, Shape};

/// Walks a struct's members unless the field is tagged with the omit keyword.
pub(crate) fn fill_struct(filler: &Filler, field: &mut Field<'_>) -> Result<(), FillError> {
    if field.tag() != filler.omit_keyword() {
        filler.walk_struct(field);
    }
    Ok(())
}

/// Recurses into a pointer's target, allocating one when the pointer is null.
///
/// A fresh target is attached only when it ends up non-zero or a literal
/// explicitly materialised it.
pub(crate) fn fill_pointer(filler: &Filler, field: &mut Field<'_>) -> Result<(), FillError> {
    let (tag, name, parent) = (field.tag(), field.name(), field.parent());
    let ReflectMut::Pointer(pointer) = field.value_mut().reflect_mut() else {
        return Ok(());
    };
    if let Some(target) = pointer.target_mut() {
        filler.fill_field(&mut Field::new(target, tag, name, parent));
        return Ok(());
    }
    pointer.fill_vacant(&mut |target| {
        let mut child = Field::new(target, tag, name, parent);
        filler.fill_field(&mut child);
        child.is_initialized() || !child.value().is_zero()
    });
    Ok(())
}

/// Recurses into a polymorphic slot whose implementation is a struct.
///
/// Empty slots and non-struct implementations are left alone.
pub(crate) fn fill_dynamic(filler: &Filler, field: &mut Field<'_>) -> Result<(), FillError> {
    let (tag, name, parent) = (field.tag(), field.name(), field.parent());
    let ReflectMut::Dynamic(slot) = field.value_mut().reflect_mut() else {
        return Ok(());
    };
    let Some(implementation) = slot.implementation_mut() else {
        return Ok(());
    };
    if implementation.innermost() == Some(Shape::Struct) {
        filler.fill_field(&mut Field::new(implementation, tag, name, parent));
    }
    Ok(())
}

/// Fills a sequence.
///
/// Sequences of structs or polymorphic values have their existing elements
/// filled in place. Other sequences are rebuilt from a `[...]` literal.
pub(crate) fn fill_sequence(filler: &Filler, field: &mut Field<'_>) -> Result<(), FillError> {
    let tag = field.tag();
    let parent = field.as_parent();
    let elements = field.value().innermost();
    let ReflectMut::Sequence(sequence) = field.value_mut().reflect_mut() else {
        return Ok(());
    };
    if matches!(elements, Some(Shape::Struct | Shape::Dynamic)) {
        sequence.for_each_mut(&mut |element| {
            filler.fill_field(&mut Field::new(element, tag, ELEMENT_NAME, Some(&parent)));
        });
        return Ok(());
    }

    let body = literal::sequence_body(tag)?;
    if body.is_empty() {
        sequence.set_empty();
    } else {
        let tokens = literal::split_top_level(body)?;
        sequence.rebuild(&tokens, &mut |element, token| {
            filler.fill_field(&mut Field::new(element, token, ELEMENT_NAME, Some(&parent)));
        });
    }
    field.mark_initialized();
    Ok(())
}

/// Fills a map.
///
/// Maps of structs or polymorphic values have their existing values filled
/// in place. Other maps are rebuilt from a `{key:value,...}` literal, where
/// entries without a colon are skipped and later duplicates win.
pub(crate) fn fill_map(filler: &Filler, field: &mut Field<'_>) -> Result<(), FillError> {
    let tag = field.tag();
    let parent = field.as_parent();
    let values = field.value().innermost();
    let ReflectMut::Map(map) = field.value_mut().reflect_mut() else {
        return Ok(());
    };

    if matches!(values, Some(Shape::Struct | Shape::Dynamic)) {
        map.for_each_value_mut(&mut |value| {
            filler.fill_field(&mut Field::new(value, tag, ENTRY_NAME, Some(&parent)));
        });
        return Ok(());
    }

    let body = literal::map_body(tag)?;
    if body.is_empty() {
        map.set_empty();
    } else {
        let entries: Vec<(&str, &str)> = literal::split_top_level(body)?
            .into_iter()
            .filter_map(literal::split_entry)
            .collect();
        map.rebuild(&entries, &mut |slot, text| {
            filler.fill_field(&mut Field::new(slot, text, ENTRY_NAME, Some(&parent)));
        });
    }
    field.mark_initialized();
    Ok(())
}
