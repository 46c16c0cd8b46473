//! Built-in fill handlers.
//!
//! Shape handlers are keyed by [`Shape`] and cover every structural
//! category. Type handlers are keyed by concrete type and layer timestamp
//! parsing, duration literals and registered defaults on top.

mod composite;
mod scalar;
mod typed;

use std::collections::HashMap;

use crate::error::FillError;
use crate::field::Field;
use crate::filler::{FillFn, Filler, fill_fn};
use crate::reflect::Shape;

pub use typed::{TimeLayout, TypeDefault};

pub(crate) use typed::timestamp_handler;

/// Wraps `fill` so that fields without an annotation are left alone.
///
/// # Examples
///
/// ```rust
/// use backfill::{Filler, ReflectMut, Shape};
/// use backfill::handlers::skip_if_tag_empty;
///
/// let filler = Filler::builder()
///     .shape_handler(
///         Shape::String,
///         skip_if_tag_empty(|_, field| {
///             let text = field.tag().to_uppercase();
///             if let ReflectMut::String(slot) = field.value_mut().reflect_mut() {
///                 slot.set_text(&text);
///             }
///             Ok(())
///         }),
///     )
///     .build();
/// # let _ = filler;
/// ```
pub fn skip_if_tag_empty<F>(fill: F) -> FillFn
where
    F: Fn(&Filler, &mut Field<'_>) -> Result<(), FillError> + Send + Sync + 'static,
{
    fill_fn(move |filler: &Filler, field: &mut Field<'_>| {
        if field.tag().is_empty() {
            Ok(())
        } else {
            fill(filler, field)
        }
    })
}

/// The shape handlers installed by the standard handler set.
pub(crate) fn standard_shape_handlers() -> HashMap<Shape, FillFn> {
    HashMap::from([
        (Shape::Bool, skip_if_tag_empty(scalar::fill_bool)),
        (Shape::Int, skip_if_tag_empty(scalar::fill_int)),
        (Shape::Uint, skip_if_tag_empty(scalar::fill_uint)),
        (Shape::Float, skip_if_tag_empty(scalar::fill_float)),
        (Shape::String, skip_if_tag_empty(scalar::fill_string)),
        (Shape::Bytes, skip_if_tag_empty(scalar::fill_bytes)),
        (Shape::Struct, fill_fn(composite::fill_struct)),
        (Shape::Pointer, fill_fn(composite::fill_pointer)),
        (Shape::Dynamic, fill_fn(composite::fill_dynamic)),
        (Shape::Sequence, fill_fn(composite::fill_sequence)),
        (Shape::Map, fill_fn(composite::fill_map)),
    ])
}

/// The integer handler installed when duration literals are enabled.
pub(crate) fn duration_handler() -> FillFn {
    skip_if_tag_empty(typed::fill_duration_or_int)
}
