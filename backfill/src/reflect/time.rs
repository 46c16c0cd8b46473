//! `Reflect` impl for timestamps.
//!
//! A `DateTime<Utc>` is an opaque struct: it has no walkable members and is
//! zero at the Unix epoch, which is also its `Default`.

use chrono::{DateTime, Utc};

use super::{Member, Reflect, ReflectMut, Shape, StructValue};

impl Reflect for DateTime<Utc> {
    fn shape(&self) -> Shape {
        Shape::Struct
    }

    fn innermost(&self) -> Option<Shape> {
        Some(Shape::Struct)
    }

    fn innermost_of() -> Shape {
        Shape::Struct
    }

    fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Struct(self)
    }
}

impl StructValue for DateTime<Utc> {
    fn walk(&mut self, _visit: &mut dyn FnMut(Member<'_>)) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn epoch_is_the_zero_timestamp() {
        assert!(DateTime::<Utc>::default().is_zero());
        let later = Utc.timestamp_opt(1, 0).single().expect("valid timestamp");
        assert!(!later.is_zero());
    }
}
