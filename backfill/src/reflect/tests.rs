//! Tests for the shape model.

use super::*;
use rstest::rstest;
use std::collections::HashMap;
use std::time::Duration;

trait Greeter: Reflect {
    fn greeting(&self) -> String;
}

crate::polymorphic!(Greeter);

#[derive(Default)]
struct English {
    name: String,
}

impl Reflect for English {
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
        self.name.is_empty()
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Struct(self)
    }
}

impl StructValue for English {
    fn walk(&mut self, visit: &mut dyn FnMut(Member<'_>)) {
        visit(Member::new("name", &[("default", "  world ")], &mut self.name));
    }
}

impl Greeter for English {
    fn greeting(&self) -> String {
        format!("hello {}", self.name)
    }
}

#[rstest]
#[case::bool(Shape::Bool, false.shape())]
#[case::int(Shape::Int, 0_i16.shape())]
#[case::uint(Shape::Uint, 0_usize.shape())]
#[case::float(Shape::Float, 0.0_f32.shape())]
#[case::string(Shape::String, String::new().shape())]
#[case::duration(Shape::Int, Duration::ZERO.shape())]
#[case::option(Shape::Pointer, None::<u8>.shape())]
#[case::boxed(Shape::Pointer, Box::new(1_u8).shape())]
#[case::map(Shape::Map, HashMap::<String, u8>::new().shape())]
fn shapes_match_their_types(#[case] expected: Shape, #[case] actual: Shape) {
    assert_eq!(expected, actual);
}

#[test]
fn innermost_unwraps_nested_containers() {
    let nested: Option<Vec<HashMap<String, Box<English>>>> = None;
    assert_eq!(nested.innermost(), Some(Shape::Struct));
}

#[test]
fn indirect_mut_stops_at_null_pointers() {
    let mut missing: Option<Box<u32>> = None;
    assert!(indirect_mut(&mut missing).is_none());

    let mut present: Option<Box<u32>> = Some(Box::new(3));
    let target = indirect_mut(&mut present).expect("pointer target");
    assert_eq!(target.shape(), Shape::Uint);
    assert_eq!(target.concrete_type(), TypeId::of::<u32>());
}

#[test]
fn member_annotations_are_trimmed() {
    let mut english = English::default();
    let mut seen = Vec::new();
    english.walk(&mut |member| {
        seen.push((member.name(), member.annotation("default"), member.annotation("other")));
    });
    assert_eq!(seen, vec![("name", "world", "")]);
}

#[test]
fn poly_resolves_through_its_implementation() {
    let empty: Poly<dyn Greeter> = Poly::empty();
    assert_eq!(empty.shape(), Shape::Dynamic);
    assert_eq!(empty.innermost(), None);
    assert!(empty.is_zero());

    let mut full: Poly<dyn Greeter> = Poly::new(Box::new(English::default()));
    assert_eq!(full.innermost(), Some(Shape::Struct));
    assert!(!full.is_zero());

    let ReflectMut::Dynamic(slot) = full.reflect_mut() else {
        panic!("expected a dynamic view");
    };
    let implementation = slot.implementation_mut().expect("implementation");
    assert_eq!(implementation.shape(), Shape::Struct);
    let greeting = full.get().map(|greeter| greeter.greeting());
    assert_eq!(greeting.as_deref(), Some("hello "));
}

#[test]
fn poly_debug_names_the_implementation() {
    let full: Poly<dyn Greeter> = Poly::new(Box::new(English::default()));
    let rendered = format!("{full:?}");
    assert!(rendered.contains("English"), "unexpected rendering: {rendered}");
    assert_eq!(format!("{:?}", Poly::<dyn Greeter>::empty()), "Poly(None)");
}
