//! `Reflect` impls for scalar leaves.

use std::path::PathBuf;
use std::time::Duration;

use super::{FloatValue, Reflect, ReflectMut, Shape, SignedInt, TextValue, UnsignedInt};

macro_rules! scalar_reflect {
    ($shape:ident, $variant:ident, $zero:expr, $($ty:ty),+ $(,)?) => {$(
        impl Reflect for $ty {
            fn shape(&self) -> Shape {
                Shape::$shape
            }

            fn innermost(&self) -> Option<Shape> {
                Some(Shape::$shape)
            }

            fn innermost_of() -> Shape {
                Shape::$shape
            }

            fn is_zero(&self) -> bool {
                let zero: fn(&$ty) -> bool = $zero;
                zero(self)
            }

            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::$variant(self)
            }
        }
    )+};
}

macro_rules! signed {
    ($($ty:ty),+ $(,)?) => {$(
        impl SignedInt for $ty {
            fn set_i128(&mut self, value: i128) -> bool {
                <$ty>::try_from(value).map(|narrowed| *self = narrowed).is_ok()
            }
        }
    )+
    scalar_reflect!(Int, Int, |value| *value == 0, $($ty),+);
    };
}

macro_rules! unsigned {
    ($($ty:ty),+ $(,)?) => {$(
        impl UnsignedInt for $ty {
            fn set_u128(&mut self, value: u128) -> bool {
                <$ty>::try_from(value).map(|narrowed| *self = narrowed).is_ok()
            }
        }
    )+
    scalar_reflect!(Uint, Uint, |value| *value == 0, $($ty),+);
    };
}

signed!(i8, i16, i32, i64, i128, isize);
unsigned!(u8, u16, u32, u64, u128, usize);

impl FloatValue for f32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "narrowing to the field's precision is the intended behaviour"
    )]
    fn set_f64(&mut self, value: f64) {
        *self = value as Self;
    }
}

impl FloatValue for f64 {
    fn set_f64(&mut self, value: f64) {
        *self = value;
    }
}

// Bit-pattern comparison: negative zero is not the zero value.
scalar_reflect!(Float, Float, |value| value.to_bits() == 0, f32, f64);

scalar_reflect!(Bool, Bool, |value| !*value, bool);

impl TextValue for String {
    fn set_text(&mut self, text: &str) {
        text.clone_into(self);
    }
}

impl TextValue for PathBuf {
    fn set_text(&mut self, text: &str) {
        *self = Self::from(text);
    }
}

scalar_reflect!(String, String, String::is_empty, String);
scalar_reflect!(String, String, |path| path.as_os_str().is_empty(), PathBuf);

/// Durations present an integer view counting nanoseconds, so that a plain
/// integer annotation still applies when duration literals are not enabled.
impl SignedInt for Duration {
    fn set_i128(&mut self, value: i128) -> bool {
        u64::try_from(value)
            .map(|nanos| *self = Self::from_nanos(nanos))
            .is_ok()
    }
}

scalar_reflect!(Int, Int, Duration::is_zero, Duration);
