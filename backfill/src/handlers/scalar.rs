//! Handlers for scalar shapes.
//!
//! Each handler parses the field's annotation and writes the result. A
//! parse failure, or a value that does not fit the target, leaves the field
//! untouched and reports a [`FillError`].

use crate::error::FillError;
use crate::field::Field;
use crate::filler::Filler;
use crate::reflect::ReflectMut;

/// Parses the boolean spellings accepted in annotations.
pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

pub(crate) fn fill_bool(_filler: &Filler, field: &mut Field<'_>) -> Result<(), FillError> {
    let tag = field.tag();
    let value = parse_bool(tag).ok_or_else(|| FillError::unparsable(tag, "bool"))?;
    if let ReflectMut::Bool(slot) = field.value_mut().reflect_mut() {
        *slot = value;
    }
    Ok(())
}

pub(crate) fn fill_int(_filler: &Filler, field: &mut Field<'_>) -> Result<(), FillError> {
    let tag = field.tag();
    let target = field.value().type_name();
    let value: i128 = tag
        .parse()
        .map_err(|_| FillError::unparsable(tag, "a signed integer"))?;
    let ReflectMut::Int(slot) = field.value_mut().reflect_mut() else {
        return Ok(());
    };
    if slot.set_i128(value) {
        Ok(())
    } else {
        Err(FillError::out_of_range(tag, target))
    }
}

pub(crate) fn fill_uint(_filler: &Filler, field: &mut Field<'_>) -> Result<(), FillError> {
    let tag = field.tag();
    let target = field.value().type_name();
    let value: u128 = tag
        .parse()
        .map_err(|_| FillError::unparsable(tag, "an unsigned integer"))?;
    let ReflectMut::Uint(slot) = field.value_mut().reflect_mut() else {
        return Ok(());
    };
    if slot.set_u128(value) {
        Ok(())
    } else {
        Err(FillError::out_of_range(tag, target))
    }
}

pub(crate) fn fill_float(_filler: &Filler, field: &mut Field<'_>) -> Result<(), FillError> {
    let tag = field.tag();
    let value: f64 = tag
        .parse()
        .map_err(|_| FillError::unparsable(tag, "a float"))?;
    if let ReflectMut::Float(slot) = field.value_mut().reflect_mut() {
        slot.set_f64(value);
    }
    Ok(())
}

pub(crate) fn fill_string(_filler: &Filler, field: &mut Field<'_>) -> Result<(), FillError> {
    let tag = field.tag();
    if let ReflectMut::String(slot) = field.value_mut().reflect_mut() {
        slot.set_text(tag);
    }
    Ok(())
}

/// Copies the annotation's raw bytes into an empty byte sequence.
pub(crate) fn fill_bytes(_filler: &Filler, field: &mut Field<'_>) -> Result<(), FillError> {
    let tag = field.tag();
    if let ReflectMut::Sequence(sequence) = field.value_mut().reflect_mut()
        && let Some(bytes) = sequence.as_bytes_mut()
        && bytes.is_empty()
    {
        bytes.extend_from_slice(tag.as_bytes());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(true))]
    #[case("t", Some(true))]
    #[case("TRUE", Some(true))]
    #[case("True", Some(true))]
    #[case("0", Some(false))]
    #[case("F", Some(false))]
    #[case("false", Some(false))]
    #[case("yes", None)]
    #[case("tRuE", None)]
    fn parses_boolean_spellings(#[case] text: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_bool(text), expected);
    }

    #[test]
    fn out_of_range_integers_leave_the_field_alone() {
        let filler = Filler::new([]);
        let mut small = 3_i8;
        let mut field = Field::new(&mut small, "300", "small", None);
        let result = fill_int(&filler, &mut field);
        assert!(matches!(result, Err(FillError::OutOfRange { target: "i8", .. })));
        assert_eq!(small, 3);
    }

    #[test]
    fn unparsable_floats_report_their_literal() {
        let filler = Filler::new([]);
        let mut ratio = 0.0_f32;
        let mut field = Field::new(&mut ratio, "half", "ratio", None);
        let result = fill_float(&filler, &mut field);
        assert!(matches!(
            result,
            Err(FillError::Unparsable { ref literal, .. }) if literal == "half"
        ));
    }

    #[test]
    fn bytes_are_copied_verbatim_only_when_empty() {
        let filler = Filler::new([]);
        let mut payload: Vec<u8> = Vec::new();
        let mut field = Field::new(&mut payload, "héllo", "payload", None);
        fill_bytes(&filler, &mut field).expect("bytes fill");
        assert_eq!(std::str::from_utf8(&payload), Ok("héllo"));

        let mut existing = vec![1_u8];
        let mut populated = Field::new(&mut existing, "x", "existing", None);
        fill_bytes(&filler, &mut populated).expect("bytes fill");
        assert_eq!(existing, [1]);
    }
}
