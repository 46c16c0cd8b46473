//! Parser for duration literals such as `"300ms"`, `"1.5s"` or `"1h30m"`.
//!
//! A literal is an optional `+` followed by either `0` or one or more
//! `<decimal>[.<fraction>]<unit>` terms, where the unit is one of `ns`,
//! `us`, `µs`, `μs`, `ms`, `s`, `m` or `h`. Fractions are evaluated in
//! integer nanoseconds, so `"1.5s"` is exact.

use std::time::Duration;

use thiserror::Error;

/// Errors raised while parsing a duration literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DurationError {
    /// The literal is empty.
    #[error("empty duration literal")]
    Empty,

    /// The literal carries a minus sign.
    #[error("negative duration '{0}'")]
    Negative(String),

    /// A term has no unit.
    #[error("missing unit in duration '{0}'")]
    MissingUnit(String),

    /// A term uses an unrecognised unit.
    #[error("unknown unit '{unit}' in duration '{literal}'")]
    UnknownUnit {
        /// Unit text as written.
        unit: String,
        /// Whole literal.
        literal: String,
    },

    /// The literal does not follow the duration grammar.
    #[error("invalid duration '{0}'")]
    Invalid(String),

    /// The value exceeds the representable range.
    #[error("duration '{0}' is out of range")]
    Overflow(String),
}

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;

/// Digits of a fraction beyond this carry no nanosecond precision.
const MAX_FRACTION_DIGITS: usize = 18;

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Splits off the leading ASCII digits of `text`.
fn leading_digits(text: &str) -> (&str, &str) {
    let end = text
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}

/// Accumulates `digits` into an integer, failing on overflow.
fn accumulate(digits: &str) -> Option<u128> {
    digits.bytes().try_fold(0_u128, |total, digit| {
        total
            .checked_mul(10)?
            .checked_add(u128::from(digit - b'0'))
    })
}

/// Evaluates `0.<digits>` of `unit` in whole nanoseconds.
fn fraction_nanos(digits: &str, unit: u128) -> Option<u128> {
    let kept = digits
        .get(..digits.len().min(MAX_FRACTION_DIGITS))
        .unwrap_or_default();
    let numerator = accumulate(kept)?;
    let scale = 10_u128.checked_pow(u32::try_from(kept.len()).ok()?)?;
    numerator.checked_mul(unit)?.checked_div(scale)
}

/// Parses a duration literal.
///
/// # Errors
///
/// Returns a [`DurationError`] when the literal is empty, negative,
/// malformed, uses a missing or unknown unit, or exceeds `u64` nanoseconds.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use backfill::duration::parse_duration;
///
/// assert_eq!(parse_duration("1h30m"), Ok(Duration::from_secs(5_400)));
/// assert_eq!(parse_duration("1.5s"), Ok(Duration::from_millis(1_500)));
/// assert!(parse_duration("10").is_err());
/// ```
pub fn parse_duration(literal: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid(literal.to_owned());
    let overflow = || DurationError::Overflow(literal.to_owned());

    if literal.is_empty() {
        return Err(DurationError::Empty);
    }
    if literal.starts_with('-') {
        return Err(DurationError::Negative(literal.to_owned()));
    }
    let mut rest = literal.strip_prefix('+').unwrap_or(literal);
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = leading_digits(rest);
        let (fraction, after_number) = match after_whole.strip_prefix('.') {
            Some(tail) => leading_digits(tail),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let unit_end = after_number
            .find(|ch: char| ch == '.' || ch.is_ascii_digit())
            .unwrap_or(after_number.len());
        let (unit, remainder) = after_number.split_at(unit_end);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(literal.to_owned()));
        }
        let nanos = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_owned(),
            literal: literal.to_owned(),
        })?;

        let term = accumulate(whole)
            .and_then(|value| value.checked_mul(nanos))
            .and_then(|value| value.checked_add(fraction_nanos(fraction, nanos)?))
            .ok_or_else(overflow)?;
        total = total.checked_add(term).ok_or_else(overflow)?;
        rest = remainder;
    }

    u64::try_from(total)
        .map(Duration::from_nanos)
        .map_err(|_| overflow())
}
