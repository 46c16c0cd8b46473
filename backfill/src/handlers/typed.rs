//! Handlers keyed by concrete type.

use std::any::{TypeId, type_name};
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::duration::parse_duration;
use crate::error::FillError;
use crate::field::Field;
use crate::filler::{FillFn, Filler, fill_fn};
use crate::reflect::Reflect;

use super::scalar::fill_int;
use super::skip_if_tag_empty;

/// Layout used to parse timestamp annotations.
///
/// Settings files name the layout as `rfc3339` or `rfc2822`; any other text
/// is taken as a `chrono` format string.
///
/// # Examples
///
/// ```rust
/// use backfill::TimeLayout;
///
/// let layout = TimeLayout::from(String::from("%Y-%m-%d %H:%M"));
/// let parsed = layout.parse("2024-02-29 12:30").expect("valid timestamp");
/// assert_eq!(parsed.to_rfc3339(), "2024-02-29T12:30:00+00:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeLayout {
    /// RFC 3339, for example `2006-01-02T15:04:05Z`.
    #[default]
    Rfc3339,
    /// RFC 2822, for example `Mon, 02 Jan 2006 15:04:05 +0000`.
    Rfc2822,
    /// A `chrono` format string.
    ///
    /// Layouts without an offset are read as UTC; date-only layouts resolve
    /// to midnight.
    Custom(String),
}

impl TimeLayout {
    /// Parses `text` according to this layout.
    ///
    /// # Errors
    ///
    /// Returns the `chrono` parse error when `text` does not match.
    pub fn parse(&self, text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        match self {
            Self::Rfc3339 => DateTime::parse_from_rfc3339(text).map(|ts| ts.with_timezone(&Utc)),
            Self::Rfc2822 => DateTime::parse_from_rfc2822(text).map(|ts| ts.with_timezone(&Utc)),
            Self::Custom(format) => DateTime::parse_from_str(text, format)
                .map(|ts| ts.with_timezone(&Utc))
                .or_else(|_| NaiveDateTime::parse_from_str(text, format).map(|ts| ts.and_utc()))
                .or_else(|_| {
                    NaiveDate::parse_from_str(text, format)
                        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
                }),
        }
    }
}

impl From<String> for TimeLayout {
    fn from(name: String) -> Self {
        if name.eq_ignore_ascii_case("rfc3339") {
            Self::Rfc3339
        } else if name.eq_ignore_ascii_case("rfc2822") {
            Self::Rfc2822
        } else {
            Self::Custom(name)
        }
    }
}

impl From<TimeLayout> for String {
    fn from(layout: TimeLayout) -> Self {
        match layout {
            TimeLayout::Rfc3339 => Self::from("rfc3339"),
            TimeLayout::Rfc2822 => Self::from("rfc2822"),
            TimeLayout::Custom(format) => format,
        }
    }
}

/// Parses timestamp annotations into zero-valued `DateTime<Utc>` fields.
pub(crate) fn timestamp_handler(layout: TimeLayout) -> FillFn {
    skip_if_tag_empty(move |_filler, field| {
        if !field.value().is_zero() {
            return Ok(());
        }
        let tag = field.tag();
        let parsed = layout
            .parse(tag)
            .map_err(|source| FillError::timestamp(tag, source))?;
        if let Some(slot) = field.downcast_mut::<DateTime<Utc>>() {
            *slot = parsed;
        }
        Ok(())
    })
}

/// Integer handler that reads `Duration` fields as duration literals.
pub(crate) fn fill_duration_or_int(filler: &Filler, field: &mut Field<'_>) -> Result<(), FillError> {
    if field.value().concrete_type() != TypeId::of::<Duration>() {
        return fill_int(filler, field);
    }
    let parsed = parse_duration(field.tag())?;
    if let Some(slot) = field.downcast_mut::<Duration>() {
        *slot = parsed;
    }
    Ok(())
}

/// A whole-value default registered for one concrete type.
///
/// The default replaces a field of type `T` only when the field is entirely
/// zero and not tagged with the omit keyword. Partially populated values are
/// never merged.
///
/// # Examples
///
/// ```rust
/// use backfill::{Fill, Filler, FillerOption, TypeDefault};
///
/// #[derive(Debug, Clone, Default, PartialEq, Fill)]
/// struct Retry {
///     attempts: u32,
/// }
///
/// #[derive(Debug, Default, Fill)]
/// struct Client {
///     retry: Retry,
/// }
///
/// let filler = Filler::new([
///     FillerOption::StandardHandlers,
///     FillerOption::RegisterDefault(TypeDefault::new(Retry { attempts: 3 })),
/// ]);
/// let mut client = Client::default();
/// filler.fill(&mut client);
/// assert_eq!(client.retry, Retry { attempts: 3 });
/// ```
#[derive(Clone)]
pub struct TypeDefault {
    type_id: TypeId,
    type_name: &'static str,
    handler: FillFn,
}

impl TypeDefault {
    /// Registers `value` as the default for every field of type `T`.
    #[must_use]
    pub fn new<T>(value: T) -> Self
    where
        T: Reflect + Clone + Send + Sync,
    {
        let handler = fill_fn(move |filler: &Filler, field: &mut Field<'_>| {
            if field.value().is_zero()
                && field.tag() != filler.omit_keyword()
                && let Some(slot) = field.downcast_mut::<T>()
            {
                slot.clone_from(&value);
            }
            Ok(())
        });
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            handler,
        }
    }

    /// Identifier of the type this default applies to.
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Name of the type this default applies to.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn into_parts(self) -> (TypeId, FillFn) {
        (self.type_id, self.handler)
    }
}

impl fmt::Debug for TypeDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDefault")
            .field("type_name", &self.type_name)
            .field("handler", &"<handler>")
            .finish()
    }
}
