//! Options accepted by [`Filler::new`](super::Filler::new).

use crate::handlers::{TimeLayout, TypeDefault};

/// One configuration step applied while building a [`Filler`](super::Filler).
///
/// # Examples
///
/// ```rust
/// use backfill::{Filler, FillerOption};
///
/// let filler = Filler::new([
///     FillerOption::StandardHandlers,
///     FillerOption::TagName("fallback".into()),
///     FillerOption::OmitKeyword("-".into()),
/// ]);
/// assert_eq!(filler.tag_name(), "fallback");
/// assert_eq!(filler.omit_keyword(), "-");
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum FillerOption {
    /// Annotation key read from each member.
    TagName(String),
    /// Keyword that excludes a member from filling.
    OmitKeyword(String),
    /// Keyword that forces filling of a partially populated struct.
    DiveKeyword(String),
    /// Installs timestamp parsing for `chrono::DateTime<Utc>` fields.
    TimeLayout(TimeLayout),
    /// Reads `std::time::Duration` annotations as duration literals such as
    /// `"1m30s"`.
    ParseDurations,
    /// Registers a whole-value default for one concrete type.
    RegisterDefault(TypeDefault),
    /// Installs a handler for every shape.
    StandardHandlers,
}
