//! Builder for [`Filler`].
//!
//! The builder applies options in order, so a later option replaces the
//! handler or keyword installed by an earlier one.

use std::any::TypeId;

use super::{FillFn, Filler, FillerOption};
use crate::handlers::{self, TimeLayout, TypeDefault};
use crate::reflect::{Reflect, Shape};

/// Builder for [`Filler`].
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use backfill::{Fill, Filler};
///
/// #[derive(Debug, Default, Fill)]
/// struct Limits {
///     #[fill(fallback = "2s")]
///     timeout: Duration,
///     #[fill(default = "ignored", fallback = "8")]
///     workers: u8,
/// }
///
/// let filler = Filler::builder()
///     .standard_handlers()
///     .parse_durations()
///     .tag_name("fallback")
///     .build();
/// let mut limits = Limits::default();
/// filler.fill(&mut limits);
/// assert_eq!(limits.timeout, Duration::from_secs(2));
/// assert_eq!(limits.workers, 8);
/// ```
#[derive(Debug, Clone)]
pub struct FillerBuilder {
    filler: Filler,
}

impl FillerBuilder {
    /// Creates a builder with default keywords and no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            filler: Filler::empty(),
        }
    }

    /// Applies a single option.
    #[must_use]
    pub fn option(mut self, option: FillerOption) -> Self {
        self.apply(option);
        self
    }

    /// Applies `options` in order.
    #[must_use]
    pub fn options(mut self, options: impl IntoIterator<Item = FillerOption>) -> Self {
        for option in options {
            self.apply(option);
        }
        self
    }

    /// Sets the annotation key read from each member.
    #[must_use]
    pub fn tag_name(self, tag_name: impl Into<String>) -> Self {
        self.option(FillerOption::TagName(tag_name.into()))
    }

    /// Sets the keyword that excludes a member from filling.
    #[must_use]
    pub fn omit_keyword(self, keyword: impl Into<String>) -> Self {
        self.option(FillerOption::OmitKeyword(keyword.into()))
    }

    /// Sets the keyword that forces filling of a partially populated struct.
    #[must_use]
    pub fn dive_keyword(self, keyword: impl Into<String>) -> Self {
        self.option(FillerOption::DiveKeyword(keyword.into()))
    }

    /// Installs timestamp parsing with `layout`.
    #[must_use]
    pub fn time_layout(self, layout: TimeLayout) -> Self {
        self.option(FillerOption::TimeLayout(layout))
    }

    /// Reads `Duration` annotations as duration literals.
    #[must_use]
    pub fn parse_durations(self) -> Self {
        self.option(FillerOption::ParseDurations)
    }

    /// Registers `value` as the whole-value default for fields of type `T`.
    #[must_use]
    pub fn register_default<T>(self, value: T) -> Self
    where
        T: Reflect + Clone + Send + Sync,
    {
        self.option(FillerOption::RegisterDefault(TypeDefault::new(value)))
    }

    /// Installs a handler for every shape.
    #[must_use]
    pub fn standard_handlers(self) -> Self {
        self.option(FillerOption::StandardHandlers)
    }

    /// Installs `handler` for `shape`, replacing any existing one.
    #[must_use]
    pub fn shape_handler(mut self, shape: Shape, handler: FillFn) -> Self {
        self.filler.shape_handlers.insert(shape, handler);
        self
    }

    /// Installs `handler` for fields whose concrete type is `T`, replacing
    /// any existing one.
    #[must_use]
    pub fn type_handler<T: Reflect>(mut self, handler: FillFn) -> Self {
        self.filler.type_handlers.insert(TypeId::of::<T>(), handler);
        self
    }

    /// Finishes the engine.
    #[must_use]
    pub fn build(self) -> Filler {
        self.filler
    }

    fn apply(&mut self, option: FillerOption) {
        let filler = &mut self.filler;
        match option {
            FillerOption::TagName(tag_name) => filler.tag_name = tag_name,
            FillerOption::OmitKeyword(keyword) => filler.omit_keyword = keyword,
            FillerOption::DiveKeyword(keyword) => filler.dive_keyword = keyword,
            FillerOption::TimeLayout(layout) => {
                filler.type_handlers.insert(
                    TypeId::of::<chrono::DateTime<chrono::Utc>>(),
                    handlers::timestamp_handler(layout),
                );
            }
            FillerOption::ParseDurations => {
                filler
                    .shape_handlers
                    .insert(Shape::Int, handlers::duration_handler());
            }
            FillerOption::RegisterDefault(registered) => {
                let (type_id, handler) = registered.into_parts();
                filler.type_handlers.insert(type_id, handler);
            }
            FillerOption::StandardHandlers => {
                filler.shape_handlers.extend(handlers::standard_shape_handlers());
            }
        }
    }
}

impl Default for FillerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
