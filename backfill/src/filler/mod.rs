//! The defaults-filling engine.
//!
//! A [`Filler`] owns two dispatch tables. Shape handlers are looked up by
//! the [`Shape`] of the field being visited; type handlers by the field's
//! concrete type after pointer indirection. Both may fire for one field,
//! shape first, and each is gated by [`Filler::should_fill`].

mod builder;
mod options;

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::FillError;
use crate::field::Field;
use crate::reflect::{Reflect, ReflectMut, Shape, indirect_mut};

pub use builder::FillerBuilder;
pub use options::FillerOption;

/// Annotation key read when no tag name is configured.
pub const DEFAULT_TAG_NAME: &str = "default";

/// Keyword that stops the engine from touching a struct member.
pub const DEFAULT_OMIT_KEYWORD: &str = "omit";

/// Keyword that forces the engine into a partially populated struct.
pub const DEFAULT_DIVE_KEYWORD: &str = "dive";

/// A fill handler.
///
/// Handlers receive the engine so that they can recurse through
/// [`Filler::fill_field`]. An `Err` leaves the field as it is and is logged
/// by the engine.
pub type FillFn = Arc<dyn Fn(&Filler, &mut Field<'_>) -> Result<(), FillError> + Send + Sync>;

/// Wraps a closure or function as a [`FillFn`].
pub fn fill_fn<F>(fill: F) -> FillFn
where
    F: Fn(&Filler, &mut Field<'_>) -> Result<(), FillError> + Send + Sync + 'static,
{
    Arc::new(fill)
}

/// Fills unset members of structs from their `#[fill(...)]` annotations.
///
/// A built `Filler` is immutable and may be shared across threads.
///
/// # Examples
///
/// ```rust
/// use backfill::{Fill, Filler};
///
/// #[derive(Debug, Default, Fill)]
/// struct Server {
///     #[fill(default = "127.0.0.1")]
///     host: String,
///     #[fill(default = "8080")]
///     port: u16,
///     #[fill(default = "[info,audit]")]
///     channels: Vec<String>,
/// }
///
/// let mut server = Server { port: 9000, ..Server::default() };
/// Filler::standard().fill(&mut server);
/// assert_eq!(server.host, "127.0.0.1");
/// assert_eq!(server.port, 9000);
/// assert_eq!(server.channels, ["info", "audit"]);
/// ```
#[derive(Clone)]
pub struct Filler {
    tag_name: String,
    omit_keyword: String,
    dive_keyword: String,
    shape_handlers: HashMap<Shape, FillFn>,
    type_handlers: HashMap<TypeId, FillFn>,
}

impl Filler {
    /// Builds an engine from `options`, applied in order.
    ///
    /// Later options override earlier ones for the same setting. Without
    /// [`FillerOption::StandardHandlers`] the engine has no shape handlers
    /// and leaves every value untouched.
    #[must_use]
    pub fn new(options: impl IntoIterator<Item = FillerOption>) -> Self {
        FillerBuilder::new().options(options).build()
    }

    /// Starts a [`FillerBuilder`] with no handlers installed.
    #[must_use]
    pub fn builder() -> FillerBuilder {
        FillerBuilder::new()
    }

    /// The standard engine: every shape handler, RFC 3339 timestamps and
    /// duration literals.
    #[must_use]
    pub fn standard() -> Self {
        Self::new([
            FillerOption::StandardHandlers,
            FillerOption::TimeLayout(crate::TimeLayout::Rfc3339),
            FillerOption::ParseDurations,
        ])
    }

    fn empty() -> Self {
        Self {
            tag_name: DEFAULT_TAG_NAME.to_owned(),
            omit_keyword: DEFAULT_OMIT_KEYWORD.to_owned(),
            dive_keyword: DEFAULT_DIVE_KEYWORD.to_owned(),
            shape_handlers: HashMap::new(),
            type_handlers: HashMap::new(),
        }
    }

    /// Annotation key read from each member.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Keyword that excludes a member from filling.
    #[must_use]
    pub fn omit_keyword(&self) -> &str {
        &self.omit_keyword
    }

    /// Keyword that forces filling of a partially populated struct.
    #[must_use]
    pub fn dive_keyword(&self) -> &str {
        &self.dive_keyword
    }

    /// Returns `true` when a shape handler is installed for `shape`.
    #[must_use]
    pub fn handles_shape(&self, shape: Shape) -> bool {
        self.shape_handlers.contains_key(&shape)
    }

    /// Returns `true` when a type handler is installed for `type_id`.
    #[must_use]
    pub fn handles_type(&self, type_id: TypeId) -> bool {
        self.type_handlers.contains_key(&type_id)
    }

    /// Fills `root` in place.
    ///
    /// Does nothing unless `root`, after pointer indirection, is a struct.
    /// The root struct is walked even when some of its members are set.
    pub fn fill(&self, root: &mut dyn Reflect) {
        let type_name = root.type_name();
        let Some(target) = indirect_mut(root) else {
            tracing::trace!(type_name, "root is a null pointer; nothing to fill");
            return;
        };
        if target.shape() != Shape::Struct {
            tracing::trace!(type_name, "root is not a struct; nothing to fill");
            return;
        }
        self.walk_struct(&mut Field::new(target, "", "", None));
    }

    /// Dispatches `field` to its shape handler and then to its type handler.
    ///
    /// Each handler runs only when [`Filler::should_fill`] holds at the time
    /// it is consulted.
    pub fn fill_field(&self, field: &mut Field<'_>) {
        let shape = field.value().shape();
        if let Some(handler) = self.shape_handlers.get(&shape)
            && self.should_fill(field)
        {
            self.run(handler, field, "shape");
        }

        let concrete = field.value().concrete_type();
        if let Some(handler) = self.type_handlers.get(&concrete)
            && self.should_fill(field)
        {
            self.run(handler, field, "type");
        }
    }

    /// Decides whether `field` is eligible for filling.
    ///
    /// Values whose innermost shape is a struct honour the dive and omit
    /// keywords and are otherwise filled only when entirely zero.
    /// Polymorphic values are always eligible. Everything else is filled
    /// only when zero.
    #[must_use]
    pub fn should_fill(&self, field: &Field<'_>) -> bool {
        match field.value().innermost() {
            Some(Shape::Struct) if field.tag() == self.dive_keyword => true,
            Some(Shape::Struct) if field.tag() == self.omit_keyword => false,
            Some(Shape::Dynamic) => true,
            _ => field.value().is_zero(),
        }
    }

    /// Fills every member of the struct behind `field`.
    ///
    /// Each member becomes a child [`Field`] carrying the annotation stored
    /// under the configured tag name. `field` is marked initialised when any
    /// member was.
    pub fn walk_struct(&self, field: &mut Field<'_>) {
        let parent = field.as_parent();
        let Some(target) = indirect_mut(field.value_mut()) else {
            return;
        };
        let ReflectMut::Struct(value) = target.reflect_mut() else {
            return;
        };
        let mut initialized = false;
        value.walk(&mut |member| {
            let tag = member.annotation(&self.tag_name);
            let name = member.name();
            let mut child = Field::new(member.into_value(), tag, name, Some(&parent));
            self.fill_field(&mut child);
            initialized |= child.is_initialized();
        });
        if initialized {
            field.mark_initialized();
        }
    }

    fn run(&self, handler: &FillFn, field: &mut Field<'_>, table: &'static str) {
        tracing::trace!(path = %field.path(), table, "dispatching fill handler");
        if let Err(error) = handler(self, field) {
            tracing::debug!(
                path = %field.path(),
                type_name = field.value().type_name(),
                tag = field.tag(),
                table,
                %error,
                "default not applied"
            );
        }
    }
}

impl fmt::Debug for Filler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filler")
            .field("tag_name", &self.tag_name)
            .field("omit_keyword", &self.omit_keyword)
            .field("dive_keyword", &self.dive_keyword)
            .field("shape_handlers", &self.shape_handlers.len())
            .field("type_handlers", &self.type_handlers.len())
            .finish()
    }
}
