//! Fill unset members of nested values with declared defaults.
//!
//! Annotate struct members with `#[fill(default = "...")]`, derive
//! [`Fill`], and hand a mutable reference to a [`Filler`]. Members that still
//! hold their zero value receive the parsed annotation; members that were
//! already set are left alone. Scalars, strings, byte buffers, `Option` and
//! `Box` pointers, `Vec`s, maps, nested structs, timestamps, durations and
//! polymorphic [`Poly`] slots are all supported.
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use std::time::Duration;
//!
//! use backfill::{Fill, fill_defaults};
//!
//! #[derive(Debug, Default, Fill)]
//! struct Database {
//!     #[fill(default = "postgres://localhost/app")]
//!     url: String,
//!     #[fill(default = "30s")]
//!     timeout: Duration,
//! }
//!
//! #[derive(Debug, Default, Fill)]
//! struct AppConfig {
//!     #[fill(default = "true")]
//!     verbose: bool,
//!     #[fill(default = "{primary:1,replica:2}")]
//!     weights: BTreeMap<String, u8>,
//!     database: Database,
//!     #[fill(default = "5")]
//!     retries: Option<u32>,
//! }
//!
//! let mut config = AppConfig::default();
//! fill_defaults(&mut config);
//! assert!(config.verbose);
//! assert_eq!(config.weights.get("replica"), Some(&2));
//! assert_eq!(config.database.timeout, Duration::from_secs(30));
//! assert_eq!(config.retries, Some(5));
//! ```
//!
//! Malformed annotations never fail the fill: the affected member keeps its
//! value and the reason is logged through `tracing` at debug level.

extern crate self as backfill;

pub use backfill_macros::Fill;

pub mod duration;
mod error;
mod field;
mod filler;
pub mod handlers;
pub mod literal;
mod reflect;
mod settings;

use std::sync::LazyLock;

pub use error::{FillError, SettingsError};
pub use field::{ELEMENT_NAME, ENTRY_NAME, Field, Parent};
pub use filler::{
    DEFAULT_DIVE_KEYWORD, DEFAULT_OMIT_KEYWORD, DEFAULT_TAG_NAME, FillFn, Filler, FillerBuilder,
    FillerOption, fill_fn,
};
pub use handlers::{TimeLayout, TypeDefault};
pub use reflect::{
    DynamicValue, FloatValue, MapValue, Member, PointerValue, Poly, Polymorphic, Reflect,
    ReflectMut, SequenceValue, Shape, SignedInt, StructValue, TextValue, UnsignedInt,
    indirect_mut,
};
pub use settings::{ENV_PREFIX, FillerSettings};

static STANDARD: LazyLock<Filler> = LazyLock::new(Filler::standard);

/// The shared standard engine used by [`fill_defaults`].
#[must_use]
pub fn standard_filler() -> &'static Filler {
    &STANDARD
}

/// Fills `root` in place using the standard engine.
///
/// Equivalent to `standard_filler().fill(root)`.
pub fn fill_defaults(root: &mut dyn Reflect) {
    STANDARD.fill(root);
}
