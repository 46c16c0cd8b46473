//! Error types produced while filling defaults and loading settings.
//!
//! [`FillError`] never crosses the engine boundary: handlers return it and
//! the engine logs it. [`SettingsError`] is returned to callers that load
//! engine settings from figment providers.

mod constructors;
mod conversions;
mod types;

pub use types::{FillError, SettingsError};

#[cfg(test)]
mod tests;
