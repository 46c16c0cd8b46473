//! Error enums for the fill engine and its settings.

use figment::Error as FigmentError;
use thiserror::Error;

use crate::duration::DurationError;
use crate::literal::LiteralError;

/// Reasons a default could not be applied to a field.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FillError {
    /// The annotation does not parse as the target scalar type.
    #[error("cannot parse '{literal}' as {expected}")]
    Unparsable {
        /// Annotation text.
        literal: String,
        /// Human-readable name of the expected type.
        expected: &'static str,
    },

    /// The annotation parses but does not fit the target type.
    #[error("'{literal}' is out of range for {target}")]
    OutOfRange {
        /// Annotation text.
        literal: String,
        /// Name of the target type.
        target: &'static str,
    },

    /// A composite literal is malformed.
    #[error(transparent)]
    Literal(#[from] LiteralError),

    /// A timestamp annotation does not match the configured layout.
    #[error("cannot parse timestamp '{literal}': {source}")]
    Timestamp {
        /// Annotation text.
        literal: String,
        /// Underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },

    /// A duration annotation is malformed.
    #[error(transparent)]
    Duration(#[from] DurationError),
}

/// Errors raised while loading engine settings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// Providers failed to produce valid settings.
    #[error("Failed to gather filler settings: {0}")]
    Gathering(#[from] Box<FigmentError>),
}
