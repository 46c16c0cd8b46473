//! Conversions from external error types.

use figment::Error as FigmentError;

use super::SettingsError;

impl From<FigmentError> for SettingsError {
    fn from(e: FigmentError) -> Self {
        Self::Gathering(Box::new(e))
    }
}

impl From<SettingsError> for FigmentError {
    /// Allow using `?` inside `figment::Jail` closures.
    fn from(e: SettingsError) -> Self {
        match e {
            SettingsError::Gathering(fe) => *fe,
        }
    }
}
