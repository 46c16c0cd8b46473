//! Constructors for `FillError`.

use super::FillError;

impl FillError {
    /// Builds [`FillError::Unparsable`] for `literal`.
    ///
    /// # Examples
    ///
    /// ```
    /// use backfill::FillError;
    /// let err = FillError::unparsable("maybe", "bool");
    /// assert_eq!(err.to_string(), "cannot parse 'maybe' as bool");
    /// ```
    #[must_use]
    pub fn unparsable(literal: &str, expected: &'static str) -> Self {
        Self::Unparsable {
            literal: literal.to_owned(),
            expected,
        }
    }

    /// Builds [`FillError::OutOfRange`] for `literal`.
    #[must_use]
    pub fn out_of_range(literal: &str, target: &'static str) -> Self {
        Self::OutOfRange {
            literal: literal.to_owned(),
            target,
        }
    }

    /// Builds [`FillError::Timestamp`] from a chrono parse failure.
    #[must_use]
    pub fn timestamp(literal: &str, source: chrono::ParseError) -> Self {
        Self::Timestamp {
            literal: literal.to_owned(),
            source,
        }
    }
}
