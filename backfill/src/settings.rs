//! Engine settings loaded through figment.
//!
//! [`FillerSettings`] describes the keyword and parsing choices of a
//! [`Filler`] in a serialisable form, so that applications can expose them
//! alongside their own configuration.

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::filler::{
    DEFAULT_DIVE_KEYWORD, DEFAULT_OMIT_KEYWORD, DEFAULT_TAG_NAME, Filler, FillerOption,
};
use crate::handlers::TimeLayout;

/// Prefix of the environment variables read by [`FillerSettings::from_env`].
pub const ENV_PREFIX: &str = "BACKFILL_";

/// Serialisable description of a standard [`Filler`].
///
/// # Examples
///
/// ```rust
/// use backfill::FillerSettings;
/// use figment::{Figment, providers::Serialized};
///
/// let figment = Figment::new().merge(Serialized::default("tag_name", "fallback"));
/// let settings = FillerSettings::from_figment(&figment).expect("valid settings");
/// assert_eq!(settings.tag_name, "fallback");
/// assert_eq!(settings.omit_keyword, "omit");
/// assert!(settings.parse_durations);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillerSettings {
    /// Annotation key read from each member.
    pub tag_name: String,
    /// Keyword that excludes a member from filling.
    pub omit_keyword: String,
    /// Keyword that forces filling of a partially populated struct.
    pub dive_keyword: String,
    /// Layout used for timestamp annotations.
    pub time_layout: TimeLayout,
    /// Whether `Duration` annotations are read as duration literals.
    pub parse_durations: bool,
}

impl Default for FillerSettings {
    fn default() -> Self {
        Self {
            tag_name: DEFAULT_TAG_NAME.to_owned(),
            omit_keyword: DEFAULT_OMIT_KEYWORD.to_owned(),
            dive_keyword: DEFAULT_DIVE_KEYWORD.to_owned(),
            time_layout: TimeLayout::Rfc3339,
            parse_durations: true,
        }
    }
}

impl FillerSettings {
    /// Loads settings from `BACKFILL_*` environment variables over the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Gathering`] when a variable holds a value of
    /// the wrong type.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_figment(&Figment::new().merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Extracts settings from `figment`, using the defaults for missing keys.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Gathering`] when extraction fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, SettingsError> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(figment.clone())
            .extract()
            .map_err(SettingsError::from)
    }

    /// Converts the settings into [`FillerOption`]s, starting with the
    /// standard handler set.
    #[must_use]
    pub fn options(&self) -> Vec<FillerOption> {
        let mut options = vec![
            FillerOption::StandardHandlers,
            FillerOption::TagName(self.tag_name.clone()),
            FillerOption::OmitKeyword(self.omit_keyword.clone()),
            FillerOption::DiveKeyword(self.dive_keyword.clone()),
            FillerOption::TimeLayout(self.time_layout.clone()),
        ];
        if self.parse_durations {
            options.push(FillerOption::ParseDurations);
        }
        options
    }

    /// Builds a [`Filler`] from these settings.
    #[must_use]
    pub fn build(&self) -> Filler {
        Filler::new(self.options())
    }
}
