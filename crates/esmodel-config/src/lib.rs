//! Settings file loading for esmodel.
//!
//! ```toml
//! [naming]
//! inheritance_enabled = true
//! ```

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Settings file name looked up by `find_settings`.
pub const SETTINGS_FILE_NAME: &str = "esmodel.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read settings file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// Settings
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub naming: NamingSettings,
}

///
/// NamingSettings
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingSettings {
    /// Unset names fall back to the nearest explicitly-named ancestor.
    pub inheritance_enabled: bool,
}

/// Parse settings from TOML text. An empty document yields defaults.
pub fn parse_settings(text: &str) -> Result<Settings, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Load settings from a TOML file.
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_settings(&text)
}

/// Walk up from `start` looking for `esmodel.toml`.
#[must_use]
pub fn find_settings(start: impl AsRef<Path>) -> Option<PathBuf> {
    start
        .as_ref()
        .ancestors()
        .map(|dir| dir.join(SETTINGS_FILE_NAME))
        .find(|candidate| candidate.is_file())
}
