//! ## Crate layout
//! - `core`: model descriptors, naming resolution, inflection, observability
//!   and registry validation.
//! - `config`: settings file loading.
//!
//! The `prelude` module re-exports the vocabulary needed to declare models
//! and resolve their index names and document types.

pub use esmodel_config as config;
pub use esmodel_core as core;

pub use esmodel_core::{DEFAULT_DOCUMENT_TYPE, err, model};

use esmodel_config::{ConfigError, Settings};
use esmodel_core::{
    naming::{NamingConfig, NamingResolver},
    validate::ValidateError,
};
use std::path::Path;
use thiserror::Error as ThisError;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    ValidateError(#[from] ValidateError),
}

/// Project loaded settings onto the resolver configuration.
#[must_use]
pub const fn naming_config(settings: &Settings) -> NamingConfig {
    NamingConfig::new(settings.naming.inheritance_enabled)
}

/// Build an empty resolver configured from settings.
#[must_use]
pub const fn resolver_from_settings(settings: &Settings) -> NamingResolver {
    NamingResolver::with_config(naming_config(settings))
}

/// Load a settings file and build a resolver from it.
pub fn load_resolver(path: impl AsRef<Path>) -> Result<NamingResolver, Error> {
    let settings = esmodel_config::load_settings(path)?;

    Ok(resolver_from_settings(&settings))
}

/// Validate a populated resolver, surfacing problems as the facade error.
pub fn validate(resolver: &NamingResolver) -> Result<(), Error> {
    esmodel_core::validate::validate_naming(resolver)?;

    Ok(())
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        model::ModelDescriptor,
        naming::{NameOrigin, NameSource, NamingConfig, NamingResolver, ResolvedName},
        traits::{ModelKind, Path as _},
    };
    pub use crate::model;
}
