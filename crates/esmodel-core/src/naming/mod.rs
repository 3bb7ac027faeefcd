//! Index name and document type resolution.
//!
//! Lookup order for a model with no instance override:
//! - the value recorded against exactly that model
//! - with inheritance enabled, the value recorded against the nearest ancestor
//! - the derived default (pluralized snake-case name, or `_doc`)

mod resolver;
mod source;


use derive_more::Display;
use serde::Serialize;

// re-exports
pub use resolver::NamingResolver;
pub use source::NameSource;

///
/// NamingConfig
///
/// Resolver configuration. Owned by each resolver instead of living in a
/// process-wide global, so independent resolvers never observe each other.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct NamingConfig {
    /// Fall back to the nearest explicitly-named ancestor before the default.
    pub inheritance_enabled: bool,
}

impl NamingConfig {
    #[must_use]
    pub const fn new(inheritance_enabled: bool) -> Self {
        Self {
            inheritance_enabled,
        }
    }

    #[must_use]
    pub const fn inheriting() -> Self {
        Self::new(true)
    }
}

///
/// NameKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
pub enum NameKind {
    #[display("document_type")]
    DocumentType,
    #[display("index_name")]
    IndexName,
}

///
/// NameOrigin
/// Which lookup rule produced a resolved name.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum NameOrigin {
    /// Derived from the model itself (or the `_doc` constant).
    Default,
    /// Recorded against exactly this model.
    Explicit,
    /// Recorded against an ancestor; carries the ancestor's path.
    Inherited { from: &'static str },
    /// Supplied by the instance through `ModelKind` overrides.
    Instance,
}

impl NameOrigin {
    #[must_use]
    pub const fn is_inherited(&self) -> bool {
        matches!(self, Self::Inherited { .. })
    }
}

///
/// ResolvedName
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ResolvedName {
    pub value: String,
    pub origin: NameOrigin,
}

impl ResolvedName {
    #[must_use]
    pub const fn new(value: String, origin: NameOrigin) -> Self {
        Self { value, origin }
    }

    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }
}
