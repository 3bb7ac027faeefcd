//! Core runtime for esmodel: model descriptors, naming resolution,
//! inflection, observability and registry validation.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

// public exports are one module level down
pub mod error;
pub mod inflect;
pub mod model;
pub mod naming;
pub mod obs;
pub mod traits;
pub mod validate;

///
/// CONSTANTS
///

/// Document type used when neither the model nor an ancestor declares one.
pub const DEFAULT_DOCUMENT_TYPE: &str = "_doc";

/// Maximum byte length the search engine accepts for an index name.
pub const MAX_INDEX_NAME_LEN: usize = 255;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or validators are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::ModelDescriptor,
        naming::{NameOrigin, NameSource, NamingConfig, NamingResolver, ResolvedName},
        traits::{ModelKind, Path},
    };
}

/// re-exports used by the `model!` macro
#[doc(hidden)]
pub mod __reexports {
    pub use crate::{model::ModelDescriptor, traits::ModelKind, traits::Path};
}
