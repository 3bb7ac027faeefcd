use crate::model::ModelDescriptor;

// ============================================================================
// FOUNDATIONAL KINDS
// ============================================================================
//
// These traits define *what* a model is called and where it sits in its
// hierarchy, not what data it contains.
//

///
/// Path
/// Fully-qualified model path.
///

pub trait Path {
    const PATH: &'static str;
}

///
/// ModelKind
///
/// A model type that can be mapped to a search index.
///
/// The provided override methods let a single instance target a different
/// index or document type than its type would resolve to. They return `None`
/// by default, in which case instance and type resolution agree.
///

pub trait ModelKind: Path {
    const MODEL: ModelDescriptor;

    fn index_name_override(&self) -> Option<&str> {
        None
    }

    fn document_type_override(&self) -> Option<&str> {
        None
    }
}
