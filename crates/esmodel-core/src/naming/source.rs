use std::{fmt, sync::Arc};

///
/// NameSource
///
/// An explicitly recorded name. `Dynamic` sources are evaluated on every
/// lookup, which lets a model target e.g. a per-period index.
///

#[derive(Clone)]
pub enum NameSource {
    Static(String),
    Dynamic(Arc<dyn Fn() -> String + Send + Sync>),
}

impl NameSource {
    pub fn dynamic(f: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self::Dynamic(Arc::new(f))
    }

    #[must_use]
    pub fn evaluate(&self) -> String {
        match self {
            Self::Static(value) => value.clone(),
            Self::Dynamic(f) => f(),
        }
    }

    #[must_use]
    /// The recorded value, when it is known without evaluation.
    pub fn as_static(&self) -> Option<&str> {
        match self {
            Self::Static(value) => Some(value),
            Self::Dynamic(_) => None,
        }
    }

    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }
}

impl fmt::Debug for NameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<&str> for NameSource {
    fn from(value: &str) -> Self {
        Self::Static(value.to_string())
    }
}

impl From<String> for NameSource {
    fn from(value: String) -> Self {
        Self::Static(value)
    }
}
