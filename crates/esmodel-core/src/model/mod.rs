//! Runtime model descriptors.
//!
//! A descriptor is the only thing the resolver knows about a model: its
//! fully-qualified path and links to the descriptors of its declared
//! ancestors, nearest first. Nothing here introspects the Rust type system;
//! the links are declared, and the full chain is followed through them.

use crate::inflect;
use serde::Serialize;
use std::{
    collections::{BTreeSet, VecDeque},
    fmt::{self, Display},
};

///
/// ModelDescriptor
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct ModelDescriptor {
    /// Fully-qualified `::`-separated path (e.g. `app::zoo::Dog`).
    pub path: &'static str,
    /// Declared ancestors, nearest first. Their own ancestors need not be
    /// repeated here; `lineage` follows the links.
    pub ancestors: &'static [&'static Self],
}

impl ModelDescriptor {
    #[must_use]
    pub const fn new(path: &'static str, ancestors: &'static [&'static Self]) -> Self {
        Self { path, ancestors }
    }

    #[must_use]
    /// Unqualified type name: the last path segment.
    pub fn name(&self) -> &'static str {
        self.path.rsplit("::").next().unwrap_or(self.path)
    }

    #[must_use]
    /// Namespace segments preceding the type name, if any.
    pub fn namespace(&self) -> Option<&'static str> {
        self.path.rsplit_once("::").map(|(ns, _)| ns)
    }

    #[must_use]
    pub const fn parent(&self) -> Option<&'static str> {
        match self.ancestors {
            [first, ..] => Some(first.path),
            [] => None,
        }
    }

    /// Every ancestor reachable through the declared links, each path once.
    ///
    /// The declared list comes first in order; ancestors of ancestors follow
    /// breadth-first, so a nearer ancestor always precedes a farther one.
    #[must_use]
    pub fn lineage(&self) -> Vec<&'static Self> {
        let mut seen = BTreeSet::new();
        let mut pending = self.ancestors.iter().copied().collect::<VecDeque<_>>();
        let mut lineage = Vec::new();

        while let Some(ancestor) = pending.pop_front() {
            if !seen.insert(ancestor.path) {
                continue;
            }

            lineage.push(ancestor);
            pending.extend(ancestor.ancestors.iter().copied());
        }

        lineage
    }

    #[must_use]
    pub fn descends_from(&self, path: &str) -> bool {
        self.lineage().iter().any(|ancestor| ancestor.path == path)
    }

    #[must_use]
    /// Index name derived from the unqualified type name.
    pub fn default_index_name(&self) -> String {
        inflect::default_index_name(self.name())
    }
}

impl Display for ModelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        for ancestor in self.lineage() {
            write!(f, " < {}", ancestor.path)?;
        }

        Ok(())
    }
}
