use serde::Serialize;
use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Route-aware error aggregation. Messages recorded at the root apply to the
/// whole registry; child trees are keyed by model path.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ErrorTree {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, ErrorTree>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
            children: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, message: impl ToString) {
        self.messages.push(message.to_string());
    }

    /// Record a message under a route (usually a model path).
    pub fn add_for(&mut self, route: impl Into<String>, message: impl ToString) {
        self.children
            .entry(route.into())
            .or_default()
            .add(message);
    }

    /// Merge a child tree under a route; empty trees are dropped.
    pub fn merge_for(&mut self, route: impl Into<String>, other: Self) {
        if other.is_empty() {
            return;
        }

        let entry = self.children.entry(route.into()).or_default();
        entry.messages.extend(other.messages);
        for (child_route, child) in other.children {
            entry.merge_for(child_route, child);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of messages in this tree and all children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Flatten into `(route, message)` pairs; root messages have an empty route.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);

        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for message in &self.messages {
            out.push((prefix.to_string(), message.clone()));
        }

        for (route, child) in &self.children {
            let route = if prefix.is_empty() {
                route.clone()
            } else {
                format!("{prefix}.{route}")
            };
            child.flatten_into(&route, out);
        }
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .flatten()
            .into_iter()
            .map(|(route, message)| {
                if route.is_empty() {
                    message
                } else {
                    format!("{route}: {message}")
                }
            })
            .collect::<Vec<_>>();

        write!(f, "{}", lines.join("\n"))
    }
}

impl std::error::Error for ErrorTree {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_is_ok() {
        assert!(ErrorTree::new().result().is_ok());
    }

    #[test]
    fn routed_messages_flatten_with_route_prefix() {
        let mut errs = ErrorTree::new();
        errs.add("registry problem");
        errs.add_for("app::Dog", "bad index name");

        let mut nested = ErrorTree::new();
        nested.add_for("ancestors", "duplicate ancestor");
        errs.merge_for("app::Cat", nested);

        assert_eq!(errs.len(), 3);
        assert_eq!(
            errs.flatten(),
            vec![
                (String::new(), "registry problem".to_string()),
                ("app::Cat.ancestors".to_string(), "duplicate ancestor".to_string()),
                ("app::Dog".to_string(), "bad index name".to_string()),
            ]
        );
        assert_eq!(
            errs.to_string(),
            "registry problem\napp::Cat.ancestors: duplicate ancestor\napp::Dog: bad index name"
        );
    }

    #[test]
    fn merging_empty_tree_adds_no_route() {
        let mut errs = ErrorTree::new();
        errs.merge_for("app::Dog", ErrorTree::new());

        assert!(errs.children.is_empty());
        assert!(errs.result().is_ok());
    }
}
