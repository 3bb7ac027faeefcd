use crate::{
    DEFAULT_DOCUMENT_TYPE, MAX_INDEX_NAME_LEN, error::ErrorTree, model::ModelDescriptor,
};

/// Characters the search engine rejects anywhere in an index name.
const FORBIDDEN_INDEX_CHARS: &[char] = &['\\', '/', '*', '?', '"', '<', '>', '|', ' ', ',', '#'];

/// Ensure a static index name is accepted by the search engine.
pub(crate) fn validate_index_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("index name is empty".to_string());
    }
    if name.len() > MAX_INDEX_NAME_LEN {
        return Err(format!(
            "index name '{name}' exceeds max length {MAX_INDEX_NAME_LEN}"
        ));
    }
    if matches!(name, "." | "..") {
        return Err(format!("index name '{name}' is reserved"));
    }
    if name.starts_with(['-', '_', '+']) {
        return Err(format!(
            "index name '{name}' must not start with '-', '_' or '+'"
        ));
    }
    if name.chars().any(|c| c.is_uppercase()) {
        return Err(format!("index name '{name}' must be lowercase"));
    }
    if let Some(c) = name.chars().find(|c| FORBIDDEN_INDEX_CHARS.contains(c)) {
        return Err(format!("index name '{name}' contains forbidden character '{c}'"));
    }

    Ok(())
}

/// Ensure a static document type is non-empty and not a reserved `_` name.
pub(crate) fn validate_document_type(doc_type: &str) -> Result<(), String> {
    if doc_type.is_empty() {
        return Err("document type is empty".to_string());
    }
    if doc_type.starts_with('_') && doc_type != DEFAULT_DOCUMENT_TYPE {
        return Err(format!(
            "document type '{doc_type}' must not start with '_' (only '{DEFAULT_DOCUMENT_TYPE}' is allowed)"
        ));
    }

    Ok(())
}

/// Ensure a model path is usable and its ancestor chain is well-formed.
pub(crate) fn validate_chain(model: &ModelDescriptor, errs: &mut ErrorTree) {
    let path = model.path;
    if path.is_empty() || path.split("::").any(str::is_empty) {
        err!(errs, "model path '{path}' has an empty segment");
    }

    for (i, ancestor) in model.ancestors.iter().enumerate() {
        if model.ancestors[..i].iter().any(|a| a.path == ancestor.path) {
            err!(errs, "ancestor '{}' is listed more than once", ancestor.path);
        }
    }

    if model.descends_from(path) {
        err!(errs, "model lists itself as an ancestor");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_conventional_index_names() {
        for name in ["mammals", "test_bases", "logs-2024.01", "cats+dogs"] {
            assert!(validate_index_name(name).is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn rejects_invalid_index_names() {
        let long = "a".repeat(MAX_INDEX_NAME_LEN + 1);
        for name in [
            "", ".", "..", "-logs", "_logs", "+logs", "Mammals", "a b", "a,b", "a#b", "a/b",
            "a*b", long.as_str(),
        ] {
            assert!(validate_index_name(name).is_err(), "{name} should be rejected");
        }
    }

    #[test]
    fn document_type_rules() {
        assert!(validate_document_type("mammal").is_ok());
        assert!(validate_document_type(DEFAULT_DOCUMENT_TYPE).is_ok());
        assert!(validate_document_type("").is_err());
        assert!(validate_document_type("_mammal").is_err());
    }

    #[test]
    fn chain_rules() {
        const ANIMAL: ModelDescriptor = ModelDescriptor::new("app::Animal", &[]);
        const DOG: ModelDescriptor = ModelDescriptor::new("app::Dog", &[&ANIMAL]);
        const PUPPY: ModelDescriptor = ModelDescriptor::new("app::Puppy", &[&DOG]);
        const TWICE: ModelDescriptor = ModelDescriptor::new("app::Twice", &[&ANIMAL, &ANIMAL]);
        const SHADOW: ModelDescriptor = ModelDescriptor::new("app::Animal", &[&DOG]);
        const BLANK: ModelDescriptor = ModelDescriptor::new("app::::Dog", &[]);

        let mut errs = ErrorTree::new();
        validate_chain(&DOG, &mut errs);
        validate_chain(&PUPPY, &mut errs);
        assert!(errs.is_empty());

        validate_chain(&TWICE, &mut errs);
        validate_chain(&SHADOW, &mut errs);
        validate_chain(&BLANK, &mut errs);
        assert_eq!(errs.len(), 3);
    }
}
