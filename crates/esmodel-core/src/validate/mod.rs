//! Registry validation.
//!
//! Lookups never fail; this lint exists so callers can check a registry
//! before pointing it at a real cluster.

pub(crate) mod naming;

use crate::{
    error::ErrorTree,
    naming::{NameSource, NamingResolver},
};
use thiserror::Error as ThisError;

///
/// ValidateError
///

#[derive(Debug, ThisError)]
pub enum ValidateError {
    #[error("naming validation failed:\n{0}")]
    Validation(ErrorTree),
}

/// Validate every registered model and every static name recorded against it.
/// Dynamic names are skipped: their value is only known at lookup time.
pub fn validate_naming(resolver: &NamingResolver) -> Result<(), ValidateError> {
    let mut errors = ErrorTree::new();

    for model in resolver.models() {
        let mut errs = ErrorTree::new();

        naming::validate_chain(model, &mut errs);

        for ancestor in model.lineage() {
            if ancestor.path != model.path
                && let Some(registered) = resolver.model(ancestor.path)
                && registered != ancestor
            {
                err!(
                    errs,
                    "ancestor '{}' is registered with a different chain",
                    ancestor.path
                );
            }
        }

        if let Some(name) = resolver
            .explicit_index_name(model)
            .and_then(NameSource::as_static)
            && let Err(e) = naming::validate_index_name(name)
        {
            errs.add(e);
        }

        if let Some(doc_type) = resolver
            .explicit_document_type(model)
            .and_then(NameSource::as_static)
            && let Err(e) = naming::validate_document_type(doc_type)
        {
            errs.add(e);
        }

        errors.merge_for(model.path, errs);
    }

    errors.result().map_err(ValidateError::Validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelDescriptor;

    const ANIMAL: ModelDescriptor = ModelDescriptor::new("zoo::Animal", &[]);
    const DOG: ModelDescriptor = ModelDescriptor::new("zoo::Dog", &[&ANIMAL]);
    const LOOP_ROOT: ModelDescriptor = ModelDescriptor::new("zoo::Loop", &[]);
    const LOOP: ModelDescriptor = ModelDescriptor::new("zoo::Loop", &[&LOOP_ROOT]);
    const PUPPY: ModelDescriptor = ModelDescriptor::new("zoo::Puppy", &[&DOG]);
    const STRAY_DOG: ModelDescriptor = ModelDescriptor::new("zoo::Dog", &[]);

    #[test]
    fn clean_registry_passes() {
        let mut resolver = NamingResolver::new();
        resolver.set_index_name(&ANIMAL, "mammals");
        resolver.set_document_type(&ANIMAL, "mammal");
        resolver.register(&DOG);

        assert!(validate_naming(&resolver).is_ok());
    }

    #[test]
    fn errors_are_routed_by_model_path() {
        let mut resolver = NamingResolver::new();
        resolver.set_index_name(&ANIMAL, "Mammals");
        resolver.set_document_type(&DOG, "_dog");
        resolver.register(&LOOP);

        let ValidateError::Validation(tree) =
            validate_naming(&resolver).expect_err("registry should be rejected");

        let routes = tree
            .flatten()
            .into_iter()
            .map(|(route, _)| route)
            .collect::<Vec<_>>();
        assert_eq!(routes, vec!["zoo::Animal", "zoo::Dog", "zoo::Loop"]);
    }

    #[test]
    fn parent_only_declarations_pass() {
        let mut resolver = NamingResolver::new();
        resolver.set_index_name(&ANIMAL, "mammals");
        resolver.register(&DOG);
        resolver.register(&PUPPY);

        assert!(validate_naming(&resolver).is_ok());
    }

    #[test]
    fn ancestor_registered_with_another_chain_is_rejected() {
        let mut resolver = NamingResolver::new();
        resolver.set_index_name(&ANIMAL, "mammals");
        resolver.register(&STRAY_DOG);
        resolver.register(&PUPPY);

        let ValidateError::Validation(tree) =
            validate_naming(&resolver).expect_err("mismatched chain should be rejected");

        assert_eq!(
            tree.flatten(),
            vec![(
                "zoo::Puppy".to_string(),
                "ancestor 'zoo::Dog' is registered with a different chain".to_string()
            )]
        );
    }

    #[test]
    fn dynamic_names_are_not_validated() {
        let mut resolver = NamingResolver::new();
        resolver.set_index_name_with(&ANIMAL, || "Not Valid".to_string());

        assert!(validate_naming(&resolver).is_ok());
    }
}
