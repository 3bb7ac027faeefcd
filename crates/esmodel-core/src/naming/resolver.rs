use crate::{
    DEFAULT_DOCUMENT_TYPE,
    model::ModelDescriptor,
    naming::{NameKind, NameOrigin, NameSource, NamingConfig, ResolvedName},
    obs::sink::{self, MetricsEvent, OriginKind},
    traits::ModelKind,
};
use std::collections::BTreeMap;
use tracing::debug;

///
/// ExplicitNaming
/// Values recorded against exactly one model.
///

#[derive(Clone, Debug, Default)]
struct ExplicitNaming {
    index_name: Option<NameSource>,
    document_type: Option<NameSource>,
}

impl ExplicitNaming {
    const fn get(&self, kind: NameKind) -> Option<&NameSource> {
        match kind {
            NameKind::IndexName => self.index_name.as_ref(),
            NameKind::DocumentType => self.document_type.as_ref(),
        }
    }

    const fn slot_mut(&mut self, kind: NameKind) -> &mut Option<NameSource> {
        match kind {
            NameKind::IndexName => &mut self.index_name,
            NameKind::DocumentType => &mut self.document_type,
        }
    }
}

///
/// RegistryEntry
///

#[derive(Clone, Debug)]
struct RegistryEntry {
    model: ModelDescriptor,
    naming: ExplicitNaming,
}

///
/// NamingResolver
///
/// Registry of explicitly recorded names plus the configuration that decides
/// how unset names fall back. Values are keyed by model path and are never
/// copied onto descendants; inheritance happens only at lookup time.
///

#[derive(Clone, Debug, Default)]
pub struct NamingResolver {
    config: NamingConfig,
    entries: BTreeMap<&'static str, RegistryEntry>,
}

impl NamingResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_config(config: NamingConfig) -> Self {
        Self {
            config,
            entries: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> NamingConfig {
        self.config
    }

    /// Replace the configuration, returning the previous one.
    pub const fn set_config(&mut self, config: NamingConfig) -> NamingConfig {
        std::mem::replace(&mut self.config, config)
    }

    #[must_use]
    pub const fn inheritance_enabled(&self) -> bool {
        self.config.inheritance_enabled
    }

    pub const fn set_inheritance_enabled(&mut self, enabled: bool) -> bool {
        let prev = self.config.inheritance_enabled;
        self.config.inheritance_enabled = enabled;

        prev
    }

    /// Make a model known to the registry without recording any names.
    pub fn register(&mut self, model: &ModelDescriptor) {
        self.entry_mut(model);
    }

    /// Registered model descriptors, ordered by path.
    pub fn models(&self) -> impl Iterator<Item = &ModelDescriptor> {
        self.entries.values().map(|entry| &entry.model)
    }

    /// The descriptor registered under a path, if any.
    #[must_use]
    pub fn model(&self, path: &str) -> Option<&ModelDescriptor> {
        self.entries.get(path).map(|entry| &entry.model)
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    pub fn set_index_name(&mut self, model: &ModelDescriptor, value: impl Into<NameSource>) {
        self.assign(NameKind::IndexName, model, value.into());
    }

    pub fn set_document_type(&mut self, model: &ModelDescriptor, value: impl Into<NameSource>) {
        self.assign(NameKind::DocumentType, model, value.into());
    }

    pub fn set_index_name_with(
        &mut self,
        model: &ModelDescriptor,
        f: impl Fn() -> String + Send + Sync + 'static,
    ) {
        self.assign(NameKind::IndexName, model, NameSource::dynamic(f));
    }

    pub fn set_document_type_with(
        &mut self,
        model: &ModelDescriptor,
        f: impl Fn() -> String + Send + Sync + 'static,
    ) {
        self.assign(NameKind::DocumentType, model, NameSource::dynamic(f));
    }

    pub fn set_index_name_of<T: ModelKind>(&mut self, value: impl Into<NameSource>) {
        self.set_index_name(&T::MODEL, value);
    }

    pub fn set_document_type_of<T: ModelKind>(&mut self, value: impl Into<NameSource>) {
        self.set_document_type(&T::MODEL, value);
    }

    pub fn clear_index_name(&mut self, model: &ModelDescriptor) -> Option<NameSource> {
        self.clear(NameKind::IndexName, model)
    }

    pub fn clear_document_type(&mut self, model: &ModelDescriptor) -> Option<NameSource> {
        self.clear(NameKind::DocumentType, model)
    }

    fn assign(&mut self, kind: NameKind, model: &ModelDescriptor, source: NameSource) {
        debug!(target: "esmodel.naming", model = model.path, %kind, ?source, "assign");

        *self.entry_mut(model).naming.slot_mut(kind) = Some(source);
        sink::record(MetricsEvent::NameAssigned {
            kind,
            model_path: model.path,
        });
    }

    fn clear(&mut self, kind: NameKind, model: &ModelDescriptor) -> Option<NameSource> {
        let prev = self
            .entries
            .get_mut(model.path)
            .and_then(|entry| entry.naming.slot_mut(kind).take());

        if prev.is_some() {
            debug!(target: "esmodel.naming", model = model.path, %kind, "clear");
            sink::record(MetricsEvent::NameCleared {
                kind,
                model_path: model.path,
            });
        }

        prev
    }

    fn entry_mut(&mut self, model: &ModelDescriptor) -> &mut RegistryEntry {
        // keep the most recently declared ancestor chain
        self.entries
            .entry(model.path)
            .and_modify(|entry| entry.model = *model)
            .or_insert_with(|| RegistryEntry {
                model: *model,
                naming: ExplicitNaming::default(),
            })
    }

    // ------------------------------------------------------------------
    // Explicit lookups (no fallback)
    // ------------------------------------------------------------------

    #[must_use]
    pub fn explicit_index_name(&self, model: &ModelDescriptor) -> Option<&NameSource> {
        self.explicit(NameKind::IndexName, model.path)
    }

    #[must_use]
    pub fn explicit_document_type(&self, model: &ModelDescriptor) -> Option<&NameSource> {
        self.explicit(NameKind::DocumentType, model.path)
    }

    #[must_use]
    pub fn explicit(&self, kind: NameKind, path: &str) -> Option<&NameSource> {
        self.entries
            .get(path)
            .and_then(|entry| entry.naming.get(kind))
    }

    // ------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------

    #[must_use]
    pub fn index_name(&self, model: &ModelDescriptor) -> String {
        self.resolve_index_name(model).into_value()
    }

    #[must_use]
    pub fn document_type(&self, model: &ModelDescriptor) -> String {
        self.resolve_document_type(model).into_value()
    }

    #[must_use]
    pub fn index_name_of<T: ModelKind>(&self) -> String {
        self.index_name(&T::MODEL)
    }

    #[must_use]
    pub fn document_type_of<T: ModelKind>(&self) -> String {
        self.document_type(&T::MODEL)
    }

    #[must_use]
    pub fn index_name_for<T: ModelKind>(&self, instance: &T) -> String {
        self.resolve_index_name_for(instance).into_value()
    }

    #[must_use]
    pub fn document_type_for<T: ModelKind>(&self, instance: &T) -> String {
        self.resolve_document_type_for(instance).into_value()
    }

    #[must_use]
    pub fn resolve_index_name(&self, model: &ModelDescriptor) -> ResolvedName {
        self.resolve(NameKind::IndexName, model)
    }

    #[must_use]
    pub fn resolve_document_type(&self, model: &ModelDescriptor) -> ResolvedName {
        self.resolve(NameKind::DocumentType, model)
    }

    #[must_use]
    pub fn resolve_index_name_for<T: ModelKind>(&self, instance: &T) -> ResolvedName {
        match instance.index_name_override() {
            Some(value) => Self::instance_resolved(NameKind::IndexName, &T::MODEL, value),
            None => self.resolve(NameKind::IndexName, &T::MODEL),
        }
    }

    #[must_use]
    pub fn resolve_document_type_for<T: ModelKind>(&self, instance: &T) -> ResolvedName {
        match instance.document_type_override() {
            Some(value) => Self::instance_resolved(NameKind::DocumentType, &T::MODEL, value),
            None => self.resolve(NameKind::DocumentType, &T::MODEL),
        }
    }

    /// Resolve one name for a model, recording which rule produced it.
    #[must_use]
    pub fn resolve(&self, kind: NameKind, model: &ModelDescriptor) -> ResolvedName {
        let resolved = self.lookup(kind, model);

        sink::record(MetricsEvent::NameResolved {
            kind,
            origin: OriginKind::from(&resolved.origin),
            model_path: model.path,
        });

        resolved
    }

    fn instance_resolved(kind: NameKind, model: &ModelDescriptor, value: &str) -> ResolvedName {
        sink::record(MetricsEvent::NameResolved {
            kind,
            origin: OriginKind::Instance,
            model_path: model.path,
        });

        ResolvedName::new(value.to_string(), NameOrigin::Instance)
    }

    fn lookup(&self, kind: NameKind, model: &ModelDescriptor) -> ResolvedName {
        if let Some(source) = self.explicit(kind, model.path) {
            return ResolvedName::new(source.evaluate(), NameOrigin::Explicit);
        }

        if self.config.inheritance_enabled {
            for ancestor in model.lineage() {
                if let Some(source) = self.explicit(kind, ancestor.path) {
                    debug!(
                        target: "esmodel.naming",
                        model = model.path,
                        %kind,
                        from = ancestor.path,
                        "inherited"
                    );

                    return ResolvedName::new(
                        source.evaluate(),
                        NameOrigin::Inherited {
                            from: ancestor.path,
                        },
                    );
                }
            }
        }

        let value = match kind {
            NameKind::IndexName => model.default_index_name(),
            NameKind::DocumentType => DEFAULT_DOCUMENT_TYPE.to_string(),
        };

        ResolvedName::new(value, NameOrigin::Default)
    }
}
