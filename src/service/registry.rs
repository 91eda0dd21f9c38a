use super::extractors::{self, Extractor};
use super::{ServiceBinding, ServiceInfo, ServiceKind};
use crate::error::Result;
use std::collections::HashMap;

/// Lookup table from service kind to its extractor
#[derive(Clone)]
pub struct ExtractorRegistry {
    extractors: HashMap<ServiceKind, Extractor>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        for kind in ServiceKind::all_variants() {
            let extractor: Extractor = match kind {
                ServiceKind::Mysql => extractors::extract_mysql,
                ServiceKind::Postgresql => extractors::extract_postgresql,
                ServiceKind::Redis => extractors::extract_redis,
                ServiceKind::MongoDb => extractors::extract_mongodb,
                ServiceKind::RabbitMq => extractors::extract_rabbitmq,
                ServiceKind::Custom(_) => continue,
            };
            registry.register(kind.clone(), extractor);
        }

        registry
    }

    /// Registers or replaces the extractor for a kind
    pub fn register(&mut self, kind: ServiceKind, extractor: Extractor) {
        self.extractors.insert(kind, extractor);
    }

    pub fn get(&self, kind: &ServiceKind) -> Option<Extractor> {
        self.extractors.get(kind).copied()
    }

    pub fn supports(&self, kind: &ServiceKind) -> bool {
        self.extractors.contains_key(kind)
    }

    /// First discriminator (label, category, then tags) naming a registered kind
    pub fn resolve(&self, binding: &ServiceBinding<'_>) -> Option<ServiceKind> {
        binding
            .discriminators()
            .map(ServiceKind::from_label)
            .find(|kind| self.supports(kind))
    }

    /// Resolves the binding's kind and runs its extractor.
    ///
    /// Returns `None` when no discriminator names a registered kind.
    pub fn extract(&self, binding: &ServiceBinding<'_>) -> Option<Result<ServiceInfo>> {
        let kind = self.resolve(binding)?;
        let extractor = self.get(&kind)?;
        Some(extractor(binding))
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<&str> = self.extractors.keys().map(ServiceKind::name).collect();
        kinds.sort_unstable();
        f.debug_struct("ExtractorRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}
