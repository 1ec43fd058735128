use super::Mapper;
use crate::{Model, Result, TypeCache, TypeDescriptor};

use std::sync::Arc;

type Register = fn(&TypeCache) -> Result<Arc<TypeDescriptor>>;

#[derive(Default)]
pub struct Builder {
    /// Cache shared with other mappers, if any
    cache: Option<Arc<TypeCache>>,

    /// Types to register when the mapper is built
    registrations: Vec<Register>,
}

impl Builder {
    /// Registers `M` eagerly when the mapper is built, so mapping errors surface at
    /// startup instead of on first query.
    pub fn register<M: Model>(&mut self) -> &mut Self {
        self.registrations.push(TypeCache::register::<M>);
        self
    }

    /// Use `cache` instead of a fresh one.
    pub fn cache(&mut self, cache: Arc<TypeCache>) -> &mut Self {
        self.cache = Some(cache);
        self
    }

    pub fn build(&mut self) -> Result<Mapper> {
        let cache = self.cache.clone().unwrap_or_default();

        for register in &self.registrations {
            register(&cache)?;
        }

        tracing::debug!(types = self.registrations.len(), "built mapper");

        Ok(Mapper { cache })
    }
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("cache", &self.cache)
            .field("registrations", &self.registrations.len())
            .finish()
    }
}
