use crate::{Model, Result, TypeDescriptor, TypeShape};

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, Mutex, OnceLock, PoisonError, RwLock},
};

/// Registry of [`TypeDescriptor`]s keyed by type identity.
///
/// Descriptors are built lazily, at most once per type, and shared as `Arc`s. Concurrent
/// first uses of the same type wait on that type's build; distinct types build
/// independently. A failed build is not remembered, so the next use tries again.
///
/// One cache is normally created at startup and shared by every [`Mapper`](crate::Mapper);
/// tests can create their own.
#[derive(Debug, Default)]
pub struct TypeCache {
    slots: RwLock<HashMap<TypeId, Arc<Slot>>>,
}

#[derive(Debug, Default)]
struct Slot {
    descriptor: OnceLock<Arc<TypeDescriptor>>,

    /// Held while building, so only one caller runs `Model::shape` and the build
    build: Mutex<()>,
}

impl TypeCache {
    pub fn new() -> TypeCache {
        TypeCache::default()
    }

    /// Returns the descriptor for `M`, building it on first use.
    pub fn register<M: Model>(&self) -> Result<Arc<TypeDescriptor>> {
        self.get_or_build(TypeId::of::<M>(), M::shape)
    }

    /// Returns the descriptor for `M` if it has already been built. Never builds.
    pub fn lookup<M: Model>(&self) -> Option<Arc<TypeDescriptor>> {
        self.get(TypeId::of::<M>())
    }

    /// Number of types with a built descriptor.
    pub fn len(&self) -> usize {
        self.read_slots()
            .values()
            .filter(|slot| slot.descriptor.get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn get(&self, id: TypeId) -> Option<Arc<TypeDescriptor>> {
        self.read_slots().get(&id)?.descriptor.get().cloned()
    }

    pub(crate) fn get_or_build(
        &self,
        id: TypeId,
        shape: impl FnOnce() -> TypeShape,
    ) -> Result<Arc<TypeDescriptor>> {
        if let Some(descriptor) = self.get(id) {
            return Ok(descriptor);
        }

        let slot = self
            .slots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(id)
            .or_default()
            .clone();

        let _build = slot.build.lock().unwrap_or_else(PoisonError::into_inner);

        // Another caller may have finished the build while we waited
        if let Some(descriptor) = slot.descriptor.get() {
            return Ok(descriptor.clone());
        }

        let shape = shape();
        let descriptor = Arc::new(TypeDescriptor::from_shape(&shape)?);

        tracing::debug!(
            type_name = shape.name,
            fields = descriptor.len(),
            "built type descriptor"
        );

        Ok(slot.descriptor.get_or_init(|| descriptor).clone())
    }

    fn read_slots(&self) -> std::sync::RwLockReadGuard<'_, HashMap<TypeId, Arc<Slot>>> {
        self.slots.read().unwrap_or_else(PoisonError::into_inner)
    }
}
