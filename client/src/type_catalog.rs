//! Generation-versioned type lookups

use std::sync::Arc;

use futures_util::future::try_join_all;
use typedex_battle::{Generation, Type, TypeSlot, VersionedRecord};

use crate::cache::{EntityCache, Tagged};
use crate::error::Result;
use crate::service::CatalogService;

/// Resolves type names to their full damage-relation history.
///
/// Each type is fetched from the catalog at most once per cache lifetime.
pub struct TypeCatalog<C> {
    catalog: Arc<C>,
    cache: EntityCache<VersionedRecord<Type>>,
}

impl<C: CatalogService> TypeCatalog<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            cache: EntityCache::new(),
        }
    }

    async fn build(&self, name: &str) -> Result<VersionedRecord<Type>> {
        let raw = self.catalog.fetch_type(name).await?;
        let versions = Type::versions_from_protocol(&raw)?;
        tracing::debug!(
            name,
            changes = versions.generations().count() - 1,
            earliest = %versions.latest().earliest_generation,
            "Built type versions"
        );
        Ok(versions)
    }

    /// Every snapshot of a type
    pub async fn versions(&self, name: &str) -> Result<VersionedRecord<Type>> {
        self.cache.get_or_build(name, || self.build(name)).await
    }

    /// Every snapshot of a species' type, tagged with whether it is primary
    pub async fn versions_for_slot(
        &self,
        slot: &TypeSlot,
    ) -> Result<Tagged<VersionedRecord<Type>, bool>> {
        self.cache
            .get_tagged(&slot.name, slot.primary, || self.build(&slot.name))
            .await
    }

    /// The snapshot of a type governing `generation`
    pub async fn at_generation(&self, name: &str, generation: Generation) -> Result<Type> {
        Ok(self.versions(name).await?.into_at(generation))
    }

    /// Load every named type concurrently so later lookups are cache hits
    pub async fn warm<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<()> {
        try_join_all(names.into_iter().map(|name| self.versions(name))).await?;
        Ok(())
    }

    /// Cached snapshots of a type, if it has been loaded
    pub fn cached(&self, name: &str) -> Option<VersionedRecord<Type>> {
        self.cache.peek(name)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&self) {
        self.cache.clear();
    }
}
