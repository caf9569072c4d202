//! Species assembly from raw catalog records

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use futures_util::{StreamExt, TryStreamExt, stream};
use typedex_battle::{Generation, MoveLevels, Species, VersionedRecord, referenced_type_names};
use typedex_protocol::RawSpecies;

use crate::cache::EntityCache;
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::service::CatalogService;
use crate::type_catalog::TypeCatalog;

/// Builds [`Species`] values, resolving version groups through its own cache
pub struct SpeciesAssembler<C> {
    catalog: Arc<C>,
    config: CatalogConfig,
    version_groups: EntityCache<Generation>,
}

impl<C: CatalogService> SpeciesAssembler<C> {
    pub fn new(catalog: Arc<C>, config: CatalogConfig) -> Self {
        Self {
            catalog,
            config,
            version_groups: EntityCache::new(),
        }
    }

    /// Fetch and assemble one species.
    ///
    /// Every referenced type is loaded into `types` and every version group is
    /// resolved before the species is returned. Any failure aborts assembly.
    pub async fn assemble(&self, id_or_name: &str, types: &TypeCatalog<C>) -> Result<Species> {
        let raw = self.catalog.fetch_species(id_or_name).await?;

        let type_versions = Species::type_versions_from_protocol(&raw.types, &raw.past_types)?;
        let type_names = referenced_type_names(&type_versions);

        let ((), move_versions) = futures_util::try_join!(
            types.warm(type_names.iter().copied()),
            self.move_versions(&raw),
        )?;

        tracing::debug!(
            species = %raw.name,
            id = raw.id,
            types = type_names.len(),
            move_generations = move_versions.generations().count() - 1,
            "Assembled species"
        );

        Ok(Species {
            id: raw.id,
            image_url: self.config.sprite_url(raw.id),
            name: raw.name,
            type_versions,
            move_versions,
        })
    }

    /// Resolve each distinct version group once, concurrently, then accumulate
    async fn move_versions(&self, raw: &RawSpecies) -> Result<VersionedRecord<MoveLevels>> {
        let references: BTreeSet<&str> = raw.version_group_refs().collect();

        let generations: HashMap<String, Generation> = stream::iter(references)
            .map(|reference| async move {
                let generation = self.version_group_generation(reference).await?;
                Ok::<_, CatalogError>((reference.to_string(), generation))
            })
            .buffer_unordered(self.config.max_concurrent_requests.max(1))
            .try_collect()
            .await?;

        Ok(Species::move_versions_from_protocol(&raw.moves, &generations)?)
    }

    /// Generation a version group belongs to
    pub async fn version_group_generation(&self, reference: &str) -> Result<Generation> {
        self.version_groups
            .get_or_build(reference, || async {
                let generation_ref = self.catalog.resolve_version_group_generation(reference).await?;
                Ok::<_, CatalogError>(Generation::from_protocol(&generation_ref)?)
            })
            .await
    }

    pub fn clear(&self) {
        self.version_groups.clear();
    }
}
