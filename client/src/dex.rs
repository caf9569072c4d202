//! The catalog facade consumers talk to

use std::sync::Arc;

use futures_util::future::try_join_all;
use typedex_battle::{Generation, Matchup, Species, Type};
use typedex_protocol::SpeciesListing;

use crate::assembler::SpeciesAssembler;
use crate::cache::{EntityCache, Tagged};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::http::HttpCatalog;
use crate::service::CatalogService;
use crate::type_catalog::TypeCatalog;

/// Generation-aware access to species, types and matchups.
///
/// All lookups go through per-instance caches: each type, species and version
/// group is fetched at most once for the life of the `Dex` (or until
/// [`clear`](Self::clear)). Returned values are owned copies.
pub struct Dex<C = HttpCatalog> {
    catalog: Arc<C>,
    types: TypeCatalog<C>,
    assembler: SpeciesAssembler<C>,
    species: EntityCache<Species>,
}

impl Dex<HttpCatalog> {
    /// Dex backed by the PokeAPI REST endpoints in `config`
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_catalog(HttpCatalog::new(config.clone()), config)
    }
}

impl<C: CatalogService> Dex<C> {
    pub fn with_catalog(catalog: C, config: CatalogConfig) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            types: TypeCatalog::new(catalog.clone()),
            assembler: SpeciesAssembler::new(catalog.clone(), config),
            species: EntityCache::new(),
            catalog,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn types(&self) -> &TypeCatalog<C> {
        &self.types
    }

    /// Species by numeric id or name, with every referenced type loaded
    pub async fn resolve_species(&self, id_or_name: &str) -> Result<Species> {
        let key = id_or_name.trim().to_lowercase();
        self.species
            .get_or_build(&key, || self.assembler.assemble(&key, &self.types))
            .await
    }

    /// The snapshot of a type governing `generation`
    pub async fn resolve_type_at_generation(
        &self,
        name: &str,
        generation: Generation,
    ) -> Result<Type> {
        self.types.at_generation(&name.to_lowercase(), generation).await
    }

    /// A species' types as they stood in `generation`, primary first.
    ///
    /// Types introduced after `generation` are left out, so the list can be
    /// empty for a species whose only type did not exist yet.
    pub async fn types_at_generation(
        &self,
        species: &Species,
        generation: Generation,
    ) -> Result<Vec<Tagged<Type, bool>>> {
        let slots = species.type_slots_at(generation);
        let versions =
            try_join_all(slots.iter().map(|slot| self.types.versions_for_slot(slot))).await?;

        let mut types: Vec<Tagged<Type, bool>> = versions
            .into_iter()
            .map(|tagged| Tagged {
                value: tagged.value.into_at(generation),
                tag: tagged.tag,
            })
            .filter(|tagged| tagged.value.exists_in(generation))
            .collect();

        // Stable, so secondary types keep their slot order
        types.sort_by_key(|tagged| !tagged.tag);
        Ok(types)
    }

    /// Matchup of `yours` against `opponent` under `generation` rules
    pub async fn compute_matchup(
        &self,
        yours: &Species,
        opponent: &Species,
        generation: Generation,
    ) -> Result<Matchup> {
        let (your_types, opponent_types) = futures_util::try_join!(
            self.types_at_generation(yours, generation),
            self.types_at_generation(opponent, generation),
        )?;

        let your_types: Vec<Type> = your_types.into_iter().map(|tagged| tagged.value).collect();
        let opponent_names: Vec<&str> = opponent_types
            .iter()
            .map(|tagged| tagged.value.name.as_str())
            .collect();

        let matchup = typedex_battle::compute_matchup(&your_types, &opponent_names);
        tracing::debug!(
            yours = %yours.name,
            opponent = %opponent.name,
            %generation,
            advantages = matchup.advantages().count(),
            threats = matchup.threats().count(),
            "Computed matchup"
        );
        Ok(matchup)
    }

    /// Every generation a caller may select, `Latest` first
    pub fn generations(&self) -> &'static [Generation] {
        Generation::all()
    }

    /// Names of every move in the catalog
    pub async fn move_names(&self) -> Result<Vec<String>> {
        self.catalog.fetch_move_names().await
    }

    /// Every species name with its id
    pub async fn species_listings(&self) -> Result<Vec<SpeciesListing>> {
        self.catalog.fetch_all_species_names().await
    }

    /// Forget every cached entity
    pub fn clear(&self) {
        self.species.clear();
        self.types.clear();
        self.assembler.clear();
    }
}
