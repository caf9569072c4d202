use async_trait::async_trait;
use typedex_protocol::{RawSpecies, RawType, SpeciesListing};

use crate::error::Result;

/// Source of raw catalog documents.
///
/// The dex only depends on this trait, so any transport (or an in-memory
/// fixture) can back it. Implementations report a missing resource as
/// [`CatalogError::NotFound`](crate::CatalogError::NotFound) and transport
/// problems as [`CatalogError::Upstream`](crate::CatalogError::Upstream).
/// Calls must be free of side effects so that repeating one is harmless.
///
/// # Example
///
/// ```ignore
/// struct Offline { types: HashMap<String, RawType> }
///
/// #[async_trait]
/// impl CatalogService for Offline {
///     async fn fetch_type(&self, name: &str) -> Result<RawType> {
///         self.types
///             .get(name)
///             .cloned()
///             .ok_or_else(|| CatalogError::not_found(ResourceKind::Type, name))
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetch a type document by name
    async fn fetch_type(&self, name: &str) -> Result<RawType>;

    /// Fetch a species document by numeric id or name
    async fn fetch_species(&self, id_or_name: &str) -> Result<RawSpecies>;

    /// Names of every move in the catalog
    async fn fetch_move_names(&self) -> Result<Vec<String>>;

    /// Every species name with its id
    async fn fetch_all_species_names(&self) -> Result<Vec<SpeciesListing>>;

    /// Generation reference owning a version group reference
    async fn resolve_version_group_generation(&self, version_group_ref: &str) -> Result<String>;
}
