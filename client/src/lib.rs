//! Async PokeAPI catalog client.
//!
//! [`Dex`] resolves species and types through per-instance caches and answers
//! generation-aware questions: which types a species had in a generation,
//! what a type's damage relations were then, and how two species match up.
//!
//! ```ignore
//! use typedex_client::{CatalogConfig, Dex, Generation};
//!
//! let dex = Dex::new(CatalogConfig::from_env());
//! let charmander = dex.resolve_species("charmander").await?;
//! let squirtle = dex.resolve_species("squirtle").await?;
//!
//! let matchup = dex
//!     .compute_matchup(&charmander, &squirtle, Generation::Numbered(3))
//!     .await?;
//! assert_eq!(matchup.to.get("fire"), Some(&-1));
//! ```

mod assembler;
mod cache;
mod config;
mod dex;
mod error;
mod http;
mod service;
mod type_catalog;

#[cfg(test)]
mod fixture;

pub use assembler::SpeciesAssembler;
pub use cache::{EntityCache, Tagged};
pub use config::{CatalogConfig, POKEAPI_URL, SPRITE_URL};
pub use dex::Dex;
pub use error::{CatalogError, ResourceKind, Result};
pub use http::HttpCatalog;
pub use service::CatalogService;
pub use type_catalog::TypeCatalog;

pub use typedex_battle::{
    DamageRelations, Generation, InvalidGeneration, Matchup, MoveLevels, Species, Type, TypeSlot,
    VersionedRecord,
};
pub use typedex_protocol::{RawSpecies, RawType, SpeciesListing};
