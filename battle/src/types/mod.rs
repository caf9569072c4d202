//! Domain types for generation-versioned catalog data

mod generation;
mod pokemon;
mod pokemon_type;
mod versioned;

pub use generation::{GENERATION_COUNT, Generation, InvalidGeneration};
pub use pokemon::{MoveLevels, Species, TypeSlot, referenced_type_names};
pub use pokemon_type::{DamageRelations, Type};
pub use versioned::VersionedRecord;
