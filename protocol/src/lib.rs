use thiserror::Error;

pub mod payload;
pub mod reference;

pub use payload::{
    NamedResource, RawDamageRelations, RawMoveEntry, RawPastDamageRelations, RawPastTypes,
    RawSpecies, RawType, RawTypeSlot, RawVersionGroup, RawVersionGroupDetail, ResourceList,
    SpeciesListing,
};
pub use reference::{
    GENERATION_MARKER, SPECIES_MARKER, parse_generation_ref, parse_species_ref, parse_trailing_id,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Reference {reference} has no {marker:?} segment")]
    MissingMarker {
        marker: &'static str,
        reference: String,
    },

    #[error("Invalid numeric segment in reference: {0}")]
    InvalidNumber(String),
}
