//! Catalog response payloads
//!
//! These mirror the JSON documents served by the catalog. Only the fields the
//! dex needs are declared; everything else is ignored during deserialization.

mod species;
mod type_data;

use serde::{Deserialize, Serialize};

use crate::{ParseError, parse_species_ref};

pub use species::{RawMoveEntry, RawPastTypes, RawSpecies, RawTypeSlot, RawVersionGroupDetail};
pub use type_data::{RawDamageRelations, RawPastDamageRelations, RawType};

/// A `{ name, url }` link to another catalog resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Paginated index of resources (`/move?limit=...`, `/pokemon?limit=...`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: Option<u32>,
    pub results: Vec<NamedResource>,
}

impl ResourceList {
    /// Names of every listed resource, in catalog order
    pub fn names(&self) -> Vec<String> {
        self.results.iter().map(|r| r.name.clone()).collect()
    }

    /// Interpret the listing as a species index
    pub fn species_listings(&self) -> Result<Vec<SpeciesListing>, ParseError> {
        self.results
            .iter()
            .map(SpeciesListing::from_resource)
            .collect()
    }
}

/// A species name paired with the numeric id parsed from its reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesListing {
    pub name: String,
    pub id: u32,
}

impl SpeciesListing {
    pub fn from_resource(resource: &NamedResource) -> Result<Self, ParseError> {
        Ok(Self {
            name: resource.name.clone(),
            id: parse_species_ref(&resource.url)?,
        })
    }
}

/// `/version-group/{id}` document; only the owning generation is needed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVersionGroup {
    pub name: String,
    pub generation: NamedResource,
}
