use serde::{Deserialize, Serialize};

use super::NamedResource;

/// One entry of a species' type list. Slot 1 is the primary type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

/// Type list that applied up to and including `generation`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPastTypes {
    pub generation: NamedResource,
    pub types: Vec<RawTypeSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVersionGroupDetail {
    pub level_learned_at: u32,
    pub version_group: NamedResource,
}

/// A move together with every version group that teaches it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMoveEntry {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<RawVersionGroupDetail>,
}

/// `/pokemon/{id or name}` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSpecies {
    pub id: u32,
    pub name: String,
    pub types: Vec<RawTypeSlot>,
    #[serde(default)]
    pub past_types: Vec<RawPastTypes>,
    #[serde(default)]
    pub moves: Vec<RawMoveEntry>,
}

impl RawSpecies {
    /// Every version group reference mentioned by the move list, with duplicates
    pub fn version_group_refs(&self) -> impl Iterator<Item = &str> {
        self.moves
            .iter()
            .flat_map(|entry| entry.version_group_details.iter())
            .map(|detail| detail.version_group.url.as_str())
    }
}
