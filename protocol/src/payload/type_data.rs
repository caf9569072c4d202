use serde::{Deserialize, Serialize};

use super::NamedResource;

/// The six directed relation lists of a type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDamageRelations {
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
}

/// Relations that applied up to and including `generation`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPastDamageRelations {
    pub generation: NamedResource,
    pub damage_relations: RawDamageRelations,
}

/// `/type/{name}` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawType {
    pub name: String,
    /// Generation the type was introduced in
    pub generation: NamedResource,
    pub damage_relations: RawDamageRelations,
    #[serde(default)]
    pub past_damage_relations: Vec<RawPastDamageRelations>,
}
