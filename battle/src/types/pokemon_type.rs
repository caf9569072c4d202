//! Catalog-backed type data and damage relations

use typedex_protocol::{NamedResource, RawDamageRelations, RawType};

use super::generation::{Generation, InvalidGeneration};
use super::versioned::VersionedRecord;

/// Directed effectiveness links from one type to others, by type name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRelations {
    pub double_damage_to: Vec<String>,
    pub half_damage_to: Vec<String>,
    pub no_damage_to: Vec<String>,
    pub double_damage_from: Vec<String>,
    pub half_damage_from: Vec<String>,
    pub no_damage_from: Vec<String>,
}

impl DamageRelations {
    /// Create from protocol relation lists
    pub fn from_protocol(raw: &RawDamageRelations) -> Self {
        fn names(resources: &[NamedResource]) -> Vec<String> {
            resources.iter().map(|r| r.name.clone()).collect()
        }

        Self {
            double_damage_to: names(&raw.double_damage_to),
            half_damage_to: names(&raw.half_damage_to),
            no_damage_to: names(&raw.no_damage_to),
            double_damage_from: names(&raw.double_damage_from),
            half_damage_from: names(&raw.half_damage_from),
            no_damage_from: names(&raw.no_damage_from),
        }
    }

    /// Offensive score against `defender`: +1 double, -1 half, -1 none
    pub fn offense_against(&self, defender: &str) -> i32 {
        score(
            &self.double_damage_to,
            &self.half_damage_to,
            &self.no_damage_to,
            defender,
        )
    }

    /// Defensive score when hit by `attacker`: +1 double, -1 half, -1 none
    pub fn defense_against(&self, attacker: &str) -> i32 {
        score(
            &self.double_damage_from,
            &self.half_damage_from,
            &self.no_damage_from,
            attacker,
        )
    }
}

fn score(double: &[String], half: &[String], none: &[String], name: &str) -> i32 {
    let has = |list: &[String]| i32::from(list.iter().any(|t| t == name));
    has(double) - has(half) - has(none)
}

/// One generation's snapshot of a type
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Type {
    pub name: String,

    /// Snapshot key this data was stored under
    pub generation: Generation,

    pub relations: DamageRelations,

    /// Generation the type was introduced in
    pub earliest_generation: Generation,
}

impl Type {
    /// Whether the type exists in `generation`
    pub fn exists_in(&self, generation: Generation) -> bool {
        self.earliest_generation <= generation
    }

    /// Build every snapshot of a type from its catalog document
    pub fn versions_from_protocol(raw: &RawType) -> Result<VersionedRecord<Type>, InvalidGeneration> {
        let earliest_generation = Generation::from_protocol(&raw.generation.url)?;

        let mut versions = VersionedRecord::new(Type {
            name: raw.name.clone(),
            generation: Generation::Latest,
            relations: DamageRelations::from_protocol(&raw.damage_relations),
            earliest_generation,
        });

        for past in &raw.past_damage_relations {
            let generation = Generation::from_protocol(&past.generation.url)?;
            versions.insert(
                generation,
                Type {
                    name: raw.name.clone(),
                    generation,
                    relations: DamageRelations::from_protocol(&past.damage_relations),
                    earliest_generation,
                },
            );
        }

        Ok(versions)
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
