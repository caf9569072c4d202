//! Species data assembled from the catalog

use std::collections::{BTreeMap, BTreeSet, HashMap};

use typedex_protocol::{RawMoveEntry, RawPastTypes, RawTypeSlot};

use super::generation::{Generation, InvalidGeneration};
use super::versioned::VersionedRecord;

/// Moves learned by level: level -> move names
pub type MoveLevels = BTreeMap<u32, Vec<String>>;

/// A type held by a species, with its display role
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeSlot {
    pub name: String,

    /// Primary types are listed first; this has no effect on effectiveness
    pub primary: bool,
}

impl TypeSlot {
    pub fn new(name: impl Into<String>, primary: bool) -> Self {
        Self {
            name: name.into(),
            primary,
        }
    }

    /// Create from a protocol type slot (slot 1 is primary)
    pub fn from_protocol(raw: &RawTypeSlot) -> Self {
        Self::new(raw.type_ref.name.clone(), raw.slot == 1)
    }
}

/// A species with its type and move-learn history
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Species {
    pub id: u32,
    pub name: String,
    pub image_url: String,
    pub type_versions: VersionedRecord<Vec<TypeSlot>>,
    pub move_versions: VersionedRecord<MoveLevels>,
}

impl Species {
    /// Type slots governing `generation`
    pub fn type_slots_at(&self, generation: Generation) -> &[TypeSlot] {
        self.type_versions.at(generation)
    }

    /// Level-up moves governing `generation`
    pub fn moves_at(&self, generation: Generation) -> &MoveLevels {
        self.move_versions.at(generation)
    }

    /// Every type name referenced by any generation, deduplicated
    pub fn type_names(&self) -> BTreeSet<&str> {
        referenced_type_names(&self.type_versions)
    }

    /// Build type history from the current slots and past type changes
    pub fn type_versions_from_protocol(
        current: &[RawTypeSlot],
        past: &[RawPastTypes],
    ) -> Result<VersionedRecord<Vec<TypeSlot>>, InvalidGeneration> {
        let mut versions = VersionedRecord::new(current.iter().map(TypeSlot::from_protocol).collect());

        for change in past {
            let generation = Generation::from_protocol(&change.generation.url)?;
            versions
                .get_or_insert_with(generation, Vec::new)
                .extend(change.types.iter().map(TypeSlot::from_protocol));
        }

        Ok(versions)
    }

    /// Accumulate move-learn entries per generation.
    ///
    /// `generation_of` maps each version group reference to its generation.
    /// A move is listed once per level even when several version groups of
    /// the same generation teach it. `Latest` receives the data of the highest
    /// generation populated.
    pub fn move_versions_from_protocol(
        moves: &[RawMoveEntry],
        generation_of: &HashMap<String, Generation>,
    ) -> Result<VersionedRecord<MoveLevels>, InvalidGeneration> {
        let mut versions = VersionedRecord::<MoveLevels>::default();

        for entry in moves {
            for detail in &entry.version_group_details {
                let generation = *generation_of
                    .get(&detail.version_group.url)
                    .ok_or_else(|| InvalidGeneration(detail.version_group.url.clone()))?;

                let learned = versions
                    .get_or_insert_with(generation, MoveLevels::new)
                    .entry(detail.level_learned_at)
                    .or_default();
                // Several version groups of one generation often repeat a move
                if !learned.contains(&entry.move_ref.name) {
                    learned.push(entry.move_ref.name.clone());
                }
            }
        }

        versions.promote_newest();
        Ok(versions)
    }
}

/// Deduplicated type names across every snapshot of a type history
pub fn referenced_type_names(versions: &VersionedRecord<Vec<TypeSlot>>) -> BTreeSet<&str> {
    versions
        .snapshots()
        .flat_map(|slots| slots.iter().map(|slot| slot.name.as_str()))
        .collect()
}
