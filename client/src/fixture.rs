//! In-memory catalog used by the client tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::anyhow;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use typedex_protocol::{RawSpecies, RawType, RawVersionGroup, SpeciesListing};

use crate::error::{CatalogError, ResourceKind, Result};
use crate::service::CatalogService;

const API: &str = "https://pokeapi.co/api/v2/";

fn type_ref(name: &str) -> Value {
    json!({ "name": name, "url": format!("{}type/{}/", API, name) })
}

fn type_refs(names: &[&str]) -> Value {
    Value::Array(names.iter().map(|n| type_ref(n)).collect())
}

fn generation(n: u8) -> Value {
    json!({ "name": format!("generation-{}", n), "url": format!("{}generation/{}/", API, n) })
}

pub(crate) fn version_group_url(id: u32) -> String {
    format!("{}version-group/{}/", API, id)
}

/// `[double_to, half_to, no_to, double_from, half_from, no_from]`
fn relations(lists: [&[&str]; 6]) -> Value {
    json!({
        "double_damage_to": type_refs(lists[0]),
        "half_damage_to": type_refs(lists[1]),
        "no_damage_to": type_refs(lists[2]),
        "double_damage_from": type_refs(lists[3]),
        "half_damage_from": type_refs(lists[4]),
        "no_damage_from": type_refs(lists[5]),
    })
}

fn type_doc(name: &str, earliest: u8, current: Value, past: Vec<(u8, Value)>) -> Value {
    let past: Vec<Value> = past
        .into_iter()
        .map(|(n, relations)| json!({ "generation": generation(n), "damage_relations": relations }))
        .collect();

    json!({
        "name": name,
        "generation": generation(earliest),
        "damage_relations": current,
        "past_damage_relations": past,
    })
}

fn slots(names: &[&str]) -> Value {
    Value::Array(
        names
            .iter()
            .enumerate()
            .map(|(i, name)| json!({ "slot": i + 1, "type": type_ref(name) }))
            .collect(),
    )
}

/// `(move, [(version group id, level)])`
fn moves(entries: Vec<(&str, Vec<(u32, u32)>)>) -> Value {
    Value::Array(
        entries
            .into_iter()
            .map(|(name, details)| {
                let details: Vec<Value> = details
                    .into_iter()
                    .map(|(group, level)| {
                        json!({
                            "level_learned_at": level,
                            "move_learn_method": { "name": "level-up", "url": format!("{}move-learn-method/1/", API) },
                            "version_group": { "name": format!("group-{}", group), "url": version_group_url(group) },
                        })
                    })
                    .collect();
                json!({
                    "move": { "name": name, "url": format!("{}move/{}/", API, name) },
                    "version_group_details": details,
                })
            })
            .collect(),
    )
}

fn species_doc(id: u32, name: &str, types: &[&str], past: Vec<(u8, Vec<&str>)>, moves: Value) -> Value {
    let past: Vec<Value> = past
        .into_iter()
        .map(|(n, names)| json!({ "generation": generation(n), "types": slots(&names) }))
        .collect();

    json!({
        "id": id,
        "name": name,
        "types": slots(types),
        "past_types": past,
        "moves": moves,
    })
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| CatalogError::Upstream(e.into()))
}

/// A small slice of the real catalog, with call counters
pub(crate) struct FixtureCatalog {
    types: Mutex<HashMap<String, Value>>,
    species: HashMap<String, Value>,
    version_groups: HashMap<String, u8>,
    failing_types: Mutex<HashSet<String>>,
    type_fetches: Mutex<HashMap<String, usize>>,
    species_fetches: AtomicUsize,
    version_group_fetches: AtomicUsize,
    version_groups_in_flight: AtomicUsize,
    peak_version_groups_in_flight: AtomicUsize,
}

impl FixtureCatalog {
    pub fn new() -> Self {
        let empty: &[&str] = &[];

        let types = HashMap::from([
            (
                "normal",
                type_doc(
                    "normal",
                    1,
                    relations([empty, &["rock", "steel"], &["ghost"], &["fighting"], empty, &["ghost"]]),
                    vec![],
                ),
            ),
            (
                "fire",
                type_doc(
                    "fire",
                    1,
                    relations([
                        &["grass", "ice", "bug", "steel"],
                        &["fire", "water", "rock", "dragon"],
                        empty,
                        &["water", "ground", "rock"],
                        &["fire", "grass", "ice", "bug", "steel", "fairy"],
                        empty,
                    ]),
                    vec![],
                ),
            ),
            (
                "water",
                type_doc(
                    "water",
                    1,
                    relations([
                        &["fire", "ground", "rock"],
                        &["water", "grass", "dragon"],
                        empty,
                        &["grass", "electric"],
                        &["fire", "water", "ice", "steel"],
                        empty,
                    ]),
                    vec![],
                ),
            ),
            (
                "electric",
                type_doc(
                    "electric",
                    1,
                    relations([
                        &["water", "flying"],
                        &["electric", "grass", "dragon"],
                        &["ground"],
                        &["ground"],
                        &["electric", "flying", "steel"],
                        empty,
                    ]),
                    vec![],
                ),
            ),
            (
                "steel",
                type_doc(
                    "steel",
                    2,
                    relations([
                        &["ice", "rock", "fairy"],
                        &["fire", "water", "electric", "steel"],
                        empty,
                        &["fighting", "ground", "fire"],
                        &["normal", "grass", "ice", "flying", "psychic", "bug", "rock", "dragon", "steel", "fairy"],
                        &["poison"],
                    ]),
                    vec![(
                        5,
                        relations([
                            &["ice", "rock"],
                            &["fire", "water", "electric", "steel"],
                            empty,
                            &["fighting", "ground", "fire"],
                            &[
                                "normal", "grass", "ice", "flying", "psychic", "bug", "rock", "ghost",
                                "dragon", "dark", "steel",
                            ],
                            &["poison"],
                        ]),
                    )],
                ),
            ),
            (
                "fairy",
                type_doc(
                    "fairy",
                    6,
                    relations([
                        &["fighting", "dragon", "dark"],
                        &["fire", "poison", "steel"],
                        empty,
                        &["poison", "steel"],
                        &["fighting", "bug", "dark"],
                        &["dragon"],
                    ]),
                    vec![],
                ),
            ),
            (
                "bird",
                type_doc("bird", 42, relations([empty; 6]), vec![]),
            ),
        ])
        .into_iter()
        .map(|(name, doc)| (name.to_string(), doc))
        .collect();

        let charmander_moves = moves(vec![
            ("scratch", vec![(1, 1), (15, 1)]),
            ("growl", vec![(1, 1), (15, 1)]),
            ("ember", vec![(1, 9), (3, 7), (15, 7)]),
            ("metal-claw", vec![(3, 0)]),
        ]);
        let clefairy_moves = moves(vec![
            ("pound", vec![(1, 1), (15, 1)]),
            ("sing", vec![(1, 13), (2, 13)]),
            ("moonblast", vec![(15, 50)]),
        ]);

        let species = [
            species_doc(4, "charmander", &["fire"], vec![], charmander_moves),
            species_doc(7, "squirtle", &["water"], vec![], moves(vec![("tackle", vec![(1, 1), (15, 1)])])),
            species_doc(35, "clefairy", &["fairy"], vec![(5, vec!["normal"])], clefairy_moves),
            species_doc(700, "sylveon", &["fairy"], vec![], moves(vec![])),
            species_doc(702, "dedenne", &["electric", "fairy"], vec![], moves(vec![])),
            species_doc(9001, "glitchmon", &["normal", "shadow"], vec![], moves(vec![])),
            species_doc(9002, "oddmon", &["normal"], vec![], moves(vec![("splash", vec![(99, 1)])])),
        ];

        let species = species
            .into_iter()
            .flat_map(|doc| {
                let id = doc["id"].to_string();
                let name = doc["name"].as_str().unwrap_or_default().to_string();
                [(id, doc.clone()), (name, doc)]
            })
            .collect();

        let version_groups = [(1, 1), (2, 1), (3, 2), (15, 6), (99, 99)]
            .into_iter()
            .map(|(group, generation)| (version_group_url(group), generation))
            .collect();

        Self {
            types: Mutex::new(types),
            species,
            version_groups,
            failing_types: Mutex::new(HashSet::new()),
            type_fetches: Mutex::new(HashMap::new()),
            species_fetches: AtomicUsize::new(0),
            version_group_fetches: AtomicUsize::new(0),
            version_groups_in_flight: AtomicUsize::new(0),
            peak_version_groups_in_flight: AtomicUsize::new(0),
        }
    }

    /// Make every fetch of `name` fail at the transport level until healed
    pub fn fail_type(&self, name: &str) {
        self.failing_types.lock().unwrap().insert(name.to_string());
    }

    pub fn heal_type(&self, name: &str) {
        self.failing_types.lock().unwrap().remove(name);
    }

    pub fn type_fetches(&self, name: &str) -> usize {
        self.type_fetches.lock().unwrap().get(name).copied().unwrap_or(0)
    }

    pub fn total_type_fetches(&self) -> usize {
        self.type_fetches.lock().unwrap().values().sum()
    }

    pub fn species_fetches(&self) -> usize {
        self.species_fetches.load(Ordering::SeqCst)
    }

    pub fn version_group_fetches(&self) -> usize {
        self.version_group_fetches.load(Ordering::SeqCst)
    }

    /// Most version group lookups that were ever pending at once
    pub fn peak_version_groups_in_flight(&self) -> usize {
        self.peak_version_groups_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogService for FixtureCatalog {
    async fn fetch_type(&self, name: &str) -> Result<RawType> {
        *self
            .type_fetches
            .lock()
            .unwrap()
            .entry(name.to_string())
            .or_default() += 1;
        tokio::task::yield_now().await;

        if self.failing_types.lock().unwrap().contains(name) {
            return Err(anyhow!("connection reset fetching type {}", name).into());
        }

        let doc = self.types.lock().unwrap().get(name).cloned();
        match doc {
            Some(doc) => decode(doc),
            None => Err(CatalogError::not_found(ResourceKind::Type, name)),
        }
    }

    async fn fetch_species(&self, id_or_name: &str) -> Result<RawSpecies> {
        self.species_fetches.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        match self.species.get(id_or_name) {
            Some(doc) => decode(doc.clone()),
            None => Err(CatalogError::not_found(ResourceKind::Species, id_or_name)),
        }
    }

    async fn fetch_move_names(&self) -> Result<Vec<String>> {
        Ok(vec!["pound".into(), "karate-chop".into(), "double-slap".into()])
    }

    async fn fetch_all_species_names(&self) -> Result<Vec<SpeciesListing>> {
        Ok(vec![
            SpeciesListing { name: "charmander".into(), id: 4 },
            SpeciesListing { name: "squirtle".into(), id: 7 },
        ])
    }

    async fn resolve_version_group_generation(&self, version_group_ref: &str) -> Result<String> {
        self.version_group_fetches.fetch_add(1, Ordering::SeqCst);
        let in_flight = self.version_groups_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_version_groups_in_flight
            .fetch_max(in_flight, Ordering::SeqCst);
        // Stay pending long enough for sibling lookups to start
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        self.version_groups_in_flight.fetch_sub(1, Ordering::SeqCst);

        let number = self
            .version_groups
            .get(version_group_ref)
            .ok_or_else(|| CatalogError::not_found(ResourceKind::VersionGroup, version_group_ref))?;

        let group: RawVersionGroup = decode(json!({
            "name": version_group_ref,
            "generation": generation(*number),
        }))?;
        Ok(group.generation.url)
    }
}
