//! Generation-versioned type data and matchup scoring.
//!
//! This crate holds the domain model shared by the catalog client and any
//! consumer presenting matchups.
//!
//! # Overview
//!
//! `typedex-battle` sits between `typedex-protocol` (catalog payloads) and the
//! client that fetches and caches them:
//!
//! ```text
//! typedex-protocol (catalog payloads)
//!        │
//!        ▼
//! typedex-battle (versioned domain types + matchup) ← THIS CRATE
//!        │
//!        ▼
//! typedex-client (catalog access, caching, species assembly)
//! ```
//!
//! # Main Types
//!
//! - [`Generation`] - A rule-set era, `Latest` or numbered
//! - [`VersionedRecord`] - Sparse generation -> snapshot history with closest-generation lookup
//! - [`Type`] - One generation's damage relations for a type
//! - [`Species`] - Type and move-learn history of a species
//! - [`Matchup`] - Offense/defense scores between two type sets
//!
//! # Example Usage
//!
//! ```ignore
//! use typedex_battle::{compute_matchup, Generation};
//!
//! let record = fire_versions();
//! let fire = record.at(Generation::Numbered(3));
//!
//! let matchup = compute_matchup(&[fire.clone()], &["water"]);
//! assert_eq!(matchup.to.get("fire"), Some(&-1));
//! ```

pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use query::{Matchup, compute_matchup};
pub use types::{
    DamageRelations, GENERATION_COUNT, Generation, InvalidGeneration, MoveLevels, Species, Type,
    TypeSlot, VersionedRecord, referenced_type_names,
};
