use std::fmt;

use thiserror::Error;
use typedex_battle::InvalidGeneration;

/// The kind of catalog resource a request was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Type,
    Species,
    VersionGroup,
    MoveIndex,
    SpeciesIndex,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceKind::Type => "type",
            ResourceKind::Species => "species",
            ResourceKind::VersionGroup => "version group",
            ResourceKind::MoveIndex => "move index",
            ResourceKind::SpeciesIndex => "species index",
        })
    }
}

/// Failures surfaced by catalog resolution.
///
/// Nothing is retried or substituted; a failed assembly leaves no cache entry.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("No {kind} data for {name}")]
    NotFound { kind: ResourceKind, name: String },

    #[error(transparent)]
    InvalidGeneration(#[from] InvalidGeneration),

    #[error("Catalog request failed: {0:#}")]
    Upstream(#[from] anyhow::Error),
}

impl CatalogError {
    pub fn not_found(kind: ResourceKind, name: impl Into<String>) -> Self {
        CatalogError::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
