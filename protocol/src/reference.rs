//! Parsing of catalog resource references
//!
//! The catalog links resources to each other by URL, e.g.
//! `https://pokeapi.co/api/v2/generation/3/`. The numeric id is the segment
//! that follows a fixed marker such as `generation/`.

use crate::ParseError;

/// Marker preceding a generation number
pub const GENERATION_MARKER: &str = "generation/";

/// Marker preceding a species id
pub const SPECIES_MARKER: &str = "pokemon/";

/// Extract the number following the last occurrence of `marker`.
///
/// A single trailing `/` is tolerated since catalog URLs end with one.
pub fn parse_trailing_id(reference: &str, marker: &'static str) -> Result<u32, ParseError> {
    let (_, tail) = reference
        .rsplit_once(marker)
        .ok_or_else(|| ParseError::MissingMarker {
            marker,
            reference: reference.to_string(),
        })?;

    let digits = tail.strip_suffix('/').unwrap_or(tail);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidNumber(reference.to_string()));
    }

    digits
        .parse()
        .map_err(|_| ParseError::InvalidNumber(reference.to_string()))
}

/// Parse the generation number out of a generation reference
pub fn parse_generation_ref(reference: &str) -> Result<u32, ParseError> {
    parse_trailing_id(reference, GENERATION_MARKER)
}

/// Parse the species id out of a species reference
pub fn parse_species_ref(reference: &str) -> Result<u32, ParseError> {
    parse_trailing_id(reference, SPECIES_MARKER)
}
