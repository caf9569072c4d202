//! Rule-set generations

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use typedex_protocol::parse_generation_ref;

/// Number of released generations
pub const GENERATION_COUNT: u8 = 9;

/// A generation value that is unparseable or outside `1..=GENERATION_COUNT`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid generation: {0}")]
pub struct InvalidGeneration(pub String);

/// A rule-set era.
///
/// Numbered generations order by number. `Latest` orders after every
/// numbered generation and is always resolvable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Generation {
    /// Unchecked; [`Generation::numbered`] and [`Generation::from_protocol`]
    /// reject values outside `1..=GENERATION_COUNT`.
    Numbered(u8),
    Latest,
}

impl Generation {
    /// The selectable generation domain: `Latest` followed by 1..=N
    pub const ALL: [Generation; GENERATION_COUNT as usize + 1] = [
        Generation::Latest,
        Generation::Numbered(1),
        Generation::Numbered(2),
        Generation::Numbered(3),
        Generation::Numbered(4),
        Generation::Numbered(5),
        Generation::Numbered(6),
        Generation::Numbered(7),
        Generation::Numbered(8),
        Generation::Numbered(9),
    ];

    /// Get the generation domain as a slice
    pub fn all() -> &'static [Generation] {
        &Self::ALL
    }

    /// Build a numbered generation, rejecting values outside the domain
    pub fn numbered(number: u32) -> Option<Self> {
        u8::try_from(number)
            .ok()
            .filter(|n| (1..=GENERATION_COUNT).contains(n))
            .map(Generation::Numbered)
    }

    /// Parse from a catalog generation reference (`.../generation/{n}/`)
    pub fn from_protocol(reference: &str) -> Result<Self, InvalidGeneration> {
        parse_generation_ref(reference)
            .ok()
            .and_then(Self::numbered)
            .ok_or_else(|| InvalidGeneration(reference.to_string()))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generation::Numbered(n) => write!(f, "generation {}", n),
            Generation::Latest => f.write_str("latest"),
        }
    }
}

impl FromStr for Generation {
    type Err = InvalidGeneration;

    /// Accepts `latest` (any case) or a bare generation number
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("latest") {
            return Ok(Generation::Latest);
        }
        s.parse::<u32>()
            .ok()
            .and_then(Self::numbered)
            .ok_or_else(|| InvalidGeneration(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_maximal() {
        for generation in Generation::all() {
            assert!(*generation <= Generation::Latest);
        }
        assert!(Generation::Numbered(9) < Generation::Latest);
    }

    #[test]
    fn test_numbered_ordering() {
        assert!(Generation::Numbered(2) < Generation::Numbered(3));
        assert!(Generation::Numbered(6) > Generation::Numbered(5));
    }

    #[test]
    fn test_numbered_range() {
        assert_eq!(Generation::numbered(1), Some(Generation::Numbered(1)));
        assert_eq!(Generation::numbered(9), Some(Generation::Numbered(9)));
        assert_eq!(Generation::numbered(0), None);
        assert_eq!(Generation::numbered(10), None);
        assert_eq!(Generation::numbered(256), None);
    }

    #[test]
    fn test_checked_constructors_reject_out_of_domain() {
        assert!(Generation::from_protocol("https://pokeapi.co/api/v2/generation/0/").is_err());
        assert!(Generation::from_protocol("https://pokeapi.co/api/v2/generation/200/").is_err());
        assert!("200".parse::<Generation>().is_err());
        assert!("-1".parse::<Generation>().is_err());
    }

    #[test]
    fn test_from_protocol() {
        assert_eq!(
            Generation::from_protocol("https://pokeapi.co/api/v2/generation/4/"),
            Ok(Generation::Numbered(4))
        );
    }

    #[test]
    fn test_from_protocol_out_of_range() {
        let reference = "https://pokeapi.co/api/v2/generation/42/";
        assert_eq!(
            Generation::from_protocol(reference),
            Err(InvalidGeneration(reference.to_string()))
        );
    }

    #[test]
    fn test_from_protocol_unparseable() {
        assert!(Generation::from_protocol("https://pokeapi.co/api/v2/type/4/").is_err());
        assert!(Generation::from_protocol("").is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("latest".parse::<Generation>(), Ok(Generation::Latest));
        assert_eq!("LATEST".parse::<Generation>(), Ok(Generation::Latest));
        assert_eq!(" 3 ".parse::<Generation>(), Ok(Generation::Numbered(3)));
        assert!("0".parse::<Generation>().is_err());
        assert!("three".parse::<Generation>().is_err());
    }

    #[test]
    fn test_all_generations() {
        assert_eq!(Generation::all().len(), 10);
        assert_eq!(Generation::all()[0], Generation::Latest);
        assert_eq!(Generation::all()[9], Generation::Numbered(9));
    }

    #[test]
    fn test_display() {
        assert_eq!(Generation::Latest.to_string(), "latest");
        assert_eq!(Generation::Numbered(6).to_string(), "generation 6");
    }
}
