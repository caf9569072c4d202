//! Type matchup scoring between two creatures

use std::collections::BTreeMap;

use crate::types::Type;

/// Aggregated effectiveness scores for one generation.
///
/// `to` is keyed by your type name (your offense), `from` by the opponent's
/// type name (damage you take). Neutral entries are never present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matchup {
    pub to: BTreeMap<String, i32>,
    pub from: BTreeMap<String, i32>,
}

impl Matchup {
    /// No advantage or penalty in either direction
    pub fn is_neutral(&self) -> bool {
        self.to.is_empty() && self.from.is_empty()
    }

    /// Your types that hit the opponent harder than neutral
    pub fn advantages(&self) -> impl Iterator<Item = &str> {
        positive_keys(&self.to)
    }

    /// Opponent types that hit you harder than neutral
    pub fn threats(&self) -> impl Iterator<Item = &str> {
        positive_keys(&self.from)
    }
}

fn positive_keys(scores: &BTreeMap<String, i32>) -> impl Iterator<Item = &str> {
    scores
        .iter()
        .filter(|(_, score)| **score > 0)
        .map(|(name, _)| name.as_str())
}

/// Score every (your type, opponent type) pair.
///
/// Scores accumulate across pairs, so dual types add up. An entry is removed
/// the moment it reaches zero and comes back if a later pair moves it again.
pub fn compute_matchup<S: AsRef<str>>(your_types: &[Type], opponent_type_names: &[S]) -> Matchup {
    let mut matchup = Matchup::default();

    for your_type in your_types {
        for opponent in opponent_type_names {
            let opponent = opponent.as_ref();
            adjust(
                &mut matchup.to,
                &your_type.name,
                your_type.relations.offense_against(opponent),
            );
            adjust(
                &mut matchup.from,
                opponent,
                your_type.relations.defense_against(opponent),
            );
        }
    }

    matchup
}

fn adjust(scores: &mut BTreeMap<String, i32>, key: &str, delta: i32) {
    if delta == 0 {
        return;
    }

    let score = scores.entry(key.to_string()).or_insert(0);
    *score += delta;
    if *score == 0 {
        scores.remove(key);
    }
}
