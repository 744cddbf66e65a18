use crate::common::types::Match;
use std::collections::HashSet;

/// Drop later matches whose key was already seen; survivors keep their order.
pub fn dedupe_matches(matches: Vec<Match>, by_league: bool) -> Vec<Match> {
    let mut seen = HashSet::with_capacity(matches.len());
    matches
        .into_iter()
        .filter(|m| seen.insert(m.key(by_league)))
        .collect()
}
