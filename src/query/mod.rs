use std::cmp::Ordering;

use crate::roster::{normalize_for_compare, Player};
use crate::scoring::calculate_score;

/// Keep players matching the given position and/or team, preserving order.
///
/// `None` means no constraint; both filters are conjunctive when supplied.
/// Position matches against the stored (already uppercase) code; team
/// comparison is case-insensitive.
pub fn filter_by_attributes(
    players: Vec<Player>,
    position: Option<&str>,
    team: Option<&str>,
) -> Vec<Player> {
    let position = position.map(normalize_for_compare);
    let team = team.map(normalize_for_compare);

    players
        .into_iter()
        .filter(|p| {
            let position_ok = position
                .as_deref()
                .map_or(true, |pos| p.position == pos);
            let team_ok = team
                .as_deref()
                .map_or(true, |t| normalize_for_compare(&p.team) == t);
            position_ok && team_ok
        })
        .collect()
}

/// Case-insensitive substring search on player name.
///
/// An empty query matches everything. Preserves input order. Also serves
/// single-record lookup: the caller disambiguates zero, one, or many results.
pub fn search_by_name(players: Vec<Player>, query: &str) -> Vec<Player> {
    let needle = normalize_for_compare(query);
    players
        .into_iter()
        .filter(|p| normalize_for_compare(&p.name).contains(&needle))
        .collect()
}

/// Sort descending by computed score. Ties keep their relative input order.
pub fn sort_by_score(players: Vec<Player>, ppr: f64) -> Vec<Player> {
    let mut scored: Vec<(Player, f64)> = players
        .into_iter()
        .map(|p| {
            let score = calculate_score(&p, ppr).score;
            (p, score)
        })
        .collect();

    // sort_by is stable, so equal scores retain input order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    scored.into_iter().map(|(p, _)| p).collect()
}

/// Take the first `n` players. `None` or zero returns the input unchanged.
pub fn limit_top(players: Vec<Player>, top: Option<usize>) -> Vec<Player> {
    match top {
        Some(n) if n > 0 => players.into_iter().take(n).collect(),
        _ => players,
    }
}
