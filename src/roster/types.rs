use std::collections::HashMap;

use serde::Deserialize;

/// Single case-normalization used for construction, filters, and search.
pub fn normalize_for_compare(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Raw performance statistics keyed by stat name.
///
/// Every key is optional. A missing key reads as 0.0 through [`StatSheet::get`],
/// so scoring never special-cases absence per call site.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct StatSheet(HashMap<String, f64>);

impl StatSheet {
    pub fn new(stats: HashMap<String, f64>) -> Self {
        StatSheet(stats)
    }

    /// Value recorded for `key`, or 0.0 when the key is absent.
    pub fn get(&self, key: &str) -> f64 {
        self.0.get(key).copied().unwrap_or(0.0)
    }

    /// Whether the sheet records `key` at all (used by the breakdown view).
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: u64,
    pub name: String,
    pub position: String, // always uppercase
    pub team: String,
    pub bye_week: Option<u32>,
    pub stats: StatSheet,
}

impl Player {
    /// Build a player, normalizing `position` to uppercase. All other fields
    /// are stored exactly as supplied.
    pub fn new(
        id: u64,
        name: String,
        position: String,
        team: String,
        bye_week: Option<u32>,
        stats: StatSheet,
    ) -> Self {
        Player {
            id,
            name,
            position: normalize_for_compare(&position),
            team,
            bye_week,
            stats,
        }
    }

    /// Short identity line in the format "Name (TEAM, POS)"
    pub fn display_tag(&self) -> String {
        format!("{} ({}, {})", self.name, self.team, self.position)
    }
}
