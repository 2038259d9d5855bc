use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::types::{Player, StatSheet};

/// One record in the roster file.
///
/// `bye_week` and `stats` may be omitted. Unknown fields (including the
/// superseded `projected_points`) are ignored so older rosters still load.
#[derive(Debug, Deserialize)]
struct PlayerRecord {
    id: u64,
    name: String,
    position: String,
    team: String,
    #[serde(default)]
    bye_week: Option<u32>,
    #[serde(default)]
    stats: HashMap<String, f64>,
}

/// Load the roster file in one pass and materialize players.
///
/// # Errors
///
/// Returns an error if:
/// - The roster file cannot be read
/// - The JSON cannot be parsed into roster records
pub fn load_players(path: &Path) -> Result<Vec<Player>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file at {}", path.display()))?;

    let records: Vec<PlayerRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid JSON in roster file {}", path.display()))?;

    Ok(records
        .into_iter()
        .map(|r| {
            Player::new(
                r.id,
                r.name,
                r.position,
                r.team,
                r.bye_week,
                StatSheet::new(r.stats),
            )
        })
        .collect())
}
