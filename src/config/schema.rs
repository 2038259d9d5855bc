use serde::{Deserialize, Serialize};

/// User configuration. Every field is optional; CLI flags take precedence.
///
/// Example YAML:
/// ```yaml
/// data_file: data/players.json
/// ppr: 0.5
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Roster file used when --file is not passed
    #[serde(default)]
    pub data_file: Option<String>,

    /// Reception weight used when --ppr is not passed (default: 1.0)
    #[serde(default)]
    pub ppr: Option<f64>,
}
