mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/gridiron/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("gridiron")
}

/// Get the default config file path (~/.config/gridiron/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file.
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/gridiron/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly passed config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
///
/// A missing file at the default path is not an error; it yields the
/// built-in defaults.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let (config_path, explicit) = match path {
        Some(p) => (p, true),
        None => (get_config_path(), false),
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_explicit_missing_path_errors() {
        let result = load_config(Some(PathBuf::from("/nonexistent/config.yaml")));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_config_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"data_file: rosters/week1.json\nppr: 0.5\n")
            .unwrap();

        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.data_file, Some("rosters/week1.json".to_string()));
        assert_eq!(config.ppr, Some(0.5));
    }

    #[test]
    fn test_load_config_invalid_yaml_errors() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"data_file: [unterminated\n").unwrap();

        let result = load_config(Some(file.path().to_path_buf()));
        assert!(result.is_err());
    }
}
