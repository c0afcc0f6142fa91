use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use withbem_core::BemOptions;

pub const DEFAULT_CONFIG_NAME: &str = "withbem.config.json";

/// withbem configuration file format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Naming separators
    #[serde(flatten)]
    pub options: BemOptions,
}

impl Config {
    /// Load config from `explicit`, or from the default file in `cwd`
    pub fn load(cwd: &str, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = match explicit {
            Some(path) => path.to_path_buf(),
            None => Self::default_path(cwd),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::info!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else if explicit.is_some() {
            Err(anyhow::anyhow!(
                "Config file does not exist: {}",
                config_path.display()
            ))
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn default_path(cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "elementSeparator": "-",
            "modifierSeparator": "_"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.options.element_separator, "-");
        assert_eq!(config.options.modifier_separator, "_");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.options.element_separator, "__");
        assert_eq!(config.options.modifier_separator, "--");
    }

    #[test]
    fn test_load_missing_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().display().to_string(), None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(Config::load(&dir.path().display().to_string(), Some(&missing)).is_err());
    }

    #[test]
    fn test_load_from_cwd() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "elementSeparator": "-" }"#,
        )
        .unwrap();

        let config = Config::load(&dir.path().display().to_string(), None).unwrap();
        assert_eq!(config.options.element_separator, "-");
        assert_eq!(config.options.modifier_separator, "--");
    }
}
