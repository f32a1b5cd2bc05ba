use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "rnartist.config.json";

/// RNArtist configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory png/svg targets write to when a document gives no path
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Image width used when a target gives none
    #[serde(default = "default_size")]
    pub width: f64,

    /// Image height used when a target gives none
    #[serde(default = "default_size")]
    pub height: f64,

    /// Details level added to every theme that sets none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details_level: Option<u8>,
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_size() -> f64 {
    800.0
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            width: default_size(),
            height: default_size(),
            details_level: None,
        }
    }
}
