use anyhow::Context;
use fieldmask_core::FieldSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for fieldmask
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fields: FieldsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldsConfig {
    /// Field names masked in addition to `userName` and `userEmail`
    #[serde(default)]
    pub extra: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            debug!("Wrote default config to {}", path.display());
            Ok(config)
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        debug!(
            "Loaded config from {} ({} extra fields)",
            path.display(),
            config.fields.extra.len()
        );
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "fieldmask", "fieldmask") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.fieldmask/config.toml")
        }
    }

    /// Effective field set: baseline, config extras and `cli_extra`
    pub fn field_set<I, S>(&self, cli_extra: I) -> FieldSet
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .extra
            .iter()
            .cloned()
            .chain(cli_extra.into_iter().map(Into::into))
            .collect()
    }
}
