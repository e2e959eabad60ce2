use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::license::definitions::Catalog;
use crate::license::recognizer::DEFAULT_FALLBACK_NAME;
use crate::license::template::TemplateStore;

/// Root configuration structure, deserialized from `.license-recognizer/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub recognition: RecognitionConfig,
}

/// Settings for building the catalog and reporting unmatched text.
#[derive(Debug, Deserialize)]
pub struct RecognitionConfig {
    /// Name given to the unrecognized license when a document matches
    /// nothing. Defaults to `unknown`.
    #[serde(default = "default_fallback_name")]
    pub fallback_name: String,
    /// Directory of `<name>.txt` reference texts overriding or extending the
    /// embedded templates.
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
}

fn default_fallback_name() -> String {
    DEFAULT_FALLBACK_NAME.to_string()
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            fallback_name: default_fallback_name(),
            templates_dir: None,
        }
    }
}

impl Config {
    /// Build the catalog, reading templates from `templates_dir` when set.
    pub fn build_catalog(&self) -> Result<Catalog> {
        let store = match &self.recognition.templates_dir {
            Some(dir) => TemplateStore::with_overrides(dir)
                .with_context(|| format!("loading templates from {}", dir.display()))?,
            None => TemplateStore::embedded(),
        };
        Ok(Catalog::build(&store)?)
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<base_path>/.license-recognizer/config.toml`
/// 3. `~/.config/license-recognizer/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(base_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = base_path.join(".license-recognizer").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-recognizer")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    tracing::debug!("No config file found, using defaults");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}
