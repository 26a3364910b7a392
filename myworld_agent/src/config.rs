use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Base URL of the generative-language service
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API credential; normally supplied through `API_KEY`
    #[serde(default)]
    pub api_key: String,

    /// Model name (e.g. "gemini-3-flash-preview")
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            model: default_model(),
        }
    }
}

impl GeneratorConfig {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("myworld")
            .join("agent.toml")
    }

    /// Reads the config file if one exists, then applies environment overrides.
    pub fn load() -> Self {
        let mut config = Self::load_from(&Self::config_path());
        config.apply_env_overrides(|key| env::var(key).ok());
        config
    }

    /// Reads `path` without environment overrides. A missing or unparsable
    /// file yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => Self::from_toml_str(&raw).unwrap_or_else(|err| {
                tracing::warn!("Ignoring unreadable config at {:?}: {:#}", path, err);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("Failed to parse generator config")
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path();
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let raw = toml::to_string_pretty(self).context("Failed to serialize generator config")?;
        fs::write(path, raw).with_context(|| format!("Failed to write config to {:?}", path))?;
        Ok(())
    }

    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty("MYWORLD_LLM_API_URL") {
            self.api_url = url;
        }
        if let Some(model) = non_empty("MYWORLD_LLM_MODEL") {
            self.model = model;
        }
        if let Some(key) = non_empty("API_KEY").or_else(|| non_empty("GEMINI_API_KEY")) {
            self.api_key = key;
        }
    }
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}
