use std::env;
use std::path::PathBuf;

use myworld_agent::GeneratorConfig;

#[derive(Debug, Clone)]
pub struct FrontendConfig {
    pub preferences_path: PathBuf,
    pub generator: GeneratorConfig,
}

impl FrontendConfig {
    pub fn from_env() -> Self {
        let preferences_path = env::var("MYWORLD_PREFERENCES_PATH")
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_preferences_path);
        Self {
            preferences_path,
            generator: GeneratorConfig::load(),
        }
    }
}

fn default_preferences_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("myworld")
        .join("preferences.json")
}
