use serde::Deserialize;
use std::env;
use std::fs;

#[derive(Clone, Debug, Deserialize)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
}

impl GeminiConfig {
    /// Key from config.yaml, falling back to GEMINI_API_KEY in the
    /// environment.
    pub fn resolve_api_key(&self) -> String {
        self.api_key
            .clone()
            .or_else(|| env::var("GEMINI_API_KEY").ok())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct AutoRefreshConfig {
    pub enabled: bool,
    /// Six-field cron expression, e.g. "0 */10 * * * *"
    pub cron: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub gemini: GeminiConfig,
    pub auto_refresh: Option<AutoRefreshConfig>,
}

impl AppConfig {
    pub fn load() -> Self {
        let config_path = "config.yaml";
        let content = fs::read_to_string(config_path).expect("Failed to read config.yaml");

        // Strip BOM if present
        let content = content.strip_prefix("\u{feff}").unwrap_or(&content);

        let config: AppConfig = serde_yaml::from_str(content).expect("Failed to parse config.yaml");
        config
    }
}
