use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Overrides the token file location, which defaults to the user cache directory
    #[serde(default)]
    pub token_path: Option<PathBuf>,
}

fn default_server_url() -> String {
    bookshelf_api::DEFAULT_BASE_URL.to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("BOOKSHELF_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        Self::load_from(&config_path)
    }

    /// Reads `config_path` if it exists, then applies `BOOKSHELF_*` environment overrides
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("BOOKSHELF").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server_url.is_empty() {
            return Err("server_url is required".to_string());
        }
        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            return Err("server_url must be a valid HTTP(S) URL".to_string());
        }
        Ok(())
    }
}
