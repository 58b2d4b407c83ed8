use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub api_url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
        }
    }
}

impl FeedConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(FeedConfig::default()));

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("LIBRIS_"));

        figment.extract()
    }
}
