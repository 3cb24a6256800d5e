use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default="default_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub offset: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config { api_url: default_api_url(), api_key: String::new(), offset: 0 }
    }
}

fn default_api_url() -> String {
    "https://api.cricapi.com/v1".to_string()
}

impl Config {
    pub fn get_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), path)
    }
}

pub fn get_config() -> anyhow::Result<Config> {
    let path = std::env::var("CONFIG_PATH").ok()
        .unwrap_or_else(|| "./deployment/config.json".to_string());
    let mut result = read_config(&path)?;
    if let Ok(api_key) = std::env::var("CRICAPI_KEY") {
        result.api_key = api_key;
        info!("[CONFIG] CRICAPI_KEY from env");
    }
    info!("[CONFIG] api_url {} offset {}", result.api_url, result.offset);
    Ok(result)
}

pub fn read_config(path: &str) -> anyhow::Result<Config> {
    if !Path::new(path).exists() {
        info!("[CONFIG] No file at {path}, using defaults");
        return Ok(Config::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("Unable to read {path}"))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Could not parse JSON at {path}!"))
}
