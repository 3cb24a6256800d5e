use assert_cmd::{assert::Assert, prelude::{CommandCargoExt, OutputAssertExt}};
use cricket_viewer::config_handler::Config;
use std::process::Command;

/// Runs the host binary once against the given api, with its config written to `path`.
pub struct ViewerHost;

impl ViewerHost {
    pub fn run(path: &str, external_url: &str, api_key: &str) -> Assert {
        let config = Config {
            api_url: external_url.to_string(),
            api_key: api_key.to_string(),
            offset: 0,
        };

        let config_str = serde_json::to_string(&config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), config_str).unwrap();
        Command::cargo_bin("cricket-viewer")
            .unwrap()
            .env("CONFIG_PATH", config_path)
            .env_remove("CRICAPI_KEY")
            .assert()
    }
}
