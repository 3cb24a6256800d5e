use std::fmt::Display;
use std::future::Future;
use std::time::Instant;

use serde_json::Value;
use tracing::info;

use crate::config_handler::Config;
use crate::error::ViewerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    CurrentMatches,
    Matches,
    MatchInfo(String),
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::CurrentMatches => "currentMatches",
            Endpoint::Matches => "matches",
            Endpoint::MatchInfo(_) => "match_info",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::MatchInfo(id) => write!(f, "{}?id={}", self.path(), id),
            _ => write!(f, "{}", self.path()),
        }
    }
}

/// Anything that can answer an endpoint with a json body.
pub trait JsonSource: Send + Sync + 'static {
    fn get_json(&self, endpoint: &Endpoint) -> impl Future<Output = Result<Value, ViewerError>> + Send;
}

pub struct RestClient {
    client: reqwest::Client,
    config: Config,
}

impl RestClient {
    pub fn new(config: &Config) -> RestClient {
        RestClient { client: reqwest::Client::new(), config: config.clone() }
    }

    fn query(&self, endpoint: &Endpoint) -> Vec<(&'static str, String)> {
        let mut query = vec![("apikey", self.config.api_key.clone())];
        match endpoint {
            Endpoint::MatchInfo(id) => query.push(("id", id.clone())),
            Endpoint::CurrentMatches | Endpoint::Matches => query.push(("offset", self.config.offset.to_string())),
        }
        query
    }
}

impl JsonSource for RestClient {
    async fn get_json(&self, endpoint: &Endpoint) -> Result<Value, ViewerError> {
        let before = Instant::now();
        let url = self.config.get_url(endpoint.path());
        let rsp = self.client.get(&url)
            .query(&self.query(endpoint))
            .send()
            .await?;
        let status = rsp.status();
        let body = rsp.text().await?;
        let value = serde_json::from_str(&body)?;
        info!("[REST] Call {endpoint} {status} {:.2?}", before.elapsed());
        Ok(value)
    }
}
