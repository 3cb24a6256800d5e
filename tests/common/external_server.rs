use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};

use axum::{Router, extract::{Query, State}, http::StatusCode, response::IntoResponse, routing::get};
use tokio::{sync::RwLock, task::JoinHandle};

pub const API_KEY: &str = "API_KEY";

const INVALID_KEY: &str = r#"{"status":"failure","reason":"Invalid API Key"}"#;

#[derive(Default)]
pub struct AppState {
    pub current_matches: String,
    pub matches: String,
    pub matches_status: Option<StatusCode>,
    pub match_info: HashMap<String, String>,
    pub requests: Vec<(String, HashMap<String, String>)>,
}

/// Stand-in for the CricAPI v1 endpoints, serving canned bodies and recording every request.
pub struct ExternalServer {
    port: u16,
    handles: Vec<JoinHandle<()>>,
    pub api_state: Arc<RwLock<AppState>>,
}

impl Drop for ExternalServer {
    fn drop(&mut self) {
        for e in &self.handles {
            e.abort();
        }
    }
}

impl ExternalServer {
    pub fn new(port: u16) -> ExternalServer {
        ExternalServer { port, handles: vec![], api_state: Arc::new(RwLock::new(AppState::default())) }
    }

    pub async fn start(&mut self) {
        let external_mock = {
            let port = self.port;
            let state = self.api_state.clone();
            tokio::spawn(async move { ExternalServer::serve_external_data(state, port).await })
        };
        self.handles.push(external_mock);

        tokio::time::sleep(Duration::from_millis(500)).await; // wait for mock to start
    }

    pub fn get_url(&self) -> String {
        format!("http://127.0.0.1:{}/v1", self.port)
    }

    pub async fn set_current_matches(&self, body: &str) {
        self.api_state.write().await.current_matches = body.to_string();
    }

    pub async fn set_matches(&self, body: &str) {
        self.api_state.write().await.matches = body.to_string();
    }

    pub async fn set_matches_with_status(&self, status: StatusCode, body: &str) {
        let mut state = self.api_state.write().await;
        state.matches = body.to_string();
        state.matches_status = Some(status);
    }

    pub async fn set_match_info(&self, id: &str, body: &str) {
        self.api_state.write().await.match_info.insert(id.to_string(), body.to_string());
    }

    pub async fn requests_to(&self, path: &str) -> Vec<HashMap<String, String>> {
        self.api_state.read().await.requests.iter()
            .filter(|(p, _)| p == path)
            .map(|(_, query)| query.clone())
            .collect()
    }

    async fn serve_external_data(state: Arc<RwLock<AppState>>, port: u16) {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let app = Router::new()
            .route("/v1/currentMatches", get(ExternalServer::get_current_matches))
            .route("/v1/matches", get(ExternalServer::get_matches))
            .route("/v1/match_info", get(ExternalServer::get_match_info))
            .with_state(state);

        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .unwrap();
    }

    async fn record(state: &Arc<RwLock<AppState>>, path: &str, query: &HashMap<String, String>) -> bool {
        state.write().await.requests.push((path.to_string(), query.clone()));
        query.get("apikey").map(|e| e == API_KEY).unwrap_or(false)
    }

    async fn get_current_matches(State(state): State<Arc<RwLock<AppState>>>, Query(query): Query<HashMap<String, String>>) -> impl IntoResponse {
        if !ExternalServer::record(&state, "currentMatches", &query).await {
            return (StatusCode::OK, INVALID_KEY.to_string());
        }
        (StatusCode::OK, state.read().await.current_matches.clone())
    }

    async fn get_matches(State(state): State<Arc<RwLock<AppState>>>, Query(query): Query<HashMap<String, String>>) -> impl IntoResponse {
        if !ExternalServer::record(&state, "matches", &query).await {
            return (StatusCode::OK, INVALID_KEY.to_string());
        }
        let guard = state.read().await;
        (guard.matches_status.unwrap_or(StatusCode::OK), guard.matches.clone())
    }

    async fn get_match_info(State(state): State<Arc<RwLock<AppState>>>, Query(query): Query<HashMap<String, String>>) -> impl IntoResponse {
        if !ExternalServer::record(&state, "match_info", &query).await {
            return (StatusCode::OK, INVALID_KEY.to_string());
        }
        let id = query.get("id").cloned().unwrap_or_default();
        match state.read().await.match_info.get(&id) {
            Some(body) => (StatusCode::OK, body.clone()),
            None => (StatusCode::NOT_FOUND, format!("No match {id}")),
        }
    }
}
