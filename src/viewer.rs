use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::ViewerError;
use crate::models::{normalize, MatchDetail};
use crate::page::{ClickTarget, SafePage, ALL_MATCHES, BTN_ALL, BTN_CURRENT, CLOSE_DETAILS, CURRENT_MATCHES, MATCH_DETAILS};
use crate::render;
use crate::rest_client::{Endpoint, JsonSource, RestClient};
use crate::LogResult;

/// The two match lists. They only differ in endpoint, container and wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchList {
    Current,
    All,
}

impl MatchList {
    pub fn get_all() -> Vec<MatchList> {
        vec![MatchList::Current, MatchList::All]
    }

    pub fn from_trigger(id: &str) -> Option<MatchList> {
        MatchList::get_all().into_iter().find(|e| e.trigger() == id)
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            MatchList::Current => Endpoint::CurrentMatches,
            MatchList::All => Endpoint::Matches,
        }
    }

    pub fn container(&self) -> &'static str {
        match self {
            MatchList::Current => CURRENT_MATCHES,
            MatchList::All => ALL_MATCHES,
        }
    }

    pub fn trigger(&self) -> &'static str {
        match self {
            MatchList::Current => BTN_CURRENT,
            MatchList::All => BTN_ALL,
        }
    }

    fn loading_msg(&self) -> &'static str {
        match self {
            MatchList::Current => "Loading current matches…",
            MatchList::All => "Loading matches…",
        }
    }

    fn empty_msg(&self) -> &'static str {
        match self {
            MatchList::Current => "No current matches found.",
            MatchList::All => "No matches found.",
        }
    }

    fn error_msg(&self) -> &'static str {
        match self {
            MatchList::Current => "Error fetching current matches",
            MatchList::All => "Error fetching matches",
        }
    }
}

pub const MISSING_ID_MSG: &str = "No ID available for this match.";

/// Owns the page for its whole lifetime: fetches, renders and reacts to clicks.
///
/// Overlapping fetches into the same container are not sequenced; whichever
/// completes last leaves its content behind.
pub struct MatchViewer<S: JsonSource = RestClient> {
    source: Arc<S>,
    page: SafePage,
    bound: Arc<RwLock<HashSet<MatchList>>>,
}

impl<S: JsonSource> Clone for MatchViewer<S> {
    fn clone(&self) -> Self {
        MatchViewer { source: self.source.clone(), page: self.page.clone(), bound: self.bound.clone() }
    }
}

impl<S: JsonSource> MatchViewer<S> {
    pub fn new(source: S, page: SafePage) -> MatchViewer<S> {
        MatchViewer { source: Arc::new(source), page, bound: Arc::new(RwLock::new(HashSet::new())) }
    }

    pub fn page(&self) -> SafePage {
        self.page.clone()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn is_bound(&self, list: MatchList) -> bool {
        self.bound.read().await.contains(&list)
    }

    pub async fn fetch_current_matches(&self) {
        self.fetch_list(MatchList::Current).await
    }

    pub async fn fetch_matches(&self) {
        self.fetch_list(MatchList::All).await
    }

    pub async fn fetch_list(&self, list: MatchList) {
        let container = list.container();
        self.page.write().await.replace(container, render::message(list.loading_msg(), "loading"));

        let Some(rsp) = self.source.get_json(&list.endpoint()).await.ok_log(&format!("[VIEWER] {}", list.error_msg())) else {
            self.page.write().await.replace(container, render::message(list.error_msg(), "error"));
            return;
        };

        let matches = normalize(&rsp);
        info!("[VIEWER] {} matches for #{container}", matches.len());
        let fragment = if matches.is_empty() {
            render::message(list.empty_msg(), "empty")
        } else {
            render::match_cards(&matches)
        };
        self.page.write().await.replace(container, fragment);
    }

    pub async fn fetch_match_details(&self, id: &str) {
        {
            let mut page = self.page.write().await;
            if !page.has_container(MATCH_DETAILS) {
                return;
            }
            page.set_hidden(MATCH_DETAILS, false);
            page.replace(MATCH_DETAILS, render::message("Loading details…", "loading"));
        }

        let fragment = match self.source.get_json(&Endpoint::MatchInfo(id.to_string())).await.ok_log("[VIEWER] Error loading details") {
            Some(rsp) => render::match_details(&MatchDetail::from_response(rsp)),
            None => render::message("Error loading details", "error"),
        };
        self.page.write().await.replace(MATCH_DETAILS, fragment);
    }

    /// Single delegated click handler for everything on the page.
    pub async fn handle_click(&self, target: &ClickTarget) {
        match target {
            ClickTarget::DetailsButton { id } => match details_id(id.as_deref()) {
                Ok(id) => self.fetch_match_details(id).await,
                Err(e) => {
                    warn!("[VIEWER] Details click ignored: {e}");
                    self.page.write().await.notify(MISSING_ID_MSG);
                },
            },
            ClickTarget::Element(id) if id == CLOSE_DETAILS => {
                self.page.write().await.set_hidden(MATCH_DETAILS, true);
            },
            ClickTarget::Element(id) => {
                if let Some(list) = MatchList::from_trigger(id) {
                    if self.is_bound(list).await {
                        self.fetch_list(list).await;
                    }
                }
            },
        }
    }

    /// Binds the triggers present on the page, then loads the current matches once.
    pub async fn on_ready(&self) {
        let present: Vec<MatchList> = {
            let page = self.page.read().await;
            MatchList::get_all().into_iter().filter(|e| page.has_trigger(e.trigger())).collect()
        };
        for list in &present {
            info!("[VIEWER] Bound #{}", list.trigger());
        }
        self.bound.write().await.extend(present);

        self.fetch_current_matches().await;
    }
}

fn details_id(id: Option<&str>) -> Result<&str, ViewerError> {
    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ViewerError::MissingIdentifier),
    }
}
