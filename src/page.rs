use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

pub const CURRENT_MATCHES: &str = "crntmatches";
pub const ALL_MATCHES: &str = "matches";
pub const MATCH_DETAILS: &str = "match-details";
pub const BTN_CURRENT: &str = "btn-current";
pub const BTN_ALL: &str = "btn-all";
pub const CLOSE_DETAILS: &str = "close-details";

pub type SafePage = Arc<RwLock<Page>>;

/// What a click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A per-card `details-btn`, carrying its `data-id`.
    DetailsButton { id: Option<String> },
    /// Any element addressed by its id, e.g. a trigger or `close-details`.
    Element(String),
}

impl ClickTarget {
    pub fn element(id: &str) -> ClickTarget {
        ClickTarget::Element(id.to_string())
    }
}

/// Rendered markup plus the clickable controls inside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    pub html: String,
    pub controls: Vec<ClickTarget>,
}

impl Fragment {
    pub fn new(html: String) -> Fragment {
        Fragment { html, controls: vec![] }
    }
}

#[derive(Debug, Clone, Default)]
struct Container {
    content: Fragment,
    hidden: bool,
}

#[derive(Debug, Default)]
pub struct Page {
    containers: HashMap<String, Container>,
    container_order: Vec<String>,
    triggers: HashSet<String>,
    trigger_order: Vec<String>,
    notifications: Vec<String>,
}

impl Page {
    pub fn new() -> Page {
        Page::default()
    }

    /// The layout the viewer is written against: both lists, a hidden details panel and two triggers.
    pub fn standard() -> Page {
        Page::new()
            .with_trigger(BTN_CURRENT)
            .with_trigger(BTN_ALL)
            .with_container(CURRENT_MATCHES)
            .with_container(ALL_MATCHES)
            .with_hidden_container(MATCH_DETAILS)
    }

    pub fn into_safe(self) -> SafePage {
        Arc::new(RwLock::new(self))
    }

    pub fn with_container(mut self, id: &str) -> Page {
        self.insert_container(id, false);
        self
    }

    pub fn with_hidden_container(mut self, id: &str) -> Page {
        self.insert_container(id, true);
        self
    }

    pub fn with_trigger(mut self, id: &str) -> Page {
        if self.triggers.insert(id.to_string()) {
            self.trigger_order.push(id.to_string());
        }
        self
    }

    fn insert_container(&mut self, id: &str, hidden: bool) {
        if self.containers.insert(id.to_string(), Container { hidden, ..Default::default() }).is_none() {
            self.container_order.push(id.to_string());
        }
    }

    pub fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    pub fn has_trigger(&self, id: &str) -> bool {
        self.triggers.contains(id)
    }

    pub fn html(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(|e| e.content.html.as_str())
    }

    pub fn controls(&self, id: &str) -> &[ClickTarget] {
        self.containers.get(id).map(|e| e.content.controls.as_slice()).unwrap_or_default()
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.containers.get(id).map(|e| e.hidden).unwrap_or(true)
    }

    /// Replaces the whole content of a container. Returns false when no such container exists.
    pub fn replace(&mut self, id: &str, content: Fragment) -> bool {
        match self.containers.get_mut(id) {
            Some(container) => {
                container.content = content;
                true
            },
            None => false,
        }
    }

    pub fn set_hidden(&mut self, id: &str, hidden: bool) {
        if let Some(container) = self.containers.get_mut(id) {
            container.hidden = hidden;
        }
    }

    /// Blocking user-facing notice, the page's equivalent of an alert box.
    pub fn notify(&mut self, msg: &str) {
        warn!("[PAGE] Notify: {msg}");
        self.notifications.push(msg.to_string());
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn render_document(&self) -> String {
        let mut body = String::new();
        for id in &self.trigger_order {
            let label = match id.as_str() {
                BTN_CURRENT => "Current matches",
                BTN_ALL => "All matches",
                other => other,
            };
            body.push_str(&format!("<button id=\"{id}\">{label}</button>\n"));
        }
        for id in &self.container_order {
            if let Some(container) = self.containers.get(id) {
                let class = if container.hidden { " class=\"hidden\"" } else { "" };
                body.push_str(&format!("<div id=\"{id}\"{class}>{}</div>\n", container.content.html));
            }
        }
        format!("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Cricket matches</title></head>\n<body>\n{body}</body>\n</html>\n")
    }
}
