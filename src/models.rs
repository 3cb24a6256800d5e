use serde_json::{Map, Value};

/// Ordered candidate keys for one logical field. The first key holding a truthy value wins.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    keys: &'static [&'static str],
}

impl Field {
    pub const fn new(keys: &'static [&'static str]) -> Field {
        Field { keys }
    }

    pub fn resolve<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        self.keys.iter()
            .filter_map(|key| value.get(*key))
            .find(|e| is_truthy(e))
    }

    pub fn resolve_str(&self, value: &Value) -> Option<String> {
        self.resolve(value).map(display_value)
    }
}

pub const TEAM_1: Field = Field::new(&["team-1", "team1", "teamA"]);
pub const TEAM_2: Field = Field::new(&["team-2", "team2", "teamB"]);
pub const TITLE: Field = Field::new(&["name", "title"]);
pub const STATUS: Field = Field::new(&["status"]);
pub const MATCH_STARTED: Field = Field::new(&["matchStarted"]);
pub const ID: Field = Field::new(&["id", "unique_id", "match_id"]);
pub const SCORE: Field = Field::new(&["score"]);
pub const TOSS: Field = Field::new(&["toss", "toss_winner"]);
pub const SCORES: Field = Field::new(&["score", "scores", "innings"]);
pub const DETAIL_WRAPPER: Field = Field::new(&["match", "data"]);
pub const INNING_TITLE: Field = Field::new(&["title", "inning"]);
pub const INNING_SCORE: Field = Field::new(&["score", "runs"]);

/// Loose truthiness: null, false, zero, NaN and "" count as missing.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text shown for a value of unknown type. Structured values fall back to compact json.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_owned(),
        Value::Null => String::new(),
        Value::Number(n) => match n.as_f64() {
            // whole floats read like integers, 250.0 shows as 250
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn resolve_team1(value: &Value) -> String {
    TEAM_1.resolve_str(value).unwrap_or_else(|| "Team 1".to_string())
}

fn resolve_team2(value: &Value) -> String {
    TEAM_2.resolve_str(value).unwrap_or_else(|| "Team 2".to_string())
}

fn resolve_title(value: &Value) -> String {
    TITLE.resolve_str(value)
        .unwrap_or_else(|| format!("{} vs {}", resolve_team1(value), resolve_team2(value)))
}

fn resolve_status(value: &Value) -> String {
    match STATUS.resolve_str(value) {
        Some(status) => status,
        None if MATCH_STARTED.resolve(value).is_some() => "Live".to_string(),
        None => "Scheduled".to_string(),
    }
}

/// Picks the match list out of a list response, whatever envelope the API used.
pub fn normalize(response: &Value) -> Vec<MatchSummary> {
    let list = match response {
        Value::Null => None,
        Value::Array(list) => Some(list),
        other => ["data", "matches"].iter()
            .find_map(|key| other.get(*key).and_then(Value::as_array)),
    };
    list.map(|e| e.iter().cloned().map(MatchSummary).collect())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary(pub Value);

impl MatchSummary {
    pub fn team1(&self) -> String {
        resolve_team1(&self.0)
    }

    pub fn team2(&self) -> String {
        resolve_team2(&self.0)
    }

    pub fn title(&self) -> String {
        resolve_title(&self.0)
    }

    pub fn status(&self) -> String {
        resolve_status(&self.0)
    }

    pub fn id(&self) -> String {
        ID.resolve_str(&self.0).unwrap_or_default()
    }

    pub fn score(&self) -> String {
        SCORE.resolve_str(&self.0).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Inning {
    pub title: String,
    pub score: String,
}

impl From<&Value> for Inning {
    fn from(value: &Value) -> Self {
        Inning {
            title: INNING_TITLE.resolve_str(value).unwrap_or_default(),
            score: INNING_SCORE.resolve_str(value).unwrap_or_else(|| value.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scores {
    Innings(Vec<Inning>),
    Structured(Value),
    Plain(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchDetail {
    pub details: Value,
}

impl MatchDetail {
    /// Unwraps `match`, then `data`, then falls back to the response itself.
    pub fn from_response(response: Value) -> MatchDetail {
        let details = match DETAIL_WRAPPER.resolve(&response) {
            Some(inner) => inner.clone(),
            None if response.is_null() => Value::Object(Map::new()),
            None => response,
        };
        MatchDetail { details }
    }

    pub fn title(&self) -> String {
        resolve_title(&self.details)
    }

    pub fn status(&self) -> String {
        resolve_status(&self.details)
    }

    pub fn toss(&self) -> String {
        TOSS.resolve_str(&self.details).unwrap_or_default()
    }

    pub fn scores(&self) -> Scores {
        match SCORES.resolve(&self.details) {
            None => Scores::Innings(vec![]),
            Some(Value::Array(list)) => Scores::Innings(list.iter().map(Inning::from).collect()),
            Some(obj @ Value::Object(_)) => Scores::Structured(obj.clone()),
            Some(other) => Scores::Plain(display_value(other)),
        }
    }
}
