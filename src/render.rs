use crate::models::{pretty_json, MatchDetail, MatchSummary, Scores};
use crate::page::{ClickTarget, Fragment, CLOSE_DETAILS};

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

pub fn message(msg: &str, class: &str) -> Fragment {
    Fragment::new(format!("<p class=\"{}\">{}</p>", escape_html(class), escape_html(msg)))
}

pub fn match_card(summary: &MatchSummary) -> String {
    let id = summary.id();
    format!(
        r#"<div class="match-card">
    <h3>{}</h3>
    <p><strong>{}</strong> vs <strong>{}</strong></p>
    <p>{}</p>
    <p>{}</p>
    <button class="details-btn" data-id="{}">View details</button>
</div>
"#,
        escape_html(&summary.title()),
        escape_html(&summary.team1()),
        escape_html(&summary.team2()),
        escape_html(&summary.status()),
        escape_html(&summary.score()),
        escape_html(&id),
    )
}

/// One card per summary, in order. Every card gets a details control, even without an id.
pub fn match_cards(summaries: &[MatchSummary]) -> Fragment {
    let html = summaries.iter().map(match_card).collect::<String>();
    let controls = summaries.iter()
        .map(|e| ClickTarget::DetailsButton { id: Some(e.id()) })
        .collect();
    Fragment { html, controls }
}

fn scores_html(scores: &Scores) -> String {
    match scores {
        Scores::Innings(innings) => innings.iter()
            .map(|e| format!(
                "<div class=\"innings\"><h4>{}</h4><p>{}</p></div>",
                escape_html(&e.title),
                escape_html(&e.score),
            ))
            .collect(),
        Scores::Structured(value) => format!("<pre>{}</pre>", escape_html(&pretty_json(value))),
        Scores::Plain(text) => format!("<p>{}</p>", escape_html(text)),
    }
}

pub fn match_details(detail: &MatchDetail) -> Fragment {
    let html = format!(
        r#"<button id="{CLOSE_DETAILS}">Close</button>
<h2>{}</h2>
<p><strong>Status:</strong> {}</p>
<p><strong>Toss:</strong> {}</p>
<div class="scores">{}</div>
<details>
    <summary>Raw response</summary>
    <pre>{}</pre>
</details>
"#,
        escape_html(&detail.title()),
        escape_html(&detail.status()),
        escape_html(&detail.toss()),
        scores_html(&detail.scores()),
        escape_html(&pretty_json(&detail.details)),
    );
    Fragment { html, controls: vec![ClickTarget::element(CLOSE_DETAILS)] }
}
