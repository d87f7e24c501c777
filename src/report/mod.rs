pub mod html;
pub mod text;

use crate::state::ScoreState;

/// One table line of the printable summary, in competency-set order.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub theme: String,
    pub competency: String,
    pub self_score: u8,
    pub peer_score: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct SummaryData {
    pub role_name: String,
    pub rows: Vec<SummaryRow>,
    pub chart_png: Vec<u8>,
}

pub fn summary_rows(state: &ScoreState) -> Vec<SummaryRow> {
    let peer = state.peer_scores();
    state
        .competencies()
        .iter()
        .enumerate()
        .map(|(i, competency)| SummaryRow {
            theme: competency.theme.clone(),
            competency: competency.name.clone(),
            self_score: state.self_scores()[i],
            peer_score: peer.and_then(|values| values[i]),
        })
        .collect()
}

/// Blank for "no peer value"; a peer value of zero renders as "0".
pub fn format_peer_score(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => format!("{v}"),
    }
}
