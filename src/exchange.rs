use serde::{Deserialize, Serialize};

use crate::state::ScoreState;

pub const EXPORT_LABEL: &str = "Self";
pub const DEFAULT_EXPORT_FILE: &str = "scores-self.json";

/// Portable score document. Exports always carry all three fields; imports
/// only require `scores` and ignore anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDocument {
    pub label: String,
    pub scores: Vec<u8>,
    pub competencies: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("could not read JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("document has no \"scores\" array")]
    MissingScores,
    #[error("\"scores\" entry {0} is not a number")]
    NonNumericScore(usize),
}

pub fn export_document(state: &ScoreState) -> ScoreDocument {
    ScoreDocument {
        label: EXPORT_LABEL.to_string(),
        scores: state.self_scores().to_vec(),
        competencies: state
            .competencies()
            .iter()
            .map(|c| c.name.clone())
            .collect(),
    }
}

pub fn export_json(state: &ScoreState) -> Result<String, ExchangeError> {
    Ok(serde_json::to_string_pretty(&export_document(state))?)
}

/// Parses a peer document. The whole document is rejected on any defect;
/// a partially-numeric `scores` array is never partially applied.
pub fn parse_peer_scores(text: &str) -> Result<Vec<f64>, ExchangeError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let scores = value
        .get("scores")
        .and_then(|v| v.as_array())
        .ok_or(ExchangeError::MissingScores)?;
    scores
        .iter()
        .enumerate()
        .map(|(i, entry)| entry.as_f64().ok_or(ExchangeError::NonNumericScore(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::defaults::default_competencies;

    fn loaded_state() -> ScoreState {
        let mut state = ScoreState::new();
        state.initialize(default_competencies());
        state
    }

    #[test]
    fn test_export_shape() {
        let mut state = loaded_state();
        state.set_self(0, 2).unwrap();
        state.set_self(1, 4).unwrap();
        let doc = export_document(&state);
        assert_eq!(doc.label, "Self");
        assert_eq!(doc.scores, vec![2, 4, 0, 0, 0, 0]);
        assert_eq!(doc.competencies.len(), 6);
        assert_eq!(doc.competencies[0], "End-to-End Ownership");
    }

    #[test]
    fn test_round_trip_reproduces_self_as_peer() {
        let mut state = loaded_state();
        for (i, v) in [2u8, 4, 1, 5, 0, 3].iter().enumerate() {
            state.set_self(i, *v).unwrap();
        }
        let json = export_json(&state).unwrap();
        let peer = parse_peer_scores(&json).unwrap();
        state.set_peer(&peer);
        let stored: Vec<Option<f64>> = state.peer_scores().unwrap().to_vec();
        assert_eq!(
            stored,
            vec![
                Some(2.0),
                Some(4.0),
                Some(1.0),
                Some(5.0),
                Some(0.0),
                Some(3.0)
            ]
        );
    }

    #[test]
    fn test_import_ignores_extra_fields() {
        let peer = parse_peer_scores(r#"{"scores":[1,2],"label":"Peer","notes":"x"}"#).unwrap();
        assert_eq!(peer, vec![1.0, 2.0]);
    }

    #[test]
    fn test_import_rejects_missing_scores() {
        let err = parse_peer_scores(r#"{"foo":1}"#).unwrap_err();
        assert!(matches!(err, ExchangeError::MissingScores));
    }

    #[test]
    fn test_import_rejects_non_array_scores() {
        let err = parse_peer_scores(r#"{"scores":5}"#).unwrap_err();
        assert!(matches!(err, ExchangeError::MissingScores));
    }

    #[test]
    fn test_import_rejects_non_numeric_entry() {
        let err = parse_peer_scores(r#"{"scores":[1,"two",3]}"#).unwrap_err();
        assert!(matches!(err, ExchangeError::NonNumericScore(1)));
    }

    #[test]
    fn test_import_rejects_invalid_json() {
        let err = parse_peer_scores("{not json").unwrap_err();
        assert!(matches!(err, ExchangeError::Json(_)));
    }

    #[test]
    fn test_export_json_is_pretty_printed() {
        let state = loaded_state();
        let json = export_json(&state).unwrap();
        assert!(json.contains("\n  \"label\": \"Self\""));
    }
}
