use crate::data::Competency;

/// Upper bound of the scoring scale; vectors hold integers in 0..=MAX_SCORE.
pub const MAX_SCORE: u8 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScoreStateError {
    #[error("competency index {index} out of range (set has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("score {value} out of range (expected 0..={MAX_SCORE})")]
    ValueOutOfRange { value: u8 },
}

/// Single source of truth for the evaluate section: the competency set and
/// the two parallel score vectors. Index i of either vector corresponds to
/// competency i; every operation here preserves that correspondence.
///
/// `revision` advances on every committed mutation and is the "changed"
/// signal of the component contract: the session redraws whenever it moves.
/// `set_generation` advances only when the competency set itself is
/// replaced, which is what gates full rebuilds of the slider panel.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    competencies: Vec<Competency>,
    self_scores: Vec<u8>,
    peer_scores: Option<Vec<Option<f64>>>,
    revision: u64,
    set_generation: u64,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a new competency set: self scores become all zeros, the
    /// peer vector is cleared. Prior scores never carry across a set change.
    pub fn initialize(&mut self, competencies: Vec<Competency>) {
        self.self_scores = vec![0; competencies.len()];
        self.peer_scores = None;
        self.competencies = competencies;
        self.set_generation += 1;
        self.revision += 1;
    }

    pub fn len(&self) -> usize {
        self.competencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competencies.is_empty()
    }

    pub fn competencies(&self) -> &[Competency] {
        &self.competencies
    }

    pub fn self_scores(&self) -> &[u8] {
        &self.self_scores
    }

    pub fn peer_scores(&self) -> Option<&[Option<f64>]> {
        self.peer_scores.as_deref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_generation(&self) -> u64 {
        self.set_generation
    }

    /// Out-of-range index or value is a caller bug (a stale index, not user
    /// input) and leaves the state untouched.
    pub fn set_self(&mut self, index: usize, value: u8) -> Result<(), ScoreStateError> {
        if index >= self.self_scores.len() {
            return Err(ScoreStateError::IndexOutOfRange {
                index,
                len: self.self_scores.len(),
            });
        }
        if value > MAX_SCORE {
            return Err(ScoreStateError::ValueOutOfRange { value });
        }
        self.self_scores[index] = value;
        self.revision += 1;
        Ok(())
    }

    pub fn reset_self(&mut self) {
        self.self_scores.fill(0);
        self.revision += 1;
    }

    /// Stores at most the first N peer values. Indices beyond the input
    /// length stay absent: downstream rendering distinguishes "no peer
    /// value" from "peer value of zero", so absent is never zero-filled.
    /// Returns how many entries were stored.
    pub fn set_peer(&mut self, values: &[f64]) -> usize {
        let n = self.competencies.len();
        let kept = values.len().min(n);
        let mut vector: Vec<Option<f64>> = vec![None; n];
        for (slot, value) in vector.iter_mut().zip(values.iter()) {
            *slot = Some(*value);
        }
        self.peer_scores = Some(vector);
        self.revision += 1;
        kept
    }

    pub fn clear_peer(&mut self) {
        self.peer_scores = None;
        self.revision += 1;
    }
}
