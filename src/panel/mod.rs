use crate::session::EvalSession;
use crate::state::{ScoreState, ScoreStateError};

/// One slider control: competency label plus the current numeric readout.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderRow {
    pub index: usize,
    pub name: String,
    pub theme: String,
    pub description: Option<String>,
    pub value: u8,
}

/// View-model over the self vector: one row per competency in set order.
/// Rebuilds happen only when the competency set itself changed (tracked by
/// the state's set generation), so repeated syncs are idempotent; a single
/// edit updates that row's readout and nothing else.
#[derive(Debug, Default)]
pub struct SliderPanel {
    rows: Vec<SliderRow>,
    built_generation: Option<u64>,
}

impl SliderPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[SliderRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rebuilds if the competency set moved since the last build; returns
    /// whether a rebuild happened.
    pub fn sync(&mut self, state: &ScoreState) -> bool {
        if self.built_generation == Some(state.set_generation()) {
            return false;
        }
        self.rebuild(state);
        true
    }

    /// Unconditional full rebuild from the current state.
    pub fn rebuild(&mut self, state: &ScoreState) {
        self.rows = state
            .competencies()
            .iter()
            .enumerate()
            .map(|(index, competency)| SliderRow {
                index,
                name: competency.name.clone(),
                theme: competency.theme.clone(),
                description: competency.description.clone(),
                value: state.self_scores()[index],
            })
            .collect();
        self.built_generation = Some(state.set_generation());
    }

    /// Write-through edit: commits to the session immediately, then updates
    /// this row's readout only. No full rebuild.
    pub fn edit(
        &mut self,
        session: &mut EvalSession,
        index: usize,
        value: u8,
    ) -> Result<(), ScoreStateError> {
        session.set_self(index, value)?;
        if let Some(row) = self.rows.get_mut(index) {
            row.value = value;
        }
        Ok(())
    }

    /// The reset action: zero the self vector, then rebuild every row.
    pub fn reset(&mut self, session: &mut EvalSession) {
        session.reset_self();
        self.rebuild(session.state());
    }
}
