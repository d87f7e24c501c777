use std::path::PathBuf;

use tracing::{debug, info};

use crate::data::{self, Role, RoleData, RubricEntry};
use crate::exchange::{self, ExchangeError};
use crate::radar::raster::Canvas;
use crate::radar::{self, Theme, png};
use crate::report::{SummaryData, summary_rows};
use crate::state::{ScoreState, ScoreStateError};

/// Proof of a load request. A ticket is only honored while its generation
/// is still current, so a load that was overtaken by a later role change
/// can never overwrite the newer role's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    role: Role,
    generation: u64,
}

impl LoadTicket {
    pub fn role(&self) -> Role {
        self.role
    }
}

/// Owns the evaluate section: role selection, score state, the rubric, and
/// an optional render surface. Every committed mutation redraws the
/// attached surface before returning, so the surface never shows a stale
/// frame; with no surface attached, rendering is a no-op.
#[derive(Debug)]
pub struct EvalSession {
    data_dir: PathBuf,
    role: Role,
    load_generation: u64,
    state: ScoreState,
    rubric: Vec<RubricEntry>,
    theme: Theme,
    surface: Option<Canvas>,
    drawn_revision: Option<u64>,
}

impl EvalSession {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            role: Role::default(),
            load_generation: 0,
            state: ScoreState::new(),
            rubric: Vec::new(),
            theme: Theme::default(),
            surface: None,
            drawn_revision: None,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn state(&self) -> &ScoreState {
        &self.state
    }

    pub fn rubric(&self) -> &[RubricEntry] {
        &self.rubric
    }

    pub fn surface(&self) -> Option<&Canvas> {
        self.surface.as_ref()
    }

    pub fn attach_surface(&mut self, width: u32, height: u32) {
        self.surface = Some(Canvas::new(width, height));
        self.drawn_revision = None;
        self.redraw();
    }

    pub fn detach_surface(&mut self) {
        self.surface = None;
        self.drawn_revision = None;
    }

    /// Marks `role` as the current selection and hands back the ticket the
    /// eventual load completion must present.
    pub fn select_role(&mut self, role: Role) -> LoadTicket {
        self.role = role;
        self.load_generation += 1;
        LoadTicket {
            role,
            generation: self.load_generation,
        }
    }

    /// Installs loaded role data. Returns false (and changes nothing) when
    /// the ticket was superseded by a later `select_role`.
    pub fn commit_load(&mut self, ticket: LoadTicket, data: RoleData) -> bool {
        if ticket.generation != self.load_generation || ticket.role != self.role {
            debug!(
                stale = %ticket.role(),
                current = %self.role,
                "discarding superseded role load"
            );
            return false;
        }
        self.state.initialize(data.competencies);
        self.rubric = data.rubric;
        info!(role = %self.role, competencies = self.state.len(), "role data committed");
        self.redraw();
        true
    }

    /// Select-load-commit in one step for synchronous callers.
    pub fn load_role(&mut self, role: Role) {
        let ticket = self.select_role(role);
        let data = data::load_role_data(&self.data_dir, role);
        self.commit_load(ticket, data);
    }

    pub fn set_self(&mut self, index: usize, value: u8) -> Result<(), ScoreStateError> {
        self.state.set_self(index, value)?;
        self.redraw();
        Ok(())
    }

    pub fn reset_self(&mut self) {
        self.state.reset_self();
        self.redraw();
    }

    /// Parses and applies a peer score document. Returns how many entries
    /// were stored; a malformed document leaves the peer vector untouched.
    pub fn import_peer(&mut self, text: &str) -> Result<usize, ExchangeError> {
        let scores = exchange::parse_peer_scores(text)?;
        let kept = self.state.set_peer(&scores);
        self.redraw();
        Ok(kept)
    }

    pub fn clear_peer(&mut self) {
        self.state.clear_peer();
        self.redraw();
    }

    pub fn export_self(&self) -> Result<String, ExchangeError> {
        exchange::export_json(&self.state)
    }

    /// Fresh frame at the requested size, independent of the attached
    /// surface.
    pub fn chart_png(&self, width: u32, height: u32) -> std::io::Result<Vec<u8>> {
        let canvas = radar::render_chart(&self.state, &self.theme, width, height);
        png::encode_png(&canvas)
    }

    pub fn summary(&self, width: u32, height: u32) -> std::io::Result<SummaryData> {
        Ok(SummaryData {
            role_name: self.role.display_name().to_string(),
            rows: summary_rows(&self.state),
            chart_png: self.chart_png(width, height)?,
        })
    }

    /// Re-renders the attached surface. Skips the draw when the surface
    /// already shows the current revision, so repeated invocations without
    /// an intervening mutation are free.
    fn redraw(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if self.drawn_revision == Some(self.state.revision()) {
            return;
        }
        radar::render(&self.state, &self.theme, surface);
        self.drawn_revision = Some(self.state.revision());
    }
}
