use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use tracing::warn;

use crate::data::Role;
use crate::exchange::DEFAULT_EXPORT_FILE;
use crate::panel::SliderPanel;
use crate::report::html::render_summary_html;
use crate::session::EvalSession;
use crate::state::MAX_SCORE;

pub const CHART_FILE: &str = "radar-chart.png";
pub const SUMMARY_FILE: &str = "evaluation-summary.html";
const EXPORT_SIZE: u32 = 640;

/// Interactive state of the evaluate screen: the session, the slider
/// panel bound to it, and cursor/status bookkeeping.
pub struct App {
    pub session: EvalSession,
    pub panel: SliderPanel,
    pub selected: usize,
    pub status: String,
    pub peer_path: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: EvalSession, peer_path: Option<PathBuf>, out_dir: PathBuf) -> Self {
        let mut app = Self {
            session,
            panel: SliderPanel::new(),
            selected: 0,
            status: String::from("arrows adjust, e export, i import peer, q quit"),
            peer_path,
            out_dir,
            should_quit: false,
        };
        app.panel.sync(app.session.state());
        if app.peer_path.is_some() {
            app.import_peer();
        }
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.adjust(-1),
            KeyCode::Right | KeyCode::Char('l') => self.adjust(1),
            KeyCode::Char(c @ '0'..='5') => self.set_selected(c as u8 - b'0'),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('e') => self.export(),
            KeyCode::Char('s') => self.save_chart(),
            KeyCode::Char('m') => self.save_summary(),
            KeyCode::Char('i') => self.import_peer(),
            KeyCode::Char('c') => self.clear_peer(),
            KeyCode::F(n) => self.switch_role_slot(n as usize),
            _ => {}
        }
    }

    fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.panel.len() {
            self.selected += 1;
        }
    }

    fn adjust(&mut self, delta: i8) {
        let Some(row) = self.panel.rows().get(self.selected) else {
            return;
        };
        let current = row.value as i8;
        let next = (current + delta).clamp(0, MAX_SCORE as i8) as u8;
        if next != row.value {
            self.set_selected(next);
        }
    }

    fn set_selected(&mut self, value: u8) {
        let index = self.selected;
        match self.panel.edit(&mut self.session, index, value) {
            Ok(()) => self.status = format!("score {} -> {}", index + 1, value),
            Err(err) => {
                warn!(error = %err, "rejected slider edit");
                self.status = err.to_string();
            }
        }
    }

    fn reset(&mut self) {
        self.panel.reset(&mut self.session);
        self.status = String::from("scores reset");
    }

    pub fn switch_role_slot(&mut self, slot: usize) {
        let Some(role) = slot
            .checked_sub(1)
            .and_then(|i| Role::ALL.get(i).copied())
        else {
            return;
        };
        self.session.load_role(role);
        self.panel.sync(self.session.state());
        self.selected = 0;
        self.status = format!("role: {}", role.display_name());
    }

    fn export(&mut self) {
        let path = self.out_dir.join(DEFAULT_EXPORT_FILE);
        let result = self
            .session
            .export_self()
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(&path, json).map_err(|e| e.to_string()));
        self.status = match result {
            Ok(()) => format!("exported {}", path.display()),
            Err(err) => format!("export failed: {err}"),
        };
    }

    fn save_chart(&mut self) {
        let path = self.out_dir.join(CHART_FILE);
        let result = self
            .session
            .chart_png(EXPORT_SIZE, EXPORT_SIZE)
            .and_then(|png| std::fs::write(&path, png));
        self.status = match result {
            Ok(()) => format!("saved {}", path.display()),
            Err(err) => format!("chart save failed: {err}"),
        };
    }

    fn save_summary(&mut self) {
        let path = self.out_dir.join(SUMMARY_FILE);
        let result = self
            .session
            .summary(EXPORT_SIZE, EXPORT_SIZE)
            .map(|data| render_summary_html(&data))
            .and_then(|html| std::fs::write(&path, html));
        self.status = match result {
            Ok(()) => format!("saved {}", path.display()),
            Err(err) => format!("summary failed: {err}"),
        };
    }

    fn import_peer(&mut self) {
        let Some(path) = self.peer_path.clone() else {
            self.status = String::from("no peer file configured (use --peer)");
            return;
        };
        let result = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|text| self.session.import_peer(&text).map_err(|e| e.to_string()));
        self.status = match result {
            Ok(kept) => format!("imported {} peer scores from {}", kept, path.display()),
            Err(err) => format!("peer import failed: {err}"),
        };
    }

    fn clear_peer(&mut self) {
        self.session.clear_peer();
        self.status = String::from("peer scores cleared");
    }
}
