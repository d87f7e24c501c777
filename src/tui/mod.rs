pub mod app;
pub mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::data::Role;
use crate::session::EvalSession;
use app::App;

const TICK_RATE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone)]
pub struct TuiOptions {
    pub data_dir: PathBuf,
    pub role: Role,
    pub peer_path: Option<PathBuf>,
}

/// Full-screen evaluate view. The terminal is restored even when the loop
/// exits with an error.
pub fn run(options: TuiOptions) -> io::Result<()> {
    let mut session = EvalSession::new(&options.data_dir);
    session.load_role(options.role);
    let mut app = App::new(session, options.peer_path, PathBuf::from("."));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
