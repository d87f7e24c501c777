use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas as ChartCanvas, Line as ChartLine};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::radar::geometry::RadarGeometry;
use crate::state::MAX_SCORE;
use crate::tui::app::App;

const SELF_COLOR: Color = Color::Rgb(224, 31, 45);
const PEER_COLOR: Color = Color::Rgb(31, 119, 180);
const GRID_COLOR: Color = Color::DarkGray;

// Virtual chart space for the terminal canvas; the widget scales it to
// whatever cells are available.
const CHART_SPACE: u32 = 200;

pub fn draw(frame: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(frame.area());

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(4),
            Constraint::Length(7),
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(columns[1]);

    draw_sliders(frame, app, left[0]);
    draw_detail(frame, app, left[1]);
    draw_rubric(frame, app, left[2]);
    draw_radar(frame, app, right[0]);
    draw_status(frame, app, right[1]);
    draw_help(frame, right[2]);
}

fn draw_sliders(frame: &mut Frame, app: &App, area: Rect) {
    if app.panel.is_empty() {
        let empty = Paragraph::new("No competencies loaded.")
            .block(Block::default().borders(Borders::ALL).title(" Self-evaluation "));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .panel
        .rows()
        .iter()
        .map(|row| {
            let filled = row.value as usize;
            let bar: String = "#".repeat(filled) + &".".repeat(MAX_SCORE as usize - filled);
            ListItem::new(Line::from(vec![
                Span::styled(format!("[{bar}] "), Style::default().fg(SELF_COLOR)),
                Span::raw(format!("{} ", row.value)),
                Span::raw(row.name.clone()),
            ]))
        })
        .collect();

    let title = format!(" Self-evaluation: {} ", app.session.role().display_name());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_detail(frame: &mut Frame, app: &App, area: Rect) {
    let body = match app.panel.rows().get(app.selected) {
        Some(row) => {
            let description = row.description.as_deref().unwrap_or("");
            format!("{} - {}", row.theme, description)
        }
        None => String::new(),
    };
    let detail = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Competency "));
    frame.render_widget(detail, area);
}

fn draw_rubric(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .session
        .rubric()
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", entry.score),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(entry.label.clone()),
            ])
        })
        .collect();
    let rubric = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Rubric "));
    frame.render_widget(rubric, area);
}

fn draw_radar(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.session.state();
    let geo = RadarGeometry::new(CHART_SPACE, CHART_SPACE, state.len());
    let self_values: Vec<f32> = state.self_scores().iter().map(|&v| v as f32).collect();
    let peer_values: Option<Vec<f32>> = state.peer_scores().map(|peer| {
        peer.iter()
            .map(|entry| entry.map(|v| v as f32).unwrap_or(0.0))
            .collect()
    });
    let labels: Vec<String> = state
        .competencies()
        .iter()
        .map(|c| truncate(&c.name, 16))
        .collect();

    let title = if state.is_empty() {
        " Radar (placeholder axes) "
    } else {
        " Radar "
    };
    let chart = ChartCanvas::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_bounds([0.0, CHART_SPACE as f64])
        .y_bounds([0.0, CHART_SPACE as f64])
        .paint(move |ctx| {
            for level in 1..=MAX_SCORE {
                paint_loop(ctx, &geo.grid_ring(level), GRID_COLOR);
            }
            for axis in 0..geo.axes {
                let (x, y) = geo.axis_end(axis);
                paint_segment(ctx, (geo.cx, geo.cy), (x, y), GRID_COLOR);
            }
            for (axis, label) in labels.iter().enumerate() {
                let (x, y) = geo.label_anchor(axis);
                ctx.print(
                    x as f64 - label.len() as f64,
                    flip(y),
                    Line::from(Span::styled(label.clone(), Style::default().fg(Color::Gray))),
                );
            }
            paint_loop(ctx, &geo.score_polygon(&self_values), SELF_COLOR);
            if let Some(values) = &peer_values {
                paint_loop(ctx, &geo.score_polygon(values), PEER_COLOR);
            }
        });
    frame.render_widget(chart, area);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let peer = if app.session.state().peer_scores().is_some() {
        "peer overlay on"
    } else {
        "no peer data"
    };
    let status = Paragraph::new(format!("{} | {}", app.status, peer))
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    frame.render_widget(status, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "arrows/0-5 score  r reset  e export  i import  c clear peer  s png  m summary  F1-F3 role  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

// The raster geometry has y growing down; the terminal canvas grows up.
fn flip(y: f32) -> f64 {
    (CHART_SPACE as f32 - y) as f64
}

fn paint_segment(
    ctx: &mut ratatui::widgets::canvas::Context<'_>,
    from: (f32, f32),
    to: (f32, f32),
    color: Color,
) {
    ctx.draw(&ChartLine {
        x1: from.0 as f64,
        y1: flip(from.1),
        x2: to.0 as f64,
        y2: flip(to.1),
        color,
    });
}

fn paint_loop(
    ctx: &mut ratatui::widgets::canvas::Context<'_>,
    points: &[(f32, f32)],
    color: Color,
) {
    if points.len() < 2 {
        return;
    }
    for i in 0..points.len() {
        paint_segment(ctx, points[i], points[(i + 1) % points.len()], color);
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{head}~")
    }
}
