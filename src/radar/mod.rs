pub mod font;
pub mod geometry;
pub mod png;
pub mod raster;

use crate::state::{MAX_SCORE, ScoreState};
use geometry::RadarGeometry;
use raster::{Canvas, Color};

const LABEL_SCALE: u32 = 1;

/// Chart palette. Self and peer series use two fixed hues with translucent
/// fills so both stay legible when they overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub grid: Color,
    pub axis: Color,
    pub label: Color,
    pub self_stroke: Color,
    pub self_fill: Color,
    pub peer_stroke: Color,
    pub peer_fill: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            grid: Color::rgba(122, 132, 153, 128),
            axis: Color::rgb(122, 132, 153),
            label: Color::rgb(31, 36, 48),
            self_stroke: Color::rgb(224, 31, 45),
            self_fill: Color::rgba(224, 31, 45, 46),
            peer_stroke: Color::rgb(31, 119, 180),
            peer_fill: Color::rgba(31, 119, 180, 46),
        }
    }
}

/// Redraws the whole scene from the current state: grid rings, axis lines,
/// labels, the self polygon, then the peer polygon on top when present.
/// The canvas is cleared first; nothing of the previous frame survives.
pub fn render(state: &ScoreState, theme: &Theme, canvas: &mut Canvas) {
    canvas.clear();
    let geo = RadarGeometry::new(canvas.width(), canvas.height(), state.len());

    for level in 1..=MAX_SCORE {
        canvas.stroke_polygon(&geo.grid_ring(level), theme.grid);
    }

    for axis in 0..geo.axes {
        canvas.line((geo.cx, geo.cy), geo.axis_end(axis), theme.axis);
    }

    for (axis, competency) in state.competencies().iter().enumerate() {
        let (x, y) = geo.label_anchor(axis);
        font::draw_text_centered(canvas, &competency.name, x, y, LABEL_SCALE, theme.label);
    }

    let self_values: Vec<f32> = state.self_scores().iter().map(|&v| v as f32).collect();
    let self_polygon = geo.score_polygon(&self_values);
    canvas.fill_polygon(&self_polygon, theme.self_fill);
    canvas.stroke_polygon(&self_polygon, theme.self_stroke);

    if let Some(peer) = state.peer_scores() {
        let peer_values: Vec<f32> = peer
            .iter()
            .map(|entry| entry.map(|v| v as f32).unwrap_or(0.0))
            .collect();
        let peer_polygon = geo.score_polygon(&peer_values);
        canvas.fill_polygon(&peer_polygon, theme.peer_fill);
        canvas.stroke_polygon(&peer_polygon, theme.peer_stroke);
    }
}

/// Renders a fresh frame at the given size.
pub fn render_chart(state: &ScoreState, theme: &Theme, width: u32, height: u32) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    render(state, theme, &mut canvas);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Competency;

    fn competency(name: &str) -> Competency {
        Competency {
            theme: "T".to_string(),
            name: name.to_string(),
            description: None,
        }
    }

    fn four_axis_state() -> ScoreState {
        let mut state = ScoreState::new();
        state.initialize(vec![
            competency("North"),
            competency("East"),
            competency("South"),
            competency("West"),
        ]);
        state
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut state = four_axis_state();
        state.set_self(0, 3).unwrap();
        let theme = Theme::default();
        let a = render_chart(&state, &theme, 320, 320);
        let b = render_chart(&state, &theme, 320, 320);
        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn test_reset_frames_are_pixel_identical() {
        let mut state = four_axis_state();
        let theme = Theme::default();
        state.set_self(1, 5).unwrap();
        state.reset_self();
        let first = render_chart(&state, &theme, 320, 320);
        state.reset_self();
        let second = render_chart(&state, &theme, 320, 320);
        assert_eq!(first.pixels(), second.pixels());
    }

    #[test]
    fn test_self_fill_covers_interior() {
        let mut state = four_axis_state();
        for i in 0..4 {
            state.set_self(i, 5).unwrap();
        }
        let theme = Theme::default();
        let canvas = render_chart(&state, &theme, 320, 320);
        // An interior point off the axis lines and grid rings: only the red
        // fill contributes, so the red channel dominates.
        let geo = RadarGeometry::new(320, 320, 4);
        let (x, y) = (geo.cx + geo.radius / 4.0, geo.cy - geo.radius / 4.0);
        let pixel = canvas.pixel(x as u32, y as u32);
        assert!(pixel.a > 0);
        assert!(pixel.r > pixel.b);
    }

    #[test]
    fn test_peer_overlay_is_visible_over_self() {
        let mut state = four_axis_state();
        state.set_peer(&[5.0, 5.0, 5.0, 5.0]);
        let theme = Theme::default();
        let canvas = render_chart(&state, &theme, 320, 320);
        let geo = RadarGeometry::new(320, 320, 4);
        let (x, y) = (geo.cx + geo.radius / 4.0, geo.cy - geo.radius / 4.0);
        let pixel = canvas.pixel(x as u32, y as u32);
        assert!(pixel.a > 0);
        assert!(pixel.b > pixel.r);
    }

    #[test]
    fn test_empty_state_renders_placeholder_grid() {
        let state = ScoreState::new();
        let theme = Theme::default();
        let canvas = render_chart(&state, &theme, 320, 320);
        assert!(canvas.pixels().iter().any(|&b| b != 0));
    }

    #[test]
    fn test_render_clears_previous_frame() {
        let mut state = four_axis_state();
        state.set_self(0, 5).unwrap();
        let theme = Theme::default();
        let mut canvas = Canvas::new(320, 320);
        render(&state, &theme, &mut canvas);
        state.reset_self();
        render(&state, &theme, &mut canvas);
        let reference = render_chart(&state, &theme, 320, 320);
        assert_eq!(canvas.pixels(), reference.pixels());
    }
}
