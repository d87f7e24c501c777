use std::f32::consts::{FRAC_PI_2, TAU};

use crate::state::MAX_SCORE;

/// Inset reserved around the chart for axis labels.
pub const CHART_MARGIN: f32 = 40.0;
/// Distance of a label anchor beyond the full-radius point of its axis.
pub const LABEL_OFFSET: f32 = 14.0;
/// Axis count used when the competency set is empty.
pub const PLACEHOLDER_AXES: usize = 5;

/// Polar layout of the radar chart in raster coordinates (y grows down).
/// Axis 0 points straight up; axes proceed clockwise at 2π/N spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub axes: usize,
}

impl RadarGeometry {
    pub fn new(width: u32, height: u32, competency_count: usize) -> Self {
        let axes = if competency_count == 0 {
            PLACEHOLDER_AXES
        } else {
            competency_count
        };
        let w = width as f32;
        let h = height as f32;
        Self {
            cx: w / 2.0,
            cy: h / 2.0,
            radius: w.min(h) / 2.0 - CHART_MARGIN,
            axes,
        }
    }

    pub fn angle(&self, axis: usize) -> f32 {
        TAU * axis as f32 / self.axes as f32 - FRAC_PI_2
    }

    /// Point on axis `axis` at `fraction` of the chart radius from center.
    pub fn point(&self, axis: usize, fraction: f32) -> (f32, f32) {
        let angle = self.angle(axis);
        (
            self.cx + angle.cos() * self.radius * fraction,
            self.cy + angle.sin() * self.radius * fraction,
        )
    }

    pub fn axis_end(&self, axis: usize) -> (f32, f32) {
        self.point(axis, 1.0)
    }

    pub fn label_anchor(&self, axis: usize) -> (f32, f32) {
        let angle = self.angle(axis);
        (
            self.cx + angle.cos() * (self.radius + LABEL_OFFSET),
            self.cy + angle.sin() * (self.radius + LABEL_OFFSET),
        )
    }

    /// Closed N-gon connecting all axes at grid level `level` (1..=MAX_SCORE).
    pub fn grid_ring(&self, level: u8) -> Vec<(f32, f32)> {
        let fraction = level as f32 / MAX_SCORE as f32;
        (0..self.axes).map(|i| self.point(i, fraction)).collect()
    }

    /// Data polygon for a score vector; vertex i sits at score/MAX_SCORE of
    /// the radius along axis i. Values outside the scale are clamped.
    pub fn score_polygon(&self, scores: &[f32]) -> Vec<(f32, f32)> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                let fraction = (score / MAX_SCORE as f32).clamp(0.0, 1.0);
                self.point(i, fraction)
            })
            .collect()
    }
}
