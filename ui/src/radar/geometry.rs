//! Plot geometry for the radar chart. Axes start at 12 o'clock and run
//! clockwise; the radial scale is fixed to `0..=DOMAIN_MAX`.

use std::f64::consts::{FRAC_PI_2, TAU};

pub const DOMAIN_MAX: f64 = 10.0;
/// Grid rings drawn at each of these scale values.
pub const RING_STEPS: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarFrame {
    pub center: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl RadarFrame {
    /// Square canvas of `size` with `margin` kept free for axis labels.
    pub fn new(size: f64, margin: f64) -> Self {
        Self {
            center: size / 2.0,
            radius: (size / 2.0 - margin).max(0.0),
        }
    }

    pub fn angle(index: usize, count: usize) -> f64 {
        if count == 0 {
            return -FRAC_PI_2;
        }
        -FRAC_PI_2 + TAU * index as f64 / count as f64
    }

    /// Position of `value` on axis `index` of `count`. Values outside the
    /// domain are drawn at its edge.
    pub fn point(&self, index: usize, count: usize, value: f64) -> Point {
        let scaled = value.clamp(0.0, DOMAIN_MAX) / DOMAIN_MAX;
        self.at(Self::angle(index, count), self.radius * scaled)
    }

    /// Axis end point pushed `offset` past the outer ring.
    pub fn label_point(&self, index: usize, count: usize, offset: f64) -> Point {
        self.at(Self::angle(index, count), self.radius + offset)
    }

    /// SVG `points` attribute for a series.
    pub fn polygon(&self, values: &[f64]) -> String {
        let count = values.len();
        values
            .iter()
            .enumerate()
            .map(|(index, value)| self.point(index, count, *value))
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// SVG `points` attribute for the grid ring at `value`.
    pub fn ring(&self, count: usize, value: f64) -> String {
        self.polygon(&vec![value; count])
    }

    fn at(&self, angle: f64, distance: f64) -> Point {
        Point {
            x: self.center + distance * angle.cos(),
            y: self.center + distance * angle.sin(),
        }
    }
}

/// `text-anchor` keeping labels outside the plot.
pub fn label_anchor(index: usize, count: usize) -> &'static str {
    let cos = RadarFrame::angle(index, count).cos();
    if cos > 0.1 {
        "start"
    } else if cos < -0.1 {
        "end"
    } else {
        "middle"
    }
}
