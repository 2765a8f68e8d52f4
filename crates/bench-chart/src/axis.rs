// File: crates/bench-chart/src/axis.rs
// Summary: Axis model with label, range and tick layout.

use crate::grid::nice_ticks;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self { Self::new("X", 0.0, 1.0) }

    pub fn default_y() -> Self { Self::new("Y", 0.0, 1.0) }

    /// Visible span, never smaller than a tiny epsilon.
    pub fn span(&self) -> f64 { (self.max - self.min).max(1e-9) }

    /// Position of `v` along the axis: 0.0 at `min`, 1.0 at `max`.
    #[inline]
    pub fn fraction(&self, v: f64) -> f64 { (v - self.min) / self.span() }

    /// Tick positions within the visible range.
    pub fn ticks(&self, target: usize) -> Vec<f64> { nice_ticks(self.min, self.max, target) }
}
